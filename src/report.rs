//! Stdout rendering of results

use std::fmt::Write;

use crate::native::{ChatCompletionResponse, ModelInfo};

pub fn render_model_info(info: &ModelInfo) -> String {
    format!(
        "Model name: {}\nModel type: {}\nModel provider name: {}\n",
        info.model_name, info.model_type, info.model_provider_name
    )
}

/// Response text, serving model and token usage
pub fn render_summary(response: &ChatCompletionResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Response: {}", response.first_content().unwrap_or_default());
    let _ = writeln!(out, "Model: {}", response.model);
    let _ = writeln!(out, "Usage:");
    let _ = writeln!(out, "\tPrompt tokens: {}", response.usage.prompt_tokens);
    let _ = writeln!(out, "\tTotal tokens: {}", response.usage.total_tokens);
    let _ = writeln!(out, "\tCompletion tokens: {}", response.usage.completion_tokens);
    out
}

/// Only the text of the first choice
pub fn render_content(response: &ChatCompletionResponse) -> String {
    format!("{}\n", response.first_content().unwrap_or_default())
}
