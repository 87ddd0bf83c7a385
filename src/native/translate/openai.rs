//! OpenAI-compatible translator
//!
//! For endpoints driven through the OpenAI chat completions contract, such as
//! the GitHub Models base URL used with an OpenAI client. The native types
//! are already OpenAI-shaped, so translation is mostly validation: the
//! `model` field is mandatory here.

use super::{parse_openai_shape, validate_messages, ProviderAdapter, TranslationError};
use crate::config::Config;
use crate::native::request::ChatCompletionRequest;
use crate::native::response::ChatCompletionResponse;

/// OpenAI chat completions adapter
#[derive(Debug, Clone, Default)]
pub struct OpenAiCompatAdapter;

impl OpenAiCompatAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for OpenAiCompatAdapter {
    fn name(&self) -> &'static str {
        "openai-compat"
    }

    fn chat_completions_url(&self, endpoint: &str, _config: &Config) -> String {
        format!("{}/chat/completions", endpoint)
    }

    fn build_payload(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, TranslationError> {
        if request.model.as_deref().map_or(true, |m| m.trim().is_empty()) {
            return Err(TranslationError::MissingRequiredField("model".to_string()));
        }
        validate_messages(&request.messages)?;
        Ok(serde_json::to_value(request)?)
    }

    fn parse_response(
        &self,
        response: serde_json::Value,
    ) -> Result<ChatCompletionResponse, TranslationError> {
        parse_openai_shape(self, response)
    }
}
