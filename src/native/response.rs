//! Response types
//!
//! Normalized chat completion response and model metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{Content, Message, Role};

/// Token usage statistics
///
/// Built through [`Usage::new`] so `total_tokens` always equals the sum of
/// the other two counters. Providers report 32-bit counts; the wider fields
/// keep the sum exact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Usage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u64,
    /// Number of tokens in the completion
    pub completion_tokens: u64,
    /// Total tokens used
    pub total_tokens: u64,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        let prompt_tokens = u64::from(prompt_tokens);
        let completion_tokens = u64::from(completion_tokens);
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Why the model stopped generating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
    Other(String),
}

impl FinishReason {
    pub fn as_str(&self) -> &str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::ToolCalls => "tool_calls",
            FinishReason::Other(reason) => reason,
        }
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completion choice
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub index: u32,
    /// The generated message
    pub message: Message,
    /// Reason the generation stopped
    pub finish_reason: Option<FinishReason>,
}

/// Chat completion response, normalized across providers
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub created: u64,
    /// Model that actually served the request
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any
    pub fn first_content(&self) -> Option<String> {
        self.choices.first().map(|c| c.message.content.as_text())
    }
}

/// Model metadata reported by Azure AI Inference endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_type: String,
    pub model_provider_name: String,
}

/// Wire shape of a response message before normalization
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireMessage {
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub content: Option<Content>,
}

fn default_role() -> Role {
    Role::Assistant
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        Message {
            role: wire.role,
            content: wire.content.unwrap_or_else(|| Content::Text(String::new())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireChoice {
    #[serde(default)]
    pub index: u32,
    pub message: WireMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub model: String,
    pub choices: Vec<WireChoice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}
