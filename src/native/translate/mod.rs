//! Translation layer between native types and provider wire formats
//!
//! A [`ProviderAdapter`] owns everything that differs between providers: the
//! payload shape, the response shape, the URL layout and the extra headers.
//! Each entry point picks one adapter at startup.

pub mod azure;
pub mod openai;

use reqwest::header::HeaderMap;
use thiserror::Error;
use tracing::warn;

use super::request::ChatCompletionRequest;
use super::response::{ChatCompletionResponse, Choice, FinishReason, Usage, WireResponse};
use super::types::Message;
use crate::config::Config;

/// Errors that can occur during message translation
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Message format is invalid for the target provider
    #[error("Invalid message format: {0}")]
    InvalidMessageFormat(String),

    /// A required field is missing from the input
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Provider response did not have the expected shape
    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Provider-specific request/response handling
///
/// Implementations translate the native request into the JSON body the
/// provider expects and normalize the provider's JSON response back into a
/// [`ChatCompletionResponse`].
pub trait ProviderAdapter: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Full URL of the chat completions operation
    fn chat_completions_url(&self, endpoint: &str, config: &Config) -> String;

    /// Full URL of the model info operation, when the provider has one
    fn model_info_url(&self, _endpoint: &str, _config: &Config) -> Option<String> {
        None
    }

    /// Provider headers added on top of authorization and content type
    fn extra_headers(&self, _config: &Config) -> HeaderMap {
        HeaderMap::new()
    }

    /// Translate a native request to provider JSON
    ///
    /// # Errors
    ///
    /// Returns `TranslationError` if a field the provider requires is missing
    /// or a message cannot be expressed in the provider format.
    fn build_payload(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, TranslationError>;

    /// Translate provider response JSON to the native response
    fn parse_response(
        &self,
        response: serde_json::Value,
    ) -> Result<ChatCompletionResponse, TranslationError>;

    /// Map a provider stop reason to the unified set
    fn translate_stop_reason(&self, reason: &str) -> FinishReason {
        match reason {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            "content_filter" => FinishReason::ContentFilter,
            "tool_calls" => FinishReason::ToolCalls,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// Reject conversations no chat endpoint would accept
pub(crate) fn validate_messages(messages: &[Message]) -> Result<(), TranslationError> {
    if messages.is_empty() {
        return Err(TranslationError::InvalidMessageFormat(
            "conversation must contain at least one message".to_string(),
        ));
    }
    for (index, message) in messages.iter().enumerate() {
        if let Some(parts) = message.content.parts() {
            if parts.is_empty() {
                return Err(TranslationError::InvalidMessageFormat(format!(
                    "message {} has an empty content list",
                    index
                )));
            }
        }
        if message.role != super::types::Role::User && message.content.has_images() {
            return Err(TranslationError::InvalidMessageFormat(format!(
                "message {} ({}) carries an image; only user messages may",
                index, message.role
            )));
        }
    }
    Ok(())
}

/// Normalize an OpenAI-shaped response body
///
/// Shared by both adapters since Azure AI Inference mirrors the OpenAI
/// response contract.
pub(crate) fn parse_openai_shape<A: ProviderAdapter + ?Sized>(
    adapter: &A,
    response: serde_json::Value,
) -> Result<ChatCompletionResponse, TranslationError> {
    let wire: WireResponse = serde_json::from_value(response)
        .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

    if wire.choices.is_empty() {
        return Err(TranslationError::MalformedResponse(
            "response contains no choices".to_string(),
        ));
    }

    let usage = match wire.usage {
        Some(u) => {
            let usage = Usage::new(u.prompt_tokens, u.completion_tokens);
            if let Some(reported) = u.total_tokens {
                if u64::from(reported) != usage.total_tokens {
                    warn!(
                        provider = adapter.name(),
                        reported,
                        computed = usage.total_tokens,
                        "Provider total_tokens disagrees with prompt + completion"
                    );
                }
            }
            usage
        }
        None => Usage::default(),
    };

    let choices = wire
        .choices
        .into_iter()
        .map(|choice| Choice {
            index: choice.index,
            message: choice.message.into(),
            finish_reason: choice
                .finish_reason
                .as_deref()
                .map(|r| adapter.translate_stop_reason(r)),
        })
        .collect();

    Ok(ChatCompletionResponse {
        id: wire.id,
        created: wire.created,
        model: wire.model,
        choices,
        usage,
    })
}

// Re-export key types for convenience
pub use azure::AzureInferenceAdapter;
pub use openai::OpenAiCompatAdapter;
