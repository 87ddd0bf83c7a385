//! Request types
//!
//! Defines the chat completion request and the generation parameters that
//! accompany it.

use serde::{Deserialize, Serialize};

use super::types::Message;
use crate::error::{InferenceError, InferenceResult};

/// Sampling and length parameters for one completion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Maximum tokens to generate (must be positive)
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f64>,
    /// Nucleus sampling parameter (0.0 to 1.0)
    pub top_p: Option<f64>,
    /// Model identifier, required by multi-model endpoints
    pub model: Option<String>,
}

impl GenerationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Check every set parameter is within the range endpoints accept
    pub fn validate(&self) -> InferenceResult<()> {
        if self.max_tokens == Some(0) {
            return Err(InferenceError::Validation(
                "max_tokens must be a positive integer".to_string(),
            ));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(InferenceError::Validation(format!(
                    "temperature must be between 0 and 2, got {}",
                    t
                )));
            }
        }
        if let Some(p) = self.top_p {
            if !(0.0..=1.0).contains(&p) {
                return Err(InferenceError::Validation(format!(
                    "top_p must be between 0 and 1, got {}",
                    p
                )));
            }
        }
        if matches!(self.model.as_deref(), Some(m) if m.trim().is_empty()) {
            return Err(InferenceError::Validation(
                "model identifier must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    /// Messages in the conversation
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(messages: Vec<Message>, params: &GenerationParams) -> Self {
        Self {
            messages,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            top_p: params.top_p,
            model: params.model.clone(),
        }
    }
}
