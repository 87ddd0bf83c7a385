//! Error types for chat-inference
//!
//! Every failure is fatal for a sample run; the variants exist so callers and
//! tests can tell configuration problems apart from endpoint problems.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::native::translate::TranslationError;

/// Library-level errors
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Authentication rejected ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("{}", endpoint_message(.status, .message))]
    Endpoint {
        status: Option<u16>,
        message: String,
    },

    #[error("Image file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Unrecognized role: {0}")]
    InvalidRole(String),

    #[error("Malformed response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn endpoint_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(status) => format!("Endpoint error {}: {}", status, message),
        None => format!("Endpoint unreachable: {}", message),
    }
}

impl InferenceError {
    /// Wrap a transport failure (connect, timeout, body read)
    pub fn transport(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("failed to connect: {}", err)
        } else {
            err.to_string()
        };
        InferenceError::Endpoint {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }

    /// Classify a non-success HTTP status returned by the endpoint
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = upstream_message(body);
        match status {
            401 | 403 => InferenceError::Authentication { status, message },
            _ => InferenceError::Endpoint {
                status: Some(status),
                message,
            },
        }
    }
}

impl From<TranslationError> for InferenceError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::MissingRequiredField(_) | TranslationError::InvalidMessageFormat(_) => {
                InferenceError::Validation(err.to_string())
            }
            TranslationError::MalformedResponse(_) => InferenceError::InvalidResponse(err.to_string()),
            TranslationError::SerializationError(e) => InferenceError::Json(e),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorResponse {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Pull the human-readable message out of an OpenAI/Azure style error body
fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<UpstreamErrorResponse>(body) {
        Ok(parsed) => match parsed.error.code {
            Some(code) => format!("{} ({})", parsed.error.message, code),
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Result type alias for convenience
pub type InferenceResult<T> = Result<T, InferenceError>;
