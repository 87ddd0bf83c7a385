//! Native chat types for chat-inference
//!
//! This module defines the canonical message format that provider adapters
//! translate to and from. Types mirror the OpenAI chat completions shapes.

pub mod image;
pub mod request;
pub mod response;
pub mod translate;
pub mod types;

// Re-export key types for convenience
pub use image::{load_image, load_image_file, mime_type_for_path};
pub use request::{ChatCompletionRequest, GenerationParams};
pub use response::{ChatCompletionResponse, Choice, FinishReason, ModelInfo, Usage};
pub use translate::{AzureInferenceAdapter, OpenAiCompatAdapter, ProviderAdapter};
pub use types::{Content, ContentPart, ImageDetail, ImageUrl, Message, Role};
