//! chat-inference - single-shot chat completions against hosted inference endpoints
//!
//! Each binary under `src/bin` loads its configuration, builds one
//! conversation with [`ChatRequestBuilder`], sends it through an
//! [`InferenceClient`] and prints the reply with token usage.

pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod native;
pub mod report;

pub use crate::builder::ChatRequestBuilder;
pub use crate::client::{CompletionClient, InferenceClient};
pub use crate::config::{Config, EnvKeys, Setting};
pub use crate::error::{InferenceError, InferenceResult};

/// Initialize tracing on stderr, leaving stdout for results
///
/// Honors `RUST_LOG`; defaults to `chat_inference=info`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_inference=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

