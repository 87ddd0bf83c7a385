//! Single question to a GitHub Models model through the Azure AI Inference API
//!
//! Environment:
//! - `GITHUB_TOKEN` - GitHub personal access token (required)
//! - `MODEL_NAME` - model to call, e.g. `Phi-3.5-mini-instruct` (required)

use anyhow::{Context, Result};
use chat_inference::config::keys;
use chat_inference::native::{AzureInferenceAdapter, GenerationParams};
use chat_inference::{report, ChatRequestBuilder, Config, InferenceClient};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    chat_inference::init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env(&keys::GITHUB_MODELS)?;
    let client = InferenceClient::new(config, AzureInferenceAdapter::new())?;

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system("You are a helpful assistant.")
        .user("What is the capital of Japan?");

    // model comes from MODEL_NAME via the client config
    let params = GenerationParams::new()
        .temperature(1.0)
        .top_p(1.0)
        .max_tokens(1000);

    let response = conversation
        .send(&client, &params)
        .await
        .context("Chat completion failed")?;
    print!("{}", report::render_content(&response));

    Ok(())
}
