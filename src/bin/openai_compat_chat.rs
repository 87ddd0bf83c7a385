//! Single question to `gpt-4o` through the OpenAI-compatible GitHub Models endpoint
//!
//! Environment:
//! - `GITHUB_TOKEN` - GitHub personal access token (required)

use anyhow::{Context, Result};
use chat_inference::config::keys;
use chat_inference::native::{GenerationParams, OpenAiCompatAdapter};
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
    let config = Config::from_env(&keys::OPENAI_COMPAT)?;
    let client = InferenceClient::new(config, OpenAiCompatAdapter::new())?;

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system("You are a helpful assistant.")
        .user("What is the capital of France?");

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
