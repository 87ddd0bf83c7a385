//! Multi-turn chat against an Azure AI Inference model endpoint
//!
//! Prints the endpoint's model metadata, then asks a follow-up question in
//! an existing conversation and prints the answer with token usage.
//!
//! Environment:
//! - `AZURE_INFERENCE_CREDENTIAL` - endpoint key (required)
//! - `AZURE_MODEL_ENDPOINT` - endpoint URL

use anyhow::{Context, Result};
use chat_inference::config::keys;
use chat_inference::native::{AzureInferenceAdapter, GenerationParams};
use chat_inference::{report, ChatRequestBuilder, Config, InferenceClient};
use tracing::info;

const PARIS_ANSWER: &str = "Paris, the capital of France, is known for its stunning architecture, art museums, historical landmarks, and romantic atmosphere. Here are some of the top attractions to see in Paris:\n\n1. The Eiffel Tower: The iconic Eiffel Tower is one of the most recognizable landmarks in the world and offers breathtaking views of the city.\n2. The Louvre Museum: The Louvre is one of the world's largest and most famous museums, housing an impressive collection of art and artifacts, including the Mona Lisa.\n3. Notre-Dame Cathedral: This beautiful cathedral is one of the most famous landmarks in Paris and is known for its Gothic architecture and stunning stained glass windows.\n\nThese are just a few of the many attractions that Paris has to offer. With so much to see and do, it's no wonder that Paris is one of the most popular tourist destinations in the world.";

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
    let config = Config::from_env(&keys::AZURE_INFERENCE)?;
    let client = InferenceClient::new(config, AzureInferenceAdapter::new())?;
    info!(provider = client.provider(), "Client ready");

    let model_info = client
        .model_info()
        .await
        .context("Failed to fetch model info")?;
    print!("{}", report::render_model_info(&model_info));

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .user("I am going to Paris, what should I see?")
        .assistant(PARIS_ANSWER)
        .user("What is so great about #1?");

    let params = GenerationParams::new()
        .max_tokens(2048)
        .temperature(0.0)
        .top_p(1.0);

    let response = conversation
        .send(&client, &params)
        .await
        .context("Chat completion failed")?;
    print!("{}", report::render_summary(&response));

    Ok(())
}
