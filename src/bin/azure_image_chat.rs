//! Describe a local image with a vision-capable Azure AI Inference model
//!
//! Usage: `azure-image-chat [IMAGE_PATH]` (defaults to `血液型.png`)
//!
//! Environment:
//! - `AZURE_MODEL_ENDPOINT` - endpoint URL (required)
//! - `AZURE_INFERENCE_CREDENTIAL` - endpoint key (required)
//! - `AZURE_AI_CHAT_DEPLOYMENT_NAME` - value for the `azureml-model-deployment` header

use std::path::PathBuf;

use anyhow::{Context, Result};
use chat_inference::config::keys;
use chat_inference::native::{AzureInferenceAdapter, GenerationParams, ImageDetail};
use chat_inference::{report, ChatRequestBuilder, Config, InferenceClient};
use tracing::info;

const DEFAULT_IMAGE: &str = "血液型.png";

const SYSTEM_PROMPT: &str = "You are an AI assistant that describes images in details. Think in English for Japanese questions. English answers should be translated into Japanese as your final response.";

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
    let config = Config::from_env(&keys::AZURE_IMAGE)?;
    if config.deployment.is_none() {
        info!(
            variable = keys::AZURE_IMAGE.deployment.variable(),
            "Deployment name not set; azureml-model-deployment header will not be sent"
        );
    }

    let image_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE));

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system(SYSTEM_PROMPT)
        .add_text("この画像のグラフのデータ内容を説明してください");
    conversation
        .add_image_file(&image_path, ImageDetail::High)
        .with_context(|| format!("Failed to attach {}", image_path.display()))?;

    let client = InferenceClient::new(config, AzureInferenceAdapter::new())?;
    let response = conversation
        .send(&client, &GenerationParams::default())
        .await
        .context("Chat completion failed")?;
    print!("{}", report::render_content(&response));

    Ok(())
}
