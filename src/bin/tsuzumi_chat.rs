//! Japanese multi-turn chat against a tsuzumi model endpoint
//!
//! Environment:
//! - `AZ-TSUZUMI_ENDPOINT` - endpoint URL (required)
//! - `AZ-TSUZUMI_INFERENCE_CREDENTIAL` - endpoint key (required)

use anyhow::{Context, Result};
use chat_inference::config::keys;
use chat_inference::native::{AzureInferenceAdapter, GenerationParams};
use chat_inference::{report, ChatRequestBuilder, Config, InferenceClient};

const TOKYO_ANSWER: &str = "東京は、日本の首都であり、現代的な都市景観と伝統的な文化が共存する魅力的な都市です。以下は東京で訪れるべきおすすめスポットです：\n\n1. 東京タワー: 東京の象徴的なランドマークで、展望台からは素晴らしい景色が楽しめます。\n2. 浅草と浅草寺: 江戸時代から続く歴史あるエリアで、日本の伝統的な雰囲気が感じられます。\n3. 渋谷スクランブル交差点: 世界的に有名な交差点で、東京の活気を体験できます。\n\nこれらは東京が提供する多くの魅力の一部です。他にもたくさんの観光スポットがありますので、ぜひ東京を満喫してください。";

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
    let config = Config::from_env(&keys::TSUZUMI)?;
    let client = InferenceClient::new(config, AzureInferenceAdapter::new())?;

    let model_info = client
        .model_info()
        .await
        .context("Failed to fetch model info")?;
    print!("{}", report::render_model_info(&model_info));

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .user("東京に行く予定ですが、何を見ればいいですか？")
        .assistant(TOKYO_ANSWER)
        .user("大阪はどうですか？");

    let params = GenerationParams::new().max_tokens(4096).temperature(0.15);

    let response = conversation
        .send(&client, &params)
        .await
        .context("Chat completion failed")?;
    print!("{}", report::render_summary(&response));

    Ok(())
}
