//! Multimodal integration tests
//!
//! Tests for attaching local images to the user turn and sending them inline.

use std::io::Write;

use chat_inference::native::{AzureInferenceAdapter, GenerationParams, ImageDetail};
use chat_inference::{ChatRequestBuilder, Config, InferenceClient, InferenceError};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mocks::{constants, InferenceTestData, MockInferenceEndpoint};

#[tokio::test]
async fn test_image_sent_inline_after_text() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::response_with_content(
            "The chart shows blood type distribution.",
        ))
        .await;

    let mut image = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    image.write_all(b"fake-png").unwrap();

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system("You are an AI assistant that describes images in details.")
        .add_text("この画像のグラフのデータ内容を説明してください");
    conversation
        .add_image_file(image.path(), ImageDetail::High)
        .unwrap();

    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY);
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();
    let response = conversation
        .send(&client, &GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(
        response.first_content().as_deref(),
        Some("The chart shows blood type distribution.")
    );

    let bodies = endpoint.received_bodies().await;
    let user_content = &bodies[0]["messages"][1]["content"];
    assert_eq!(
        user_content,
        &json!([
            {"type": "text", "text": "この画像のグラフのデータ内容を説明してください"},
            {"type": "image_url", "image_url": {"url": "data:image/png;base64,ZmFrZS1wbmc=", "detail": "high"}}
        ])
    );
}

#[tokio::test]
async fn test_missing_image_fails_without_network_call() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let mut conversation = ChatRequestBuilder::new();
    conversation.add_text("Describe this image");
    let err = conversation
        .add_image("does-not-exist/血液型.png", "image/png", ImageDetail::High)
        .unwrap_err();

    assert!(matches!(err, InferenceError::FileNotFound { .. }));
    assert_eq!(endpoint.request_count().await, 0);
}

#[tokio::test]
async fn test_missing_image_with_unknown_extension_is_file_not_found() {
    let endpoint = MockInferenceEndpoint::start().await;

    let mut conversation = ChatRequestBuilder::new();
    let err = conversation
        .add_image_file("does-not-exist/scan.unknownext", ImageDetail::High)
        .unwrap_err();

    assert!(matches!(err, InferenceError::FileNotFound { .. }));
    assert_eq!(endpoint.request_count().await, 0);
}
