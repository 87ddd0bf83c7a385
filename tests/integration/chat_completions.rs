//! Chat completions integration tests
//!
//! Tests for sending one conversation through the HTTP client:
//! - Payload shape and message order on the wire
//! - Response normalization (content, model, usage, finish reason)
//! - Error mapping for rejected credentials and service failures

use chat_inference::native::{AzureInferenceAdapter, FinishReason, GenerationParams, OpenAiCompatAdapter};
use chat_inference::{ChatRequestBuilder, Config, InferenceClient, InferenceError};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::mocks::{constants, InferenceTestData, MockInferenceEndpoint};

fn azure_client(endpoint: &MockInferenceEndpoint) -> InferenceClient {
    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY);
    InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap()
}

fn paris_conversation() -> ChatRequestBuilder {
    let mut conversation = ChatRequestBuilder::new();
    conversation
        .user("I am going to Paris, what should I see?")
        .assistant("1. The Eiffel Tower 2. The Louvre Museum 3. Notre-Dame Cathedral")
        .user("What is so great about #1?");
    conversation
}

#[tokio::test]
async fn test_capital_of_japan_scenario() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let client = azure_client(&endpoint);
    let mut conversation = ChatRequestBuilder::new();
    conversation.user("What is the capital of Japan?");

    let params = GenerationParams::new().max_tokens(1000).temperature(1.0);
    let response = conversation.send(&client, &params).await.unwrap();

    let content = response.first_content().unwrap();
    assert!(!content.is_empty());
    assert!(response.usage.total_tokens > 0);
    assert_eq!(response.model, constants::TEST_MODEL);
}

#[tokio::test]
async fn test_payload_has_every_message_in_order() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let client = azure_client(&endpoint);
    let params = GenerationParams::new().max_tokens(2048).temperature(0.0).top_p(1.0);
    paris_conversation().send(&client, &params).await.unwrap();

    let bodies = endpoint.received_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(
        bodies[0],
        json!({
            "messages": [
                {"role": "user", "content": "I am going to Paris, what should I see?"},
                {"role": "assistant", "content": "1. The Eiffel Tower 2. The Louvre Museum 3. Notre-Dame Cathedral"},
                {"role": "user", "content": "What is so great about #1?"}
            ],
            "max_tokens": 2048,
            "temperature": 0.0,
            "top_p": 1.0
        })
    );
}

#[tokio::test]
async fn test_usage_total_is_prompt_plus_completion() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_with_usage("The Eiffel Tower is 330 metres tall.", 412, 57)
        .await;

    let client = azure_client(&endpoint);
    let response = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(response.usage.prompt_tokens, 412);
    assert_eq!(response.usage.completion_tokens, 57);
    assert_eq!(response.usage.total_tokens, 469);
}

#[tokio::test]
async fn test_finish_reason_normalized() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::length_limited_response())
        .await;

    let client = azure_client(&endpoint);
    let response = paris_conversation()
        .send(&client, &GenerationParams::new().max_tokens(8))
        .await
        .unwrap();

    assert_eq!(response.choices[0].finish_reason, Some(FinishReason::Length));
}

#[tokio::test]
async fn test_config_model_is_sent() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY).with_model("Phi-3.5-mini-instruct");
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system("You are a helpful assistant.")
        .user("What is the capital of Japan?");
    conversation
        .send(&client, &GenerationParams::new().max_tokens(1000))
        .await
        .unwrap();

    let bodies = endpoint.received_bodies().await;
    assert_eq!(bodies[0]["model"], json!("Phi-3.5-mini-instruct"));
}

#[tokio::test]
async fn test_deployment_header_forwarded() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY).with_deployment("phi-vision-1");
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();

    paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap();

    assert_eq!(
        endpoint.last_header("azureml-model-deployment").await.as_deref(),
        Some("phi-vision-1")
    );
}

#[tokio::test]
async fn test_trailing_slash_endpoint() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let config = Config::new(format!("{}/", endpoint.uri()), constants::TEST_API_KEY);
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();

    let result = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_openai_compatible_endpoint() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_openai_chat_completion_success(InferenceTestData::response_with_content(
            "The capital of France is Paris.",
        ))
        .await;

    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY).with_model("gpt-4o");
    let client = InferenceClient::new(config, OpenAiCompatAdapter::new()).unwrap();

    let mut conversation = ChatRequestBuilder::new();
    conversation
        .system("You are a helpful assistant.")
        .user("What is the capital of France?");

    let params = GenerationParams::new().temperature(1.0).top_p(1.0).max_tokens(1000);
    let response = conversation.send(&client, &params).await.unwrap();

    assert_eq!(
        response.first_content().as_deref(),
        Some("The capital of France is Paris.")
    );
    let bodies = endpoint.received_bodies().await;
    assert_eq!(bodies[0]["model"], json!("gpt-4o"));
    assert_eq!(bodies[0]["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_openai_without_model_never_reaches_endpoint() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint
        .mock_openai_chat_completion_success(InferenceTestData::simple_response())
        .await;

    let config = Config::new(endpoint.uri(), constants::TEST_API_KEY);
    let client = InferenceClient::new(config, OpenAiCompatAdapter::new()).unwrap();

    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Validation(_)));
    assert_eq!(endpoint.request_count().await, 0);
}

#[tokio::test]
async fn test_rejected_credential_is_authentication_error() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint.mock_chat_completion_unauthorized().await;

    let config = Config::new(endpoint.uri(), "wrong-key");
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();

    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    match err {
        InferenceError::Authentication { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid subscription key"));
        }
        other => panic!("expected Authentication, got {:?}", other),
    }
}

#[tokio::test]
async fn test_service_failure_is_endpoint_error() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint.mock_chat_completion_server_error(503).await;

    let client = azure_client(&endpoint);
    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    match err {
        InferenceError::Endpoint { status, message } => {
            assert_eq!(status, Some(503));
            assert_eq!(message, "upstream model is unavailable");
        }
        other => panic!("expected Endpoint, got {:?}", other),
    }
    // one attempt, no retry
    assert_eq!(endpoint.request_count().await, 1);
}

#[tokio::test]
async fn test_error_without_body_keeps_status() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint.mock_chat_completion_empty_error(502).await;

    let client = azure_client(&endpoint);
    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    match err {
        InferenceError::Endpoint { status, message } => {
            assert_eq!(status, Some(502));
            assert_eq!(message, "empty response body");
        }
        other => panic!("expected Endpoint, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let endpoint = MockInferenceEndpoint::start().await;
    endpoint.mock_chat_completion_garbage().await;

    let client = azure_client(&endpoint);
    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_endpoint_error() {
    // Nothing listens on the discard port locally
    let config = Config::new("http://127.0.0.1:9", constants::TEST_API_KEY);
    let client = InferenceClient::new(config, AzureInferenceAdapter::new()).unwrap();

    let err = paris_conversation()
        .send(&client, &GenerationParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InferenceError::Endpoint { status: None, .. }));
}
