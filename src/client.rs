//! Inference endpoint client
//!
//! HTTP client that sends one chat completion to a configured endpoint, using
//! a [`ProviderAdapter`] for the provider-specific shapes.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    config::Config,
    error::{InferenceError, InferenceResult},
    native::{ChatCompletionRequest, ChatCompletionResponse, ModelInfo, ProviderAdapter},
};

/// Header carrying a per-request correlation ID
const CLIENT_REQUEST_ID: &str = "x-ms-client-request-id";

/// Anything that can complete a chat request
///
/// [`InferenceClient`] is the HTTP implementation; the builder only depends
/// on this trait.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &ChatCompletionRequest) -> InferenceResult<ChatCompletionResponse>;
}

/// Client bound to one endpoint, one credential and one adapter
pub struct InferenceClient {
    client: reqwest::Client,
    config: Config,
    adapter: Box<dyn ProviderAdapter>,
}

impl InferenceClient {
    /// Create a new client
    pub fn new(config: Config, adapter: impl ProviderAdapter + 'static) -> InferenceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(InferenceError::transport)?;

        Ok(Self::with_http_client(client, config, adapter))
    }

    /// Create a client around an existing HTTP client
    pub fn with_http_client(
        client: reqwest::Client,
        config: Config,
        adapter: impl ProviderAdapter + 'static,
    ) -> Self {
        Self {
            client,
            config,
            adapter: Box::new(adapter),
        }
    }

    pub fn provider(&self) -> &'static str {
        self.adapter.name()
    }

    /// Fetch model metadata from the endpoint
    #[instrument(skip(self), fields(provider = self.adapter.name()))]
    pub async fn model_info(&self) -> InferenceResult<ModelInfo> {
        let endpoint = self.config.endpoint_url()?;
        let url = self
            .adapter
            .model_info_url(endpoint, &self.config)
            .ok_or_else(|| {
                InferenceError::Validation(format!(
                    "provider {} has no model info operation",
                    self.adapter.name()
                ))
            })?;

        debug!(url = %url, "Fetching model info");

        let response = self
            .client
            .get(&url)
            .headers(self.default_headers()?)
            .send()
            .await
            .map_err(InferenceError::transport)?;

        Self::read_json(response).await
    }

    /// Send a chat completion request
    #[instrument(skip(self, request), fields(provider = self.adapter.name(), messages = request.messages.len()))]
    pub async fn chat_completions(
        &self,
        request: &ChatCompletionRequest,
    ) -> InferenceResult<ChatCompletionResponse> {
        let endpoint = self.config.endpoint_url()?;
        let mut request = request.clone();
        if request.model.is_none() {
            request.model = self.config.model.clone();
        }

        let payload = self.adapter.build_payload(&request)?;
        let url = self.adapter.chat_completions_url(endpoint, &self.config);

        info!(url = %url, model = ?request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = %e, "Failed to send request to inference endpoint");
                InferenceError::transport(e)
            })?;

        let body: serde_json::Value = Self::read_json(response).await?;
        let parsed = self.adapter.parse_response(body)?;

        debug!(
            model = %parsed.model,
            prompt_tokens = parsed.usage.prompt_tokens,
            completion_tokens = parsed.usage.completion_tokens,
            "Received chat completion"
        );

        Ok(parsed)
    }

    /// Check status and decode a JSON body
    async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> InferenceResult<R> {
        let status = response.status();
        debug!(status = %status, "Inference endpoint response status");

        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(status = %status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            error!(status = %status, body = %text, "Inference endpoint request failed");
            return Err(InferenceError::from_status(status.as_u16(), &text));
        }

        let body = response.text().await.map_err(InferenceError::transport)?;
        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to parse inference endpoint response");
            InferenceError::InvalidResponse(format!("response is not valid JSON: {}", e))
        })
    }

    /// Build headers for every request: auth, content type, request ID, provider extras
    fn default_headers(&self) -> InferenceResult<HeaderMap> {
        let mut headers = self.adapter.extra_headers(&self.config);

        let auth = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)).map_err(|_| {
            InferenceError::Configuration("API key contains characters not allowed in a header".to_string())
        })?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Ok(request_id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            headers.insert(CLIENT_REQUEST_ID, request_id);
        }

        Ok(headers)
    }
}

#[async_trait]
impl CompletionClient for InferenceClient {
    async fn complete(&self, request: &ChatCompletionRequest) -> InferenceResult<ChatCompletionResponse> {
        self.chat_completions(request).await
    }
}
