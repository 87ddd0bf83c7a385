//! Azure AI Inference translator
//!
//! Covers serverless/managed-compute model endpoints and GitHub Models, which
//! speak the Azure AI Model Inference API. The chat body is OpenAI-shaped;
//! the differences are the `api-version` query, the model-info operation and
//! the optional deployment routing header.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

use super::{parse_openai_shape, validate_messages, ProviderAdapter, TranslationError};
use crate::config::Config;
use crate::native::request::ChatCompletionRequest;
use crate::native::response::ChatCompletionResponse;

/// Header that pins a request to one deployment behind a shared endpoint
pub const DEPLOYMENT_HEADER: &str = "azureml-model-deployment";

/// Azure AI Model Inference adapter
#[derive(Debug, Clone, Default)]
pub struct AzureInferenceAdapter;

impl AzureInferenceAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderAdapter for AzureInferenceAdapter {
    fn name(&self) -> &'static str {
        "azure-inference"
    }

    fn chat_completions_url(&self, endpoint: &str, config: &Config) -> String {
        format!(
            "{}/chat/completions?api-version={}",
            endpoint, config.api_version
        )
    }

    fn model_info_url(&self, endpoint: &str, config: &Config) -> Option<String> {
        Some(format!("{}/info?api-version={}", endpoint, config.api_version))
    }

    fn extra_headers(&self, config: &Config) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(deployment) = config.deployment.as_deref() {
            match HeaderValue::from_str(deployment) {
                Ok(value) => {
                    headers.insert(HeaderName::from_static(DEPLOYMENT_HEADER), value);
                }
                Err(_) => {
                    warn!(deployment, "Deployment name is not a valid header value, skipping");
                }
            }
        }
        headers
    }

    fn build_payload(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<serde_json::Value, TranslationError> {
        validate_messages(&request.messages)?;
        Ok(serde_json::to_value(request)?)
    }

    fn parse_response(
        &self,
        response: serde_json::Value,
    ) -> Result<ChatCompletionResponse, TranslationError> {
        parse_openai_shape(self, response)
    }
}
