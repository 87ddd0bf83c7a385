//! Configuration management for chat-inference
//!
//! Each entry point describes the settings it needs with an [`EnvKeys`] table.
//! [`Config::from_env`] resolves that table once, up front, so nothing past
//! this module reads the process environment.

pub mod keys;

use std::env;
use std::time::Duration;

use crate::error::{InferenceError, InferenceResult};

/// Default GitHub Models inference endpoint
pub const GITHUB_MODELS_ENDPOINT: &str = "https://models.inference.ai.azure.com";

/// API version sent to Azure AI Inference endpoints
pub const AZURE_INFERENCE_API_VERSION: &str = "2024-05-01-preview";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Where a single configuration value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Must be set and non-empty
    Required(&'static str),
    /// Read when set and non-empty
    Optional(&'static str),
    /// Read when set and non-empty, otherwise the fallback value
    WithDefault(&'static str, &'static str),
    /// Constant value, never read from the environment
    Fixed(&'static str),
    /// Not used by this entry point
    Unset,
}

impl Setting {
    fn resolve<F>(&self, lookup: &F) -> InferenceResult<Option<String>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        match *self {
            Setting::Required(name) => present(name).map(Some).ok_or_else(|| {
                InferenceError::Configuration(format!("environment variable {} must be set", name))
            }),
            Setting::Optional(name) => Ok(present(name)),
            Setting::WithDefault(name, fallback) => {
                Ok(Some(present(name).unwrap_or_else(|| fallback.to_string())))
            }
            Setting::Fixed(value) => Ok(Some(value.to_string())),
            Setting::Unset => Ok(None),
        }
    }

    /// Environment variable backing this setting, if any
    pub fn variable(&self) -> Option<&'static str> {
        match *self {
            Setting::Required(name) | Setting::Optional(name) | Setting::WithDefault(name, _) => {
                Some(name)
            }
            Setting::Fixed(_) | Setting::Unset => None,
        }
    }
}

/// Settings an entry point needs, by field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvKeys {
    /// Base URL of the inference endpoint
    pub endpoint: Setting,
    /// API key or token; always required
    pub api_key: &'static str,
    /// Model identifier (multi-model endpoints)
    pub model: Setting,
    /// Value for the `azureml-model-deployment` routing header
    pub deployment: Setting,
}

/// Resolved configuration for one inference endpoint
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint base URL; absence is reported when a request is sent
    pub endpoint: Option<String>,
    /// API key or token
    pub api_key: String,
    /// Model identifier
    pub model: Option<String>,
    /// Deployment routing header value
    pub deployment: Option<String>,
    /// `api-version` query value for Azure endpoints
    pub api_version: String,
    /// HTTP request timeout
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env(keys: &EnvKeys) -> InferenceResult<Self> {
        Self::from_lookup(keys, |name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(keys: &EnvKeys, lookup: F) -> InferenceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = Setting::Required(keys.api_key)
            .resolve(&lookup)
            .map_err(|_| {
                InferenceError::Configuration(format!(
                    "a key should be provided to invoke the endpoint (set {})",
                    keys.api_key
                ))
            })?
            .unwrap_or_default();

        Ok(Self {
            endpoint: keys.endpoint.resolve(&lookup)?,
            api_key,
            model: keys.model.resolve(&lookup)?,
            deployment: keys.deployment.resolve(&lookup)?,
            api_version: AZURE_INFERENCE_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration directly, bypassing the environment
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            api_key: api_key.into(),
            model: None,
            deployment: None,
            api_version: AZURE_INFERENCE_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    /// Endpoint URL with trailing slashes removed
    ///
    /// Fails with a validation error when no endpoint was configured.
    pub fn endpoint_url(&self) -> InferenceResult<&str> {
        let endpoint = self
            .endpoint
            .as_deref()
            .map(|e| e.trim().trim_end_matches('/'))
            .filter(|e| !e.is_empty())
            .ok_or_else(|| InferenceError::Validation("endpoint URL is not configured".to_string()))?;

        reqwest::Url::parse(endpoint).map_err(|e| {
            InferenceError::Validation(format!("endpoint URL '{}' is invalid: {}", endpoint, e))
        })?;

        Ok(endpoint)
    }
}
