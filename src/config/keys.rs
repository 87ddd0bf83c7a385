//! Settings tables for the sample entry points
//!
//! One [`EnvKeys`] per executable. Variable names follow the deployment docs
//! for each endpoint, including the hyphenated tsuzumi names.

use super::{EnvKeys, Setting, GITHUB_MODELS_ENDPOINT};

/// Model served by `openai-compat-chat`
pub const OPENAI_COMPAT_MODEL: &str = "gpt-4o";

/// `azure-inference-chat`: endpoint absence surfaces when the request is sent
pub const AZURE_INFERENCE: EnvKeys = EnvKeys {
    endpoint: Setting::Optional("AZURE_MODEL_ENDPOINT"),
    api_key: "AZURE_INFERENCE_CREDENTIAL",
    model: Setting::Unset,
    deployment: Setting::Unset,
};

/// `github-models-chat`
pub const GITHUB_MODELS: EnvKeys = EnvKeys {
    endpoint: Setting::Fixed(GITHUB_MODELS_ENDPOINT),
    api_key: "GITHUB_TOKEN",
    model: Setting::Required("MODEL_NAME"),
    deployment: Setting::Unset,
};

/// `azure-image-chat`
pub const AZURE_IMAGE: EnvKeys = EnvKeys {
    endpoint: Setting::Required("AZURE_MODEL_ENDPOINT"),
    api_key: "AZURE_INFERENCE_CREDENTIAL",
    model: Setting::Unset,
    deployment: Setting::Optional("AZURE_AI_CHAT_DEPLOYMENT_NAME"),
};

/// `tsuzumi-chat`
pub const TSUZUMI: EnvKeys = EnvKeys {
    endpoint: Setting::Required("AZ-TSUZUMI_ENDPOINT"),
    api_key: "AZ-TSUZUMI_INFERENCE_CREDENTIAL",
    model: Setting::Unset,
    deployment: Setting::Unset,
};

/// `openai-compat-chat`
pub const OPENAI_COMPAT: EnvKeys = EnvKeys {
    endpoint: Setting::Fixed(GITHUB_MODELS_ENDPOINT),
    api_key: "GITHUB_TOKEN",
    model: Setting::Fixed(OPENAI_COMPAT_MODEL),
    deployment: Setting::Unset,
};
