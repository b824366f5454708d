//! Completion service configuration.

use plugchat_common::ConfigError;
use serde::{Deserialize, Serialize};

/// Which chat-completions API dialect to speak.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenAi,
    Azure,
}

/// `[completion]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub provider: Provider,
    /// Base URL. Required for Azure; defaults to the public OpenAI API.
    pub endpoint: Option<String>,
    /// Model name, or the deployment name for Azure.
    pub model: String,
    /// Azure `api-version` query parameter.
    pub api_version: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    pub max_tokens: Option<u32>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request HTTP timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: Provider::OpenAi,
            endpoint: None,
            model: "gpt-35-turbo-16k".into(),
            api_version: "2023-07-01-preview".into(),
            temperature: 0.0,
            max_tokens: None,
            api_key_env: "OPEN_AI_KEY".into(),
            request_timeout_secs: 120,
        }
    }
}

impl CompletionConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::MissingCredential(self.api_key_env.clone())),
        }
    }
}
