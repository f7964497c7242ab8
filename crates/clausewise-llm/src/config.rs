//! Connection settings for the model services

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default OpenAI-compatible API endpoint
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com";

/// Default chat model used for rewriting
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Default environment variable holding the chat API key
pub const DEFAULT_CHAT_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default Hugging Face inference endpoint
pub const DEFAULT_SUMMARIZER_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Default summarization model
pub const DEFAULT_SUMMARIZER_MODEL: &str = "sshleifer/distilbart-cnn-12-6";

/// Default environment variable holding the inference API token
pub const DEFAULT_SUMMARIZER_KEY_ENV: &str = "HF_API_TOKEN";

/// Default timeout for a single service request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat-completion service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatModelConfig {
    /// Base URL of an OpenAI-compatible API
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Environment variable the API key is read from
    pub api_key_env: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl ChatModelConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        validate_common(&self.endpoint, &self.model, &self.api_key_env, self.timeout_secs)
    }
}

impl Default for ChatModelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            api_key_env: DEFAULT_CHAT_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Summarization service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Base URL of the inference API
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Environment variable the API token is read from
    pub api_key_env: String,

    /// Request timeout (seconds)
    pub timeout_secs: u64,
}

impl SummarizerConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        validate_common(&self.endpoint, &self.model, &self.api_key_env, self.timeout_secs)
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUMMARIZER_ENDPOINT.to_string(),
            model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            api_key_env: DEFAULT_SUMMARIZER_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn validate_common(endpoint: &str, model: &str, api_key_env: &str, timeout_secs: u64) -> Result<(), String> {
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(format!("endpoint must be an http(s) URL, got '{}'", endpoint));
    }
    if model.trim().is_empty() {
        return Err("model must not be empty".to_string());
    }
    if api_key_env.trim().is_empty() {
        return Err("api_key_env must not be empty".to_string());
    }
    if timeout_secs == 0 {
        return Err("timeout_secs must be greater than 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ChatModelConfig::default().validate().is_ok());
        assert!(SummarizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ChatModelConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_endpoint_rejected() {
        let mut config = SummarizerConfig::default();
        config.endpoint = "localhost:8080".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ChatModelConfig = from_json(r#"{"model": "gpt-4o-mini"}"#);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.endpoint, DEFAULT_CHAT_ENDPOINT);
        assert_eq!(config.api_key_env, DEFAULT_CHAT_KEY_ENV);
    }

    fn from_json<T: serde::de::DeserializeOwned>(s: &str) -> T {
        serde_json::from_str(s).unwrap()
    }
}
