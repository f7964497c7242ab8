//! OpenAI Chat-Completion Provider
//!
//! Sends a single user message to an OpenAI-compatible `/v1/chat/completions`
//! endpoint and returns the first choice's content.
//!
//! # Features
//!
//! - Bearer-token authentication from an environment variable
//! - Configurable endpoint and model (any OpenAI-compatible server works)
//! - Bounded request timeout
//! - No retries: every failure is surfaced to the caller
//!
//! # Examples
//!
//! ```no_run
//! use clausewise_llm::{ChatModelConfig, OpenAiChatModel};
//!
//! let model = OpenAiChatModel::from_config(&ChatModelConfig::default())
//!     .expect("HTTP client");
//! assert_eq!(model.model(), "gpt-3.5-turbo");
//! ```

use crate::config::ChatModelConfig;
use crate::credential::Credential;
use crate::http::{build_client, join_url, send_error, status_error};
use crate::LlmError;
use clausewise_domain::traits::{ChatModel, ChatRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const COMPLETIONS_PATH: &str = "v1/chat/completions";

/// Chat-completion handle for an OpenAI-compatible API
pub struct OpenAiChatModel {
    endpoint: String,
    model: String,
    credential: Credential,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl OpenAiChatModel {
    /// Create a chat model handle
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api.openai.com")
    /// - `model`: Model to use (e.g., "gpt-3.5-turbo")
    /// - `credential`: API key, possibly absent
    /// - `timeout`: Upper bound for each request
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            credential,
            client: build_client(timeout)?,
        })
    }

    /// Create a handle from configuration, reading the key from the environment
    pub fn from_config(config: &ChatModelConfig) -> Result<Self, LlmError> {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            Credential::from_env(&config.api_key_env),
            config.timeout(),
        )
    }

    /// Model identifier requests are sent with
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API key was found at construction
    pub fn has_credential(&self) -> bool {
        self.credential.is_present()
    }

    /// Send one chat-completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured (no request is sent)
    /// - The key is rejected or the rate limit is hit
    /// - Network communication fails or times out
    /// - The response has no usable content
    pub async fn chat(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let api_key = self.credential.require()?;
        let url = join_url(&self.endpoint, COMPLETIONS_PATH);

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!(
            "Sending chat completion to {} (model {}, prompt {} chars)",
            url,
            self.model,
            request.prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let text = response.text().await.map_err(send_error)?;

        if !status.is_success() {
            return Err(status_error(status, &text, &self.model));
        }

        parse_completion(&text)
    }
}

/// Pull the first choice's content out of a chat-completions response body
fn parse_completion(body: &str) -> Result<String, LlmError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no message content".to_string()))
}

impl ChatModel for OpenAiChatModel {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        self.chat(request).await
    }
}
