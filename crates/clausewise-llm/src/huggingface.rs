//! Hugging Face Summarization Provider
//!
//! Calls a hosted summarization pipeline through the inference API. Each call
//! summarizes one chunk with sampling disabled.

use crate::config::SummarizerConfig;
use crate::credential::Credential;
use crate::http::{build_client, join_url, send_error, status_error};
use crate::LlmError;
use clausewise_domain::traits::{SummarizationModel, SummaryRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Summarization handle for the Hugging Face inference API
pub struct HuggingFaceSummarizer {
    endpoint: String,
    model: String,
    credential: Credential,
    client: reqwest::Client,
}

/// Request body for a summarization pipeline
#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Serialize)]
struct SummarizationParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

/// One element of the pipeline's response array
#[derive(Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

impl HuggingFaceSummarizer {
    /// Create a summarizer handle
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Inference API base URL
    /// - `model`: Model repository id (e.g., "sshleifer/distilbart-cnn-12-6")
    /// - `credential`: API token, possibly absent
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

    /// Create a handle from configuration, reading the token from the environment
    pub fn from_config(config: &SummarizerConfig) -> Result<Self, LlmError> {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            Credential::from_env(&config.api_key_env),
            config.timeout(),
        )
    }

    /// Model identifier requests are sent to
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API token was found at construction
    pub fn has_credential(&self) -> bool {
        self.credential.is_present()
    }

    /// Summarize one chunk
    pub async fn summarize_chunk(&self, request: &SummaryRequest) -> Result<String, LlmError> {
        let token = self.credential.require()?;
        let url = join_url(&self.endpoint, &format!("models/{}", self.model));

        let body = SummarizationRequest {
            inputs: &request.text,
            parameters: SummarizationParameters {
                max_length: request.max_length,
                min_length: request.min_length,
                do_sample: false,
            },
        };

        debug!("Summarizing {} chars with {}", request.text.len(), self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let text = response.text().await.map_err(send_error)?;

        if !status.is_success() {
            return Err(status_error(status, &text, &self.model));
        }

        parse_summary(&text)
    }
}

/// Take the first `summary_text` from a pipeline response body
fn parse_summary(body: &str) -> Result<String, LlmError> {
    let outputs: Vec<SummarizationOutput> = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    outputs
        .into_iter()
        .next()
        .map(|o| o.summary_text)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no summary".to_string()))
}

impl SummarizationModel for HuggingFaceSummarizer {
    type Error = LlmError;

    async fn summarize(&self, request: &SummaryRequest) -> Result<String, Self::Error> {
        self.summarize_chunk(request).await
    }
}
