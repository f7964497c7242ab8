//! Clausewise Model Service Layer
//!
//! Handles for the external model services the analysis pipeline calls out to.
//!
//! # Architecture
//!
//! This crate provides implementations of the `SummarizationModel` and
//! `ChatModel` traits from `clausewise-domain`. Each handle is built once at
//! process start and passed into the pipeline; nothing here is global.
//!
//! # Providers
//!
//! - `OpenAiChatModel`: Chat-completion API used for clause rewriting
//! - `HuggingFaceSummarizer`: Hosted summarization pipeline
//! - `MockChatModel` / `MockSummarizer`: Deterministic doubles for testing
//!
//! # Examples
//!
//! ```
//! use clausewise_llm::MockChatModel;
//! use clausewise_domain::traits::{ChatModel, ChatRequest};
//!
//! let model = MockChatModel::new("Rewritten clause.");
//! let request = ChatRequest { prompt: "test".into(), max_tokens: 200, temperature: 0.7 };
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! let reply = runtime.block_on(model.complete(&request)).unwrap();
//! assert_eq!(reply, "Rewritten clause.");
//! assert_eq!(model.call_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod credential;
mod http;
pub mod huggingface;
pub mod mock;
pub mod openai;

use clausewise_domain::traits::ServiceFailure;
use thiserror::Error;

pub use config::{ChatModelConfig, SummarizerConfig};
pub use credential::Credential;
pub use huggingface::HuggingFaceSummarizer;
pub use mock::{MockChatModel, MockSummarizer};
pub use openai::OpenAiChatModel;

/// Errors that can occur when calling a model service
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Credential rejected by the service
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No credential configured in the named environment variable
    #[error("Missing API credential: set the {0} environment variable")]
    MissingCredential(String),

    /// The request did not complete within the client timeout
    #[error("Request timed out")]
    Timeout,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl ServiceFailure for LlmError {
    fn is_missing_credential(&self) -> bool {
        matches!(self, LlmError::MissingCredential(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_classification() {
        assert!(LlmError::MissingCredential("OPENAI_API_KEY".into()).is_missing_credential());
        assert!(!LlmError::RateLimitExceeded.is_missing_credential());
        assert!(!LlmError::Authentication("bad key".into()).is_missing_credential());
    }

    #[test]
    fn test_missing_credential_message_names_variable() {
        let err = LlmError::MissingCredential("HF_API_TOKEN".into());
        assert!(err.to_string().contains("HF_API_TOKEN"));
    }
}
