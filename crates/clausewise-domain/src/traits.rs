//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis pipeline and the
//! services it depends on. Implementations live in other crates and are
//! constructed once by the composition root, then passed in explicitly.

use crate::Document;
use std::fmt::Display;
use std::future::Future;

/// Classification every external-service error must offer
pub trait ServiceFailure: Display {
    /// True when the call failed because no API credential is configured
    fn is_missing_credential(&self) -> bool;
}

/// Trait for turning PDF bytes into plain text
///
/// Implemented by the analyzer crate (`PdfTextExtractor`)
pub trait TextExtractor {
    /// Error type for decoding failures
    type Error: Display;

    /// Decode the document, concatenating pages with newline separators
    fn extract(&self, bytes: &[u8]) -> Result<Document, Self::Error>;
}

/// Parameters for one summarization call
///
/// Sampling is always disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// Text chunk to summarize
    pub text: String,

    /// Maximum summary length (model tokens)
    pub max_length: usize,

    /// Minimum summary length (model tokens)
    pub min_length: usize,
}

/// Trait for an external summarization model
///
/// Implemented by the provider layer (clausewise-llm)
pub trait SummarizationModel {
    /// Error type for service failures
    type Error: ServiceFailure;

    /// Summarize a single chunk
    fn summarize(
        &self,
        request: &SummaryRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// Parameters for one chat-completion call
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Prompt sent as a single user message
    pub prompt: String,

    /// Maximum number of output tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// Trait for an external chat-completion model
///
/// Implemented by the provider layer (clausewise-llm)
pub trait ChatModel {
    /// Error type for service failures
    type Error: ServiceFailure;

    /// Generate a completion for the prompt
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
