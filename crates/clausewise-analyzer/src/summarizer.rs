//! Chunked document summarization

use crate::chunking::TextChunker;
use crate::config::{AnalyzerConfig, SummaryMode};
use crate::error::AnalyzerError;
use clausewise_domain::traits::{SummarizationModel, SummaryRequest};
use clausewise_domain::Summary;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Summarizes text one chunk at a time through an external model
///
/// Chunks are sent sequentially in document order and their summaries joined
/// with single spaces. The first failing chunk aborts the whole summary.
pub struct Summarizer<S> {
    model: S,
    mode: SummaryMode,
    chunker: TextChunker,
    max_length: usize,
    min_length: usize,
    call_timeout: Duration,
}

impl<S> Summarizer<S>
where
    S: SummarizationModel,
{
    /// Create a summarizer from pipeline configuration
    pub fn new(model: S, config: &AnalyzerConfig) -> Self {
        Self {
            model,
            mode: config.summary_mode,
            chunker: TextChunker::new(config.chunk_size),
            max_length: config.summary_max_length,
            min_length: config.summary_min_length,
            call_timeout: config.service_timeout(),
        }
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Underlying model
    pub fn model(&self) -> &S {
        &self.model
    }

    /// Summarize the text
    ///
    /// Whitespace-only text yields an empty summary without calling the
    /// service.
    pub async fn summarize(&self, text: &str) -> Result<Summary, AnalyzerError> {
        if text.trim().is_empty() {
            return Ok(Summary::empty());
        }

        let chunks = match self.mode {
            SummaryMode::Chunked => self.chunker.chunk(text),
            SummaryMode::Truncate => self.chunker.first(text).into_iter().collect(),
        };

        info!(
            "Summarizing {} chars in {} chunk(s) of up to {} chars",
            text.chars().count(),
            chunks.len(),
            self.chunker.chunk_size()
        );

        let mut parts = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            let summary = self.summarize_chunk(chunk).await?;
            debug!("Chunk {} summarized to {} chars", i + 1, summary.len());
            parts.push(summary);
        }

        Ok(Summary {
            text: parts.join(" "),
            chunk_count: chunks.len(),
        })
    }

    async fn summarize_chunk(&self, chunk: &str) -> Result<String, AnalyzerError> {
        let request = SummaryRequest {
            text: chunk.to_string(),
            max_length: self.max_length,
            min_length: self.min_length,
        };

        timeout(self.call_timeout, self.model.summarize(&request))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.call_timeout.as_secs()))?
            .map_err(AnalyzerError::from_service)
    }
}
