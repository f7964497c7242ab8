//! Clause rewriting through a chat-completion model

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::prompt::RewritePrompt;
use clausewise_domain::traits::{ChatModel, ChatRequest};
use clausewise_domain::RewriteResult;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Rewrites a single clause into clearer, more standard language
pub struct ClauseRewriter<C> {
    model: C,
    max_tokens: u32,
    temperature: f32,
    call_timeout: Duration,
}

impl<C> ClauseRewriter<C>
where
    C: ChatModel,
{
    /// Create a rewriter from pipeline configuration
    pub fn new(model: C, config: &AnalyzerConfig) -> Self {
        Self {
            model,
            max_tokens: config.rewrite_max_tokens,
            temperature: config.rewrite_temperature,
            call_timeout: config.service_timeout(),
        }
    }

    /// Override the per-call timeout
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Underlying model
    pub fn model(&self) -> &C {
        &self.model
    }

    /// Rewrite one clause
    ///
    /// A blank clause is rejected before the service is called. The response
    /// is trimmed and otherwise returned as-is, even when empty.
    pub async fn rewrite(&self, clause: &str) -> Result<RewriteResult, AnalyzerError> {
        if clause.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput("clause to rewrite is blank".to_string()));
        }

        let request = ChatRequest {
            prompt: RewritePrompt::new(clause).build(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        info!("Rewriting clause of {} chars", clause.chars().count());
        debug!("Prompt length: {} chars", request.prompt.len());

        let response = timeout(self.call_timeout, self.model.complete(&request))
            .await
            .map_err(|_| AnalyzerError::Timeout(self.call_timeout.as_secs()))?
            .map_err(AnalyzerError::from_service)?;

        Ok(RewriteResult {
            original: clause.to_string(),
            rewritten: response.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_llm::MockChatModel;

    #[tokio::test]
    async fn test_rewrite_trims_response() {
        let model = MockChatModel::new("  The tenant must pay rent monthly.\n");
        let rewriter = ClauseRewriter::new(model, &AnalyzerConfig::default());

        let result = rewriter.rewrite("Rent shall be remitted by lessee monthly.").await.unwrap();
        assert_eq!(result.original, "Rent shall be remitted by lessee monthly.");
        assert_eq!(result.rewritten, "The tenant must pay rent monthly.");
    }

    #[tokio::test]
    async fn test_request_parameters() {
        let model = MockChatModel::default();
        let rewriter = ClauseRewriter::new(model.clone(), &AnalyzerConfig::default());
        rewriter.rewrite("Some clause.").await.unwrap();

        let requests = model.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].prompt, RewritePrompt::new("Some clause.").build());
        assert_eq!(requests[0].max_tokens, 200);
        assert!((requests[0].temperature - 0.7).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_blank_clause_never_reaches_service() {
        let model = MockChatModel::default();
        let rewriter = ClauseRewriter::new(model.clone(), &AnalyzerConfig::default());

        for blank in ["", "   ", "\n\t"] {
            let err = rewriter.rewrite(blank).await.unwrap_err();
            assert!(matches!(err, AnalyzerError::EmptyInput(_)));
        }
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_response_returned() {
        let rewriter = ClauseRewriter::new(MockChatModel::new("   "), &AnalyzerConfig::default());
        let result = rewriter.rewrite("Some clause.").await.unwrap();
        assert_eq!(result.rewritten, "");
    }

    #[tokio::test]
    async fn test_service_failure_surfaces() {
        let clause = "Some clause.";
        let mut model = MockChatModel::default();
        model.add_error(RewritePrompt::new(clause).build());
        let rewriter = ClauseRewriter::new(model, &AnalyzerConfig::default());

        let err = rewriter.rewrite(clause).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_missing_credential_surfaces() {
        let model = MockChatModel::without_credential("OPENAI_API_KEY");
        let rewriter = ClauseRewriter::new(model.clone(), &AnalyzerConfig::default());

        let err = rewriter.rewrite("Some clause.").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::MissingCredential(_)));
        assert_eq!(model.call_count(), 1);
    }
}
