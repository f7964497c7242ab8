//! The clause-analysis pipeline and its action dispatcher

use crate::clauses::{ClauseExtractor, ExtractedClauses};
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::rewriter::ClauseRewriter;
use crate::risk::RiskScorer;
use crate::similarity::SimilarityComparer;
use crate::summarizer::Summarizer;
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};
use clausewise_domain::{
    standard_references, Document, ReferenceClause, RewriteResult, RiskFlag, SimilarityResult,
    Summary,
};
use tracing::info;

/// One user-triggered operation
#[derive(Debug, Clone)]
pub enum Action {
    /// Decode a PDF into plain text
    ExtractText {
        /// Raw file contents
        bytes: Vec<u8>,
    },
    /// Summarize document text
    Summarize {
        /// Text to summarize
        text: String,
    },
    /// Split document text into clauses
    ExtractClauses {
        /// Document text
        text: String,
    },
    /// Flag risky clauses
    FlagRisks {
        /// Clause texts in order
        clauses: Vec<String>,
    },
    /// Find the closest reference for a clause
    Compare {
        /// Clause to compare
        clause: String,
        /// Candidate references in priority order
        references: Vec<ReferenceClause>,
    },
    /// Rewrite a clause in clearer language
    Rewrite {
        /// Clause to rewrite
        clause: String,
    },
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::ExtractText { .. } => "extract_text",
            Action::Summarize { .. } => "summarize",
            Action::ExtractClauses { .. } => "extract_clauses",
            Action::FlagRisks { .. } => "flag_risks",
            Action::Compare { .. } => "compare",
            Action::Rewrite { .. } => "rewrite",
        }
    }
}

/// Result of dispatching an [`Action`]
#[derive(Debug, Clone)]
pub enum ActionOutput {
    /// Decoded document
    Text(Document),
    /// Document summary
    Summary(Summary),
    /// Extracted clauses
    Clauses(ExtractedClauses),
    /// Flags for risky clauses
    Risks(Vec<RiskFlag>),
    /// Best reference match
    Comparison(SimilarityResult),
    /// Rewritten clause
    Rewrite(RewriteResult),
}

/// Everything the local stages find in one document
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Decoded document
    pub document: Document,
    /// Extracted clauses
    pub clauses: ExtractedClauses,
    /// Risky clauses
    pub risks: Vec<RiskFlag>,
    /// Best standard reference for each clause
    pub comparisons: Vec<SimilarityResult>,
}

/// Clause-analysis pipeline over injected service handles
///
/// The text extractor, summarization model and chat model are constructed by
/// the caller and owned here for the pipeline's lifetime.
pub struct Pipeline<T, S, C> {
    extractor: T,
    clause_extractor: ClauseExtractor,
    risk_scorer: RiskScorer,
    comparer: SimilarityComparer,
    summarizer: Summarizer<S>,
    rewriter: ClauseRewriter<C>,
    config: AnalyzerConfig,
}

impl<T, S, C> Pipeline<T, S, C>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    /// Create a pipeline, validating the configuration
    pub fn new(
        extractor: T,
        summarization_model: S,
        chat_model: C,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        Ok(Self {
            extractor,
            clause_extractor: ClauseExtractor::from_config(&config),
            risk_scorer: RiskScorer::from_config(&config),
            comparer: SimilarityComparer::new(),
            summarizer: Summarizer::new(summarization_model, &config),
            rewriter: ClauseRewriter::new(chat_model, &config),
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Decode PDF bytes, enforcing the size cap first
    pub fn extract_text(&self, bytes: &[u8]) -> Result<Document, AnalyzerError> {
        let limit = self.config.max_file_size_bytes;
        if limit > 0 && bytes.len() > limit {
            return Err(AnalyzerError::FileTooLarge(bytes.len(), limit));
        }

        let document = self
            .extractor
            .extract(bytes)
            .map_err(|e| AnalyzerError::DocumentDecode(e.to_string()))?;

        info!(
            "Extracted {} chars from {} page(s)",
            document.char_count(),
            document.page_count()
        );
        Ok(document)
    }

    /// Summarize text through the summarization model
    pub async fn summarize(&self, text: &str) -> Result<Summary, AnalyzerError> {
        self.summarizer.summarize(text).await
    }

    /// Split text into clauses with the configured strategy
    pub fn extract_clauses(&self, text: &str) -> ExtractedClauses {
        let clauses = self.clause_extractor.extract(text);
        info!(
            "Extracted {} clause(s) in {:?} mode",
            clauses.texts().len(),
            self.clause_extractor.mode()
        );
        clauses
    }

    /// Flag risky clauses
    pub fn flag_risks<R: AsRef<str>>(&self, clauses: &[R]) -> Vec<RiskFlag> {
        let flags = self.risk_scorer.flag(clauses);
        info!("Flagged {} of {} clause(s)", flags.len(), clauses.len());
        flags
    }

    /// Best reference match for one clause
    pub fn compare(
        &self,
        clause: &str,
        references: &[ReferenceClause],
    ) -> Result<SimilarityResult, AnalyzerError> {
        let result = self.comparer.compare(clause, references)?;
        match result.label() {
            Some(label) => info!("Best reference '{}' with score {:.2}", label, result.score),
            None => info!("No reference shares vocabulary with the clause"),
        }
        Ok(result)
    }

    /// Rounded score against every reference, in reference order
    pub fn scores(&self, clause: &str, references: &[ReferenceClause]) -> Vec<(String, f64)> {
        self.comparer.scores(clause, references)
    }

    /// Rewrite one clause through the chat model
    pub async fn rewrite(&self, clause: &str) -> Result<RewriteResult, AnalyzerError> {
        self.rewriter.rewrite(clause).await
    }

    /// Run a single action
    pub async fn dispatch(&self, action: Action) -> Result<ActionOutput, AnalyzerError> {
        info!("Dispatching {}", action.name());

        match action {
            Action::ExtractText { bytes } => self.extract_text(&bytes).map(ActionOutput::Text),
            Action::Summarize { text } => self.summarize(&text).await.map(ActionOutput::Summary),
            Action::ExtractClauses { text } => Ok(ActionOutput::Clauses(self.extract_clauses(&text))),
            Action::FlagRisks { clauses } => Ok(ActionOutput::Risks(self.flag_risks(&clauses))),
            Action::Compare { clause, references } => {
                self.compare(&clause, &references).map(ActionOutput::Comparison)
            }
            Action::Rewrite { clause } => self.rewrite(&clause).await.map(ActionOutput::Rewrite),
        }
    }

    /// Decode a document and run every local stage over it
    ///
    /// Clauses are compared against the standard reference library. No
    /// external model is called.
    pub fn analyze(&self, bytes: &[u8]) -> Result<AnalysisReport, AnalyzerError> {
        let document = self.extract_text(bytes)?;
        self.analyze_document(document)
    }

    /// Run every local stage over an already decoded document
    pub fn analyze_document(&self, document: Document) -> Result<AnalysisReport, AnalyzerError> {
        let clauses = self.extract_clauses(document.text());
        let texts = clauses.texts();
        let risks = self.flag_risks(&texts);
        let comparisons = self.comparer.compare_all(&texts, &standard_references())?;

        info!(
            "Analysis complete: {} clause(s), {} risky, {} compared",
            texts.len(),
            risks.len(),
            comparisons.len()
        );

        Ok(AnalysisReport {
            document,
            clauses,
            risks,
            comparisons,
        })
    }
}
