//! Clausewise Analyzer
//!
//! The clause-analysis pipeline: PDF text extraction, clause extraction,
//! risk flagging, reference comparison, summarization and rewriting.
//!
//! # Architecture
//!
//! ```text
//! PDF bytes → TextExtractor → Document ─┬→ ClauseExtractor → RiskScorer
//!                                       │                  └→ SimilarityComparer
//!                                       └→ Summarizer (external model)
//! clause text → ClauseRewriter (external model)
//! ```
//!
//! The local stages are pure functions of their inputs. The summarizer and
//! the rewriter call injected model handles, each call bounded by a timeout.
//!
//! # Example Usage
//!
//! ```
//! use clausewise_analyzer::{AnalyzerConfig, ClauseExtractor, RiskScorer, SimilarityComparer};
//! use clausewise_domain::standard_references;
//!
//! let text = "Either party may terminate this agreement with notice. \
//!             All information is confidential.";
//!
//! let clauses = ClauseExtractor::from_config(&AnalyzerConfig::default()).extract(text);
//! let risky = RiskScorer::default().risky(&clauses.texts());
//! assert_eq!(risky, vec!["Either party may terminate this agreement with notice."]);
//!
//! let best = SimilarityComparer::new()
//!     .compare("This agreement may be terminated upon 30 days notice.", &standard_references())
//!     .unwrap();
//! assert_eq!(best.label(), Some("termination"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod chunking;
mod clauses;
mod config;
mod document;
mod error;
mod pipeline;
mod prompt;
mod rewriter;
mod risk;
mod similarity;
mod summarizer;


pub use chunking::TextChunker;
pub use clauses::{segment_by_markers, split_sentences, ClauseExtractor, ExtractedClauses};
pub use config::{AnalyzerConfig, CategoryConfig, ExtractionMode, SummaryMode};
pub use document::{PdfError, PdfTextExtractor};
pub use error::AnalyzerError;
pub use pipeline::{Action, ActionOutput, AnalysisReport, Pipeline};
pub use prompt::{RewritePrompt, REWRITE_INSTRUCTION};
pub use rewriter::ClauseRewriter;
pub use risk::RiskScorer;
pub use similarity::{round2, tfidf_cosine, tokenize, SimilarityComparer};
pub use summarizer::Summarizer;
