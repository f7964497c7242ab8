//! Outcomes of the comparison, summarization and rewrite stages

use crate::reference::ReferenceClause;

/// Best reference match for one clause
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityResult {
    /// The clause that was compared
    pub clause: String,

    /// Best-matching reference, `None` when no reference scored above zero
    pub best: Option<ReferenceClause>,

    /// Cosine similarity in [0, 1], rounded to 2 decimals
    pub score: f64,
}

impl SimilarityResult {
    /// Label of the best-matching reference
    pub fn label(&self) -> Option<&str> {
        self.best.as_ref().map(|r| r.label.as_str())
    }

    /// Text of the best-matching reference
    pub fn reference(&self) -> Option<&str> {
        self.best.as_ref().map(|r| r.text.as_str())
    }

    /// True when some reference shares vocabulary with the clause
    pub fn is_match(&self) -> bool {
        self.best.is_some()
    }
}

/// Concatenated summary of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Per-chunk summaries joined with single spaces, in chunk order
    pub text: String,

    /// Number of chunks sent to the summarization service
    pub chunk_count: usize,
}

impl Summary {
    /// A summary of nothing
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            chunk_count: 0,
        }
    }
}

/// A clause and its rewritten form
///
/// The rewritten text is displayed as returned (after trimming); no length
/// or content validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// Clause as supplied by the user
    pub original: String,

    /// Text returned by the chat-completion service
    pub rewritten: String,
}
