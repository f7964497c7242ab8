//! Risk keyword detection

use crate::config::AnalyzerConfig;
use clausewise_domain::{RiskFlag, DEFAULT_RISK_KEYWORDS};

/// Flags clauses that mention any configured risk keyword
#[derive(Debug, Clone)]
pub struct RiskScorer {
    keywords: Vec<String>,
}

impl RiskScorer {
    /// Create a scorer for the given keywords
    ///
    /// Empty keywords are kept but never match, so they cannot flag every
    /// clause. Configuration validation rejects them before they get here.
    pub fn new<S: Into<String>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a scorer from pipeline configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.risk_keywords.iter().cloned())
    }

    /// Configured keywords
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Flag risky clauses, keeping input order
    ///
    /// Each flag records every keyword that matched. Duplicate clauses are
    /// flagged once per occurrence.
    pub fn flag<S: AsRef<str>>(&self, clauses: &[S]) -> Vec<RiskFlag> {
        clauses
            .iter()
            .filter_map(|clause| RiskFlag::evaluate(clause.as_ref(), &self.keywords))
            .collect()
    }

    /// Risky clause texts only
    pub fn risky<S: AsRef<str>>(&self, clauses: &[S]) -> Vec<String> {
        self.flag(clauses).into_iter().map(|flag| flag.clause).collect()
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(DEFAULT_RISK_KEYWORDS.iter().copied())
    }
}
