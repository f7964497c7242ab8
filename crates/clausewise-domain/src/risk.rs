//! Risk flags - clauses that mention a risk keyword

use crate::keywords::matching_keywords;

/// Keywords treated as a heuristic indicator of legal risk
pub const DEFAULT_RISK_KEYWORDS: &[&str] = &[
    "terminate",
    "penalty",
    "breach",
    "liability",
    "indemnify",
    "damages",
];

/// A clause flagged as risky
///
/// Membership is binary: a clause is either flagged or it is not. The
/// matched keywords are kept for display only and carry no weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFlag {
    /// The flagged clause text, unchanged
    pub clause: String,

    /// Risk keywords found in the clause, in keyword-list order
    pub matched_keywords: Vec<String>,
}

impl RiskFlag {
    /// Flag `clause` against `keywords`, or `None` when nothing matches
    ///
    /// # Examples
    ///
    /// ```
    /// use clausewise_domain::{RiskFlag, DEFAULT_RISK_KEYWORDS};
    ///
    /// let flag = RiskFlag::evaluate("The Vendor shall indemnify the Client.", DEFAULT_RISK_KEYWORDS);
    /// assert_eq!(flag.unwrap().matched_keywords, vec!["indemnify"]);
    /// assert!(RiskFlag::evaluate("Invoices are due in 30 days.", DEFAULT_RISK_KEYWORDS).is_none());
    /// ```
    pub fn evaluate<S: AsRef<str>>(clause: &str, keywords: &[S]) -> Option<Self> {
        let matched_keywords = matching_keywords(clause, keywords);
        if matched_keywords.is_empty() {
            return None;
        }
        Some(Self {
            clause: clause.to_string(),
            matched_keywords,
        })
    }
}
