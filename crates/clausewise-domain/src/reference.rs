//! Reference clauses - standard wording used for comparison

/// A labelled piece of reference text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceClause {
    /// Short label (e.g. "termination")
    pub label: String,

    /// Reference wording
    pub text: String,
}

impl ReferenceClause {
    /// Create a reference clause
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// The built-in library of standard clauses
pub fn standard_references() -> Vec<ReferenceClause> {
    vec![
        ReferenceClause::new(
            "termination",
            "This agreement may be terminated by either party upon giving written notice of 30 days.",
        ),
        ReferenceClause::new(
            "liability",
            "The liability of the parties shall be limited to direct damages only.",
        ),
        ReferenceClause::new(
            "dispute_resolution",
            "Any disputes arising shall be resolved through arbitration in accordance with applicable laws.",
        ),
        ReferenceClause::new(
            "confidentiality",
            "Parties agree to maintain the confidentiality of shared information during and after the agreement term.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_library_labels() {
        let labels: Vec<_> = standard_references().into_iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec!["termination", "liability", "dispute_resolution", "confidentiality"]
        );
    }
}
