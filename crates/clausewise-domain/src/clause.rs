//! Clause module - clause candidates and the categories that classify them

use crate::keywords::contains_any;
use std::fmt;

/// A contiguous span of document text treated as one unit of legal meaning
///
/// A clause has no identity beyond its text. Clauses cut at explicit
/// `Clause N` markers also remember the marker number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The clause text, trimmed
    pub text: String,

    /// Marker number for clauses found via `Clause N` markers
    pub index: Option<usize>,
}

impl Clause {
    /// Create an unnumbered clause
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            index: None,
        }
    }

    /// Create a clause that was introduced by a `Clause N` marker
    pub fn numbered(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A label mapped to the keywords that trigger it
///
/// Categories are static configuration and are never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseCategory {
    /// Display name (e.g. "Confidentiality")
    pub name: String,

    /// Trigger keywords, matched case-insensitively as substrings
    pub keywords: Vec<String>,
}

impl ClauseCategory {
    /// Create a category from a name and its keywords
    pub fn new<S: Into<String>>(name: impl Into<String>, keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the sentence contains any of this category's keywords
    ///
    /// # Examples
    ///
    /// ```
    /// use clausewise_domain::ClauseCategory;
    ///
    /// let payment = ClauseCategory::new("Payment", ["payment", "fee"]);
    /// assert!(payment.matches("A late FEE of 2% applies."));
    /// assert!(!payment.matches("This Agreement is governed by Ohio law."));
    /// ```
    pub fn matches(&self, sentence: &str) -> bool {
        contains_any(sentence, &self.keywords)
    }
}

/// The built-in clause categories, in display order
pub fn default_categories() -> Vec<ClauseCategory> {
    vec![
        ClauseCategory::new("Confidentiality", ["confidential", "non-disclosure", "privacy"]),
        ClauseCategory::new(
            "Termination",
            ["terminate", "termination", "cancel", "end of agreement"],
        ),
        ClauseCategory::new("Payment", ["payment", "compensation", "fee", "remuneration"]),
        ClauseCategory::new(
            "Governing Law",
            ["jurisdiction", "governing law", "under the laws of"],
        ),
        ClauseCategory::new("Indemnity", ["indemnify", "liability", "hold harmless"]),
        ClauseCategory::new(
            "Force Majeure",
            ["force majeure", "act of god", "unforeseen circumstances"],
        ),
        ClauseCategory::new(
            "Dispute Resolution",
            ["arbitration", "dispute", "litigation", "settlement"],
        ),
    ]
}

/// Sentences collected under one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    /// Category name
    pub category: String,

    /// Matching sentences in document order
    pub clauses: Vec<Clause>,
}

/// Result of keyword-category extraction
///
/// Entries follow category configuration order. Categories without a single
/// matching sentence are left out. A sentence may appear under several
/// categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedClauses {
    entries: Vec<CategoryMatch>,
}

impl CategorizedClauses {
    /// Build from already-ordered entries, dropping empty categories
    pub fn new(entries: Vec<CategoryMatch>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .filter(|e| !e.clauses.is_empty())
                .collect(),
        }
    }

    /// All non-empty categories in order
    pub fn entries(&self) -> &[CategoryMatch] {
        &self.entries
    }

    /// Clauses found for a category, if any
    pub fn get(&self, category: &str) -> Option<&[Clause]> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.clauses.as_slice())
    }

    /// True when no category matched anything
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every clause text, category by category
    ///
    /// A sentence listed under two categories appears twice, matching what
    /// downstream risk detection has always been fed.
    pub fn flatten(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|e| e.clauses.iter().map(|c| c.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_order() {
        let names: Vec<_> = default_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Confidentiality",
                "Termination",
                "Payment",
                "Governing Law",
                "Indemnity",
                "Force Majeure",
                "Dispute Resolution",
            ]
        );
    }

    #[test]
    fn test_empty_categories_are_dropped() {
        let set = CategorizedClauses::new(vec![
            CategoryMatch {
                category: "Payment".to_string(),
                clauses: vec![],
            },
            CategoryMatch {
                category: "Termination".to_string(),
                clauses: vec![Clause::new("Either party may terminate.")],
            },
        ]);
        assert_eq!(set.entries().len(), 1);
        assert!(set.get("Payment").is_none());
        assert_eq!(set.get("Termination").map(|c| c.len()), Some(1));
    }

    #[test]
    fn test_flatten_keeps_duplicates() {
        let shared = Clause::new("Termination triggers a fee.");
        let set = CategorizedClauses::new(vec![
            CategoryMatch {
                category: "Termination".to_string(),
                clauses: vec![shared.clone()],
            },
            CategoryMatch {
                category: "Payment".to_string(),
                clauses: vec![shared],
            },
        ]);
        assert_eq!(set.flatten().len(), 2);
    }

    #[test]
    fn test_numbered_clause() {
        let clause = Clause::numbered("Clause 3: Payment terms", 3);
        assert_eq!(clause.index, Some(3));
        assert_eq!(clause.to_string(), "Clause 3: Payment terms");
    }
}
