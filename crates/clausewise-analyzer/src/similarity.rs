//! TF-IDF cosine similarity against reference clauses
//!
//! Every clause/reference pair gets its own two-document vector space: the
//! vocabulary and IDF weights are rebuilt from just those two strings. The
//! weighting matches the common smoothed variant:
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1      with n = 2
//! ```
//!
//! Tokens are lowercase runs of two or more word characters.

use crate::error::AnalyzerError;
use clausewise_domain::{ReferenceClause, SimilarityResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    /// Word tokens of two or more characters
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Split text into lowercase tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine similarity of two texts in their own TF-IDF space
///
/// Returns 0.0 when either text has no tokens. The result is clamped to
/// `[0, 1]` but not rounded.
pub fn tfidf_cosine(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let idf = |term: &str| {
        let df = f64::from(u8::from(counts_a.contains_key(term)) + u8::from(counts_b.contains_key(term)));
        ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0
    };

    let weight = |counts: &BTreeMap<&str, f64>| -> BTreeMap<String, f64> {
        counts
            .iter()
            .map(|(term, tf)| (term.to_string(), tf * idf(*term)))
            .collect()
    };
    let vec_a = weight(&counts_a);
    let vec_b = weight(&counts_b);

    let norm = |v: &BTreeMap<String, f64>| v.values().map(|w| w * w).sum::<f64>().sqrt();
    let (norm_a, norm_b) = (norm(&vec_a), norm(&vec_b));
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = vec_a
        .iter()
        .filter_map(|(term, wa)| vec_b.get(term).map(|wb| wa * wb))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Round to two decimal places, halves away from zero
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Picks the reference clause closest to a given clause
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityComparer;

impl SimilarityComparer {
    /// Create a new comparer
    pub fn new() -> Self {
        Self
    }

    /// Rounded score against every reference, in reference order
    pub fn scores(&self, clause: &str, references: &[ReferenceClause]) -> Vec<(String, f64)> {
        references
            .iter()
            .map(|r| (r.label.clone(), round2(tfidf_cosine(clause, &r.text))))
            .collect()
    }

    /// Best-matching reference for one clause
    ///
    /// Raw scores are compared and only the winner is rounded. Ties go to
    /// the earliest reference. When no reference scores above zero the
    /// result carries no match and a score of 0.0.
    pub fn compare(
        &self,
        clause: &str,
        references: &[ReferenceClause],
    ) -> Result<SimilarityResult, AnalyzerError> {
        if clause.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput("clause text is blank".to_string()));
        }
        if references.is_empty() {
            return Err(AnalyzerError::EmptyInput("no reference clauses given".to_string()));
        }

        let mut best: Option<&ReferenceClause> = None;
        let mut best_score = 0.0;
        for reference in references {
            let score = tfidf_cosine(clause, &reference.text);
            if score > best_score {
                best = Some(reference);
                best_score = score;
            }
        }

        Ok(SimilarityResult {
            clause: clause.to_string(),
            best: best.cloned(),
            score: round2(best_score),
        })
    }

    /// Best match for each clause, in clause order
    pub fn compare_all<S: AsRef<str>>(
        &self,
        clauses: &[S],
        references: &[ReferenceClause],
    ) -> Result<Vec<SimilarityResult>, AnalyzerError> {
        clauses
            .iter()
            .map(|clause| self.compare(clause.as_ref(), references))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_domain::standard_references;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("A party's 30-day NOTICE!"),
            vec!["party", "30", "day", "notice"]
        );
    }

    #[test]
    fn test_identical_strings_score_one() {
        let text = "The liability of the parties shall be limited.";
        assert_eq!(round2(tfidf_cosine(text, text)), 1.0);
    }

    #[test]
    fn test_disjoint_vocabularies_score_zero() {
        assert_eq!(tfidf_cosine("apples oranges", "bicycles trains"), 0.0);
    }

    #[test]
    fn test_empty_strings_score_zero() {
        assert_eq!(tfidf_cosine("", ""), 0.0);
        assert_eq!(tfidf_cosine("a b c", "a b c"), 0.0);
        assert_eq!(tfidf_cosine("", "some words"), 0.0);
    }

    #[test]
    fn test_known_pair_value() {
        // Shared terms weigh 1.0, unique terms 1 + ln(1.5)
        let score = tfidf_cosine("red apple", "red pear");
        let unique = 1.0 + 1.5_f64.ln();
        let expected = 1.0 / (1.0 + unique * unique);
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.657), 0.66);
        assert_eq!(round2(0.654), 0.65);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_termination_clause_matches_termination_reference() {
        let references = vec![ReferenceClause::new(
            "termination",
            "This agreement may be terminated by either party upon giving written notice of 30 days.",
        )];
        let result = SimilarityComparer::new()
            .compare("This agreement may be terminated upon 30 days notice.", &references)
            .unwrap();

        assert_eq!(result.label(), Some("termination"));
        assert!(result.score > 0.5, "score was {}", result.score);
    }

    #[test]
    fn test_best_of_standard_library() {
        let result = SimilarityComparer::new()
            .compare(
                "Both parties shall keep shared information confidential.",
                &standard_references(),
            )
            .unwrap();
        assert_eq!(result.label(), Some("confidentiality"));
    }

    #[test]
    fn test_tie_goes_to_first_reference() {
        let references = vec![
            ReferenceClause::new("first", "notice period"),
            ReferenceClause::new("second", "notice period"),
        ];
        let result = SimilarityComparer::new().compare("notice period", &references).unwrap();
        assert_eq!(result.label(), Some("first"));
    }

    #[test]
    fn test_no_overlap_has_no_match() {
        let result = SimilarityComparer::new()
            .compare("zebra quokka", &standard_references())
            .unwrap();
        assert!(!result.is_match());
        assert_eq!(result.label(), None);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_best_match_chosen_before_rounding() {
        // 0.4074 and 0.4112 both round to 0.41
        let clause = "notice alpha beta gamma";
        let references = vec![
            ReferenceClause::new("first", "notice alpha beta delta epsilon zeta eta"),
            ReferenceClause::new("second", "notice alpha delta"),
        ];
        let first = tfidf_cosine(clause, &references[0].text);
        let second = tfidf_cosine(clause, &references[1].text);
        assert!(first < second);
        assert_eq!(round2(first), round2(second));

        let result = SimilarityComparer::new().compare(clause, &references).unwrap();
        assert_eq!(result.label(), Some("second"));
        assert_eq!(result.score, 0.41);
    }

    #[test]
    fn test_blank_clause_rejected() {
        let err = SimilarityComparer::new()
            .compare("   ", &standard_references())
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptyInput(_)));
    }

    #[test]
    fn test_no_references_rejected() {
        let err = SimilarityComparer::new().compare("some clause", &[]).unwrap_err();
        assert!(matches!(err, AnalyzerError::EmptyInput(_)));
    }

    #[test]
    fn test_compare_all_keeps_clause_order() {
        let clauses = [
            "Disputes shall be resolved through arbitration.",
            "Liability is limited to direct damages.",
        ];
        let results = SimilarityComparer::new()
            .compare_all(&clauses, &standard_references())
            .unwrap();
        assert_eq!(results[0].label(), Some("dispute_resolution"));
        assert_eq!(results[1].label(), Some("liability"));
    }

    #[test]
    fn test_scores_lists_every_reference() {
        let scores = SimilarityComparer::new().scores("notice", &standard_references());
        assert_eq!(scores.len(), 4);
        assert_eq!(scores[0].0, "termination");
        assert!(scores[0].1 > 0.0);
        assert_eq!(scores[1].1, 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: scores always fall within [0, 1]
        #[test]
        fn test_score_in_unit_interval(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
            let score = tfidf_cosine(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        /// Property: similarity is symmetric
        #[test]
        fn test_score_symmetric(a in "[a-z ]{0,60}", b in "[a-z ]{0,60}") {
            prop_assert!((tfidf_cosine(&a, &b) - tfidf_cosine(&b, &a)).abs() < 1e-12);
        }

        /// Property: a text with at least one token matches itself fully
        #[test]
        fn test_self_similarity(words in proptest::collection::vec("[a-z]{2,8}", 1..10)) {
            let text = words.join(" ");
            prop_assert_eq!(round2(tfidf_cosine(&text, &text)), 1.0);
        }
    }
}
