//! Clause extraction
//!
//! Two interchangeable strategies, selected by [`ExtractionMode`]:
//!
//! - **Keyword category**: split into sentences at `.`, `!` or `?` followed by
//!   whitespace, then file each sentence under every category whose keywords
//!   it mentions. Sentences that match nothing are dropped.
//! - **Marker segmentation**: cut the text at every `Clause <n>` marker. Every
//!   segment is kept and no category is assigned.
//!
//! Sentence splitting is locale-naive: abbreviations such as "Inc." end a
//! sentence too.

use crate::config::{AnalyzerConfig, ExtractionMode};
use clausewise_domain::{CategorizedClauses, CategoryMatch, Clause, ClauseCategory};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sentence terminator followed by whitespace
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.!?]\s+").unwrap();

    /// Explicit clause marker, capturing its number
    static ref CLAUSE_MARKER: Regex = Regex::new(r"\bClause\s+(\d+)").unwrap();
}

/// Output of [`ClauseExtractor::extract`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedClauses {
    /// Keyword-category mode result
    Categorized(CategorizedClauses),
    /// Marker-segmentation mode result
    Segmented(Vec<Clause>),
}

impl ExtractedClauses {
    /// Clause texts in the order risk detection and comparison consume them
    pub fn texts(&self) -> Vec<String> {
        match self {
            ExtractedClauses::Categorized(set) => set.flatten(),
            ExtractedClauses::Segmented(clauses) => clauses.iter().map(|c| c.text.clone()).collect(),
        }
    }

    /// True when nothing was extracted
    pub fn is_empty(&self) -> bool {
        match self {
            ExtractedClauses::Categorized(set) => set.is_empty(),
            ExtractedClauses::Segmented(clauses) => clauses.is_empty(),
        }
    }
}

/// Splits documents into clause candidates
#[derive(Debug, Clone)]
pub struct ClauseExtractor {
    mode: ExtractionMode,
    categories: Vec<ClauseCategory>,
}

impl ClauseExtractor {
    /// Create an extractor for the given strategy and categories
    pub fn new(mode: ExtractionMode, categories: Vec<ClauseCategory>) -> Self {
        Self { mode, categories }
    }

    /// Create an extractor from pipeline configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(config.extraction_mode, config.clause_categories())
    }

    /// Configured strategy
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Extract clauses with the configured strategy
    pub fn extract(&self, text: &str) -> ExtractedClauses {
        match self.mode {
            ExtractionMode::KeywordCategory => ExtractedClauses::Categorized(self.by_category(text)),
            ExtractionMode::MarkerSegmentation => ExtractedClauses::Segmented(segment_by_markers(text)),
        }
    }

    /// Keyword-category extraction
    ///
    /// Each sentence is trimmed and kept verbatim. Within a category the
    /// sentences keep document order.
    pub fn by_category(&self, text: &str) -> CategorizedClauses {
        let sentences = split_sentences(text);
        let entries = self
            .categories
            .iter()
            .map(|category| CategoryMatch {
                category: category.name.clone(),
                clauses: sentences
                    .iter()
                    .filter(|s| category.matches(s))
                    .map(|s| Clause::new(*s))
                    .collect(),
            })
            .collect();
        CategorizedClauses::new(entries)
    }
}

/// Split text into trimmed, non-empty sentences
///
/// The terminating punctuation stays with its sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are ASCII, so +1 stays on a char boundary
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Marker-segmentation extraction
///
/// Each segment runs from a `Clause <n>` marker up to the next marker or the
/// end of the text, spanning lines. Text before the first marker is ignored.
///
/// # Examples
///
/// ```
/// use clausewise_analyzer::segment_by_markers;
///
/// let clauses = segment_by_markers("Preamble.\nClause 1: Fees.\nClause 2: Term.");
/// assert_eq!(clauses.len(), 2);
/// assert_eq!(clauses[0].text, "Clause 1: Fees.");
/// assert_eq!(clauses[1].index, Some(2));
/// ```
pub fn segment_by_markers(text: &str) -> Vec<Clause> {
    let markers: Vec<(usize, Option<usize>)> = CLAUSE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = caps.get(1).and_then(|m| m.as_str().parse().ok());
            Some((whole.start(), number))
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &(start, number))| {
            let end = markers.get(i + 1).map_or(text.len(), |&(next, _)| next);
            let segment = text[start..end].trim_end();
            match number {
                Some(n) => Clause::numbered(segment, n),
                None => Clause::new(segment),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_domain::default_categories;

    fn keyword_extractor() -> ClauseExtractor {
        ClauseExtractor::new(ExtractionMode::KeywordCategory, default_categories())
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("First one. Second one!  Third?\nFourth");
        assert_eq!(sentences, vec!["First one.", "Second one!", "Third?", "Fourth"]);
    }

    #[test]
    fn test_split_requires_whitespace_after_terminator() {
        // No whitespace after the dots, so no split
        assert_eq!(split_sentences("Pay $1.50 per unit.").len(), 1);
        assert_eq!(split_sentences("See section 4.2.1 below."), vec!["See section 4.2.1 below."]);
    }

    #[test]
    fn test_empty_document_yields_nothing() {
        assert!(keyword_extractor().extract("").is_empty());
        assert!(segment_by_markers("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_keyword_categories() {
        let text = "All information is confidential. The fee is $100 per month. \
                    The weather was pleasant.";
        let result = keyword_extractor().by_category(text);

        assert_eq!(
            result.get("Confidentiality").unwrap()[0].text,
            "All information is confidential."
        );
        assert_eq!(result.get("Payment").unwrap()[0].text, "The fee is $100 per month.");
        // The weather sentence matches nothing and is dropped
        assert!(!result.flatten().iter().any(|s| s.contains("weather")));
    }

    #[test]
    fn test_sentence_in_two_categories() {
        let text = "   Termination of this agreement requires payment of all fees.   ";
        let result = keyword_extractor().by_category(text);

        let expected = "Termination of this agreement requires payment of all fees.";
        assert_eq!(result.get("Termination").unwrap()[0].text, expected);
        assert_eq!(result.get("Payment").unwrap()[0].text, expected);
    }

    #[test]
    fn test_category_order_and_document_order() {
        let text = "Disputes go to arbitration. Fees are due monthly. \
                    Any settlement must be written. Information is confidential.";
        let result = keyword_extractor().by_category(text);
        let names: Vec<_> = result.entries().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(names, vec!["Confidentiality", "Payment", "Dispute Resolution"]);

        let disputes = result.get("Dispute Resolution").unwrap();
        assert_eq!(disputes[0].text, "Disputes go to arbitration.");
        assert_eq!(disputes[1].text, "Any settlement must be written.");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let result = keyword_extractor().by_category("FORCE MAJEURE events excuse delay.");
        assert!(result.get("Force Majeure").is_some());
    }

    #[test]
    fn test_marker_segmentation() {
        let text = "Clause 1: The tenant pays rent.\nIt is due monthly.\n\
                    Clause 2: Either party may terminate.\nClause 10: Notices.";
        let clauses = segment_by_markers(text);

        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[0].text, "Clause 1: The tenant pays rent.\nIt is due monthly.");
        assert_eq!(clauses[0].index, Some(1));
        assert!(clauses[1].text.starts_with("Clause 2"));
        assert_eq!(clauses[2].text, "Clause 10: Notices.");
        assert_eq!(clauses[2].index, Some(10));
    }

    #[test]
    fn test_marker_segments_keep_unmatched_text() {
        // No category keyword anywhere, yet every segment survives
        let clauses = segment_by_markers("Clause 1 Lorem ipsum. Clause 2 Dolor sit amet.");
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_zero_markers() {
        assert!(segment_by_markers("This text has no clause markers. Clauses 1 are not markers either").is_empty());
    }

    #[test]
    fn test_marker_needs_word_boundary() {
        assert!(segment_by_markers("Subclause 3 applies.").is_empty());
    }

    #[test]
    fn test_extract_dispatches_on_mode() {
        let extractor = ClauseExtractor::new(ExtractionMode::MarkerSegmentation, default_categories());
        let text = "Clause 1: Weather. Clause 2: Payment of fees.";
        match extractor.extract(text) {
            ExtractedClauses::Segmented(clauses) => assert_eq!(clauses.len(), 2),
            other => panic!("Expected segmented clauses, got {:?}", other),
        }
        assert_eq!(extractor.extract(text).texts().len(), 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: N markers produce exactly N segments, each starting with its marker
        #[test]
        fn test_marker_count_matches_segment_count(
            bodies in proptest::collection::vec("[a-z ]{0,30}", 0..8),
        ) {
            let text: String = bodies
                .iter()
                .enumerate()
                .map(|(i, body)| format!("Clause {} {}\n", i + 1, body))
                .collect();

            let clauses = segment_by_markers(&text);
            prop_assert_eq!(clauses.len(), bodies.len());
            for (i, clause) in clauses.iter().enumerate() {
                let marker = format!("Clause {}", i + 1);
                prop_assert!(clause.text.starts_with(&marker));
                prop_assert_eq!(clause.index, Some(i + 1));
            }
        }

        /// Property: every extracted sentence is trimmed and non-empty
        #[test]
        fn test_sentences_are_trimmed(text in "[a-zA-Z .!?\n]{0,120}") {
            for sentence in split_sentences(&text) {
                prop_assert!(!sentence.is_empty());
                prop_assert_eq!(sentence, sentence.trim());
            }
        }
    }
}
