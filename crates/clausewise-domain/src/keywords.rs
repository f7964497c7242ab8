//! Case-insensitive keyword matching shared by categories and risk detection

/// True when `text` contains `keyword` as a case-insensitive substring
///
/// # Examples
///
/// ```
/// use clausewise_domain::keywords::contains_ignore_case;
///
/// assert!(contains_ignore_case("Either party may TERMINATE this Agreement", "terminate"));
/// assert!(!contains_ignore_case("Fees are due monthly", "penalty"));
/// ```
pub fn contains_ignore_case(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

/// Return every keyword found in `text`, in keyword-list order
pub fn matching_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> Vec<String> {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(AsRef::as_ref)
        .filter(|k| !k.is_empty() && haystack.contains(&k.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// True when `text` contains at least one of `keywords`
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .map(AsRef::as_ref)
        .any(|k| !k.is_empty() && haystack.contains(&k.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_keywords_preserves_list_order() {
        let found = matching_keywords(
            "Damages for breach are capped.",
            &["penalty", "breach", "damages"],
        );
        assert_eq!(found, vec!["breach", "damages"]);
    }

    #[test]
    fn test_multi_word_keyword() {
        assert!(contains_any(
            "This is governed Under The Laws Of Delaware.",
            &["under the laws of"]
        ));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        assert!(!contains_any("anything", &[""]));
        assert!(matching_keywords("anything", &[""]).is_empty());
    }
}
