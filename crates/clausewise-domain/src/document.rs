//! Document module - the plain text recovered from an uploaded file

use std::fmt;

/// Plain text produced from a PDF (or supplied directly)
///
/// A document carries no structure beyond its characters. Pages are
/// concatenated with newline separators by the extractor that built it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    page_count: usize,
}

impl Document {
    /// Create a document from extracted text and the number of source pages
    pub fn new(text: impl Into<String>, page_count: usize) -> Self {
        Self {
            text: text.into(),
            page_count,
        }
    }

    /// Create a single-page document from text that was never a PDF
    ///
    /// # Examples
    ///
    /// ```
    /// use clausewise_domain::Document;
    ///
    /// let doc = Document::from_text("The Supplier shall keep all data confidential.");
    /// assert_eq!(doc.page_count(), 1);
    /// assert!(!doc.is_empty());
    /// ```
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(text, 1)
    }

    /// The full text of the document
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of pages the text was extracted from
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of characters (not bytes) in the document
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the document holds no visible text
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Consume the document and return its text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_document_is_empty() {
        let doc = Document::new("  \n\t ", 3);
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 3);
    }

    #[test]
    fn test_char_count_is_not_byte_count() {
        let doc = Document::from_text("§ 1 Geltung");
        assert_eq!(doc.char_count(), 11);
        assert!(doc.text().len() > doc.char_count());
    }

    #[test]
    fn test_into_text() {
        let doc = Document::from_text("abc");
        assert_eq!(doc.into_text(), "abc");
    }
}
