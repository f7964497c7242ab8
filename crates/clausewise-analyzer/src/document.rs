//! PDF text extraction
//!
//! Pages are read one at a time with lopdf and joined with newline
//! separators. When lopdf recovers no text at all (unusual font encodings),
//! the whole file is handed to pdf-extract as a second opinion. A PDF with no
//! text layer is not an error: it yields an empty document and a warning.

use clausewise_domain::traits::TextExtractor;
use clausewise_domain::Document;
use thiserror::Error;
use tracing::{debug, warn};

/// PDF decoding failures
#[derive(Error, Debug)]
pub enum PdfError {
    /// The file could not be parsed as a PDF
    #[error("Malformed PDF: {0}")]
    Malformed(String),

    /// The file is encrypted and cannot be read without a password
    #[error("PDF is encrypted")]
    Encrypted,

    /// The file parsed but has no pages
    #[error("PDF has no pages")]
    NoPages,
}

/// Extracts plain text from PDF bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(doc: &lopdf::Document) -> Vec<String> {
        doc.get_pages()
            .keys()
            .map(|&page_number| match doc.extract_text(&[page_number]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Could not read text of page {}: {}", page_number, e);
                    String::new()
                }
            })
            .collect()
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = PdfError;

    fn extract(&self, bytes: &[u8]) -> Result<Document, Self::Error> {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Malformed(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }

        let pages = Self::extract_pages(&doc);
        if pages.is_empty() {
            return Err(PdfError::NoPages);
        }

        let page_count = pages.len();
        let mut text = pages.join("\n");

        if text.trim().is_empty() {
            debug!("lopdf found no text in {} pages, trying pdf-extract", page_count);
            match pdf_extract::extract_text_from_mem(bytes) {
                Ok(fallback) if !fallback.trim().is_empty() => text = fallback,
                Ok(_) => warn!("PDF has no extractable text layer (scanned or image-only?)"),
                Err(e) => warn!("pdf-extract fallback failed: {}", e),
            }
        }

        debug!("Extracted {} chars from {} pages", text.len(), page_count);
        Ok(Document::new(text, page_count))
    }
}
