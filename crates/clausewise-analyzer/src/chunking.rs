//! Fixed-size text chunking for the summarization service

/// Splits text into fixed-size, non-overlapping character chunks
///
/// Sizes count Unicode scalar values, so multi-byte text is never cut inside
/// a character.
#[derive(Debug, Clone, Copy)]
pub struct TextChunker {
    chunk_size: usize,
}

impl TextChunker {
    /// Create a chunker; a size of zero is treated as one
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Configured chunk size in characters
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Chunk the given text
    ///
    /// A text of `L` characters yields `ceil(L / chunk_size)` chunks, all full
    /// except possibly the last. Empty text yields no chunks.
    pub fn chunk<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut chunks = Vec::new();
        let mut start = 0;
        let mut count = 0;

        for (offset, _) in text.char_indices() {
            if count == self.chunk_size {
                chunks.push(&text[start..offset]);
                start = offset;
                count = 0;
            }
            count += 1;
        }
        if start < text.len() {
            chunks.push(&text[start..]);
        }

        chunks
    }

    /// Only the first chunk, or `None` for empty text
    pub fn first<'a>(&self, text: &'a str) -> Option<&'a str> {
        if text.is_empty() {
            return None;
        }
        let end = text
            .char_indices()
            .nth(self.chunk_size)
            .map_or(text.len(), |(offset, _)| offset);
        Some(&text[..end])
    }
}
