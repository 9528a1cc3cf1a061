//! Fixed-size sliding-window text chunker.
//!
//! Splits text into windows of at most `chunk_size` characters. Each window
//! starts `stride = chunk_size - overlap` characters after the previous one,
//! so consecutive windows share `overlap` characters and no character of the
//! source falls between two chunks.
//!
//! # Algorithm
//!
//! 1. Validate `overlap < chunk_size` (see [`ChunkerConfig::new`]).
//! 2. Starting at offset 0, take `[offset, offset + chunk_size)` clamped to
//!    the end of the text.
//! 3. Advance `offset` by `stride`; stop once `offset >= len`.
//!
//! Lengths and offsets count Unicode scalar values, never bytes, so a chunk
//! boundary cannot land inside a UTF-8 sequence. Empty text yields no chunks.
//!
//! # Example
//!
//! ```rust
//! use doc_chunker_core::chunk;
//!
//! let text = "x".repeat(3000);
//! let set = chunk(&text, 1500, 200).unwrap();
//! assert_eq!(set.total(), 3);
//! assert_eq!(set.chunks()[2].len(), 400);
//! ```

use crate::error::ChunkError;
use crate::models::{Chunk, ChunkSet};

/// Maximum characters per chunk in the reference configuration.
pub const DEFAULT_CHUNK_SIZE: usize = 1500;
/// Characters shared between adjacent chunks in the reference configuration.
pub const DEFAULT_OVERLAP: usize = 200;

/// Validated chunking parameters.
///
/// A value of this type always satisfies `overlap < chunk_size`, so
/// [`stride`](Self::stride) is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    chunk_size: usize,
    overlap: usize,
}

impl ChunkerConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self, ChunkError> {
        if chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if overlap >= chunk_size {
            return Err(ChunkError::OverlapTooLarge {
                chunk_size,
                overlap,
            });
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Distance in characters between the starts of consecutive chunks.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Split `text` into overlapping windows.
///
/// Returns chunks with contiguous indices starting at 0 and their character
/// offsets into `text`. An empty `text` returns an empty vector.
pub fn chunk_text(text: &str, config: &ChunkerConfig) -> Vec<Chunk> {
    // Byte position of every char start, plus the end of the text.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let len = bounds.len() - 1;
    let stride = config.stride();

    let mut chunks = Vec::with_capacity(len.div_ceil(stride));
    let mut offset = 0;
    while offset < len {
        let end = offset.saturating_add(config.chunk_size).min(len);
        chunks.push(Chunk {
            index: chunks.len(),
            offset,
            text: text[bounds[offset]..bounds[end]].to_string(),
        });
        offset = offset.saturating_add(stride);
    }
    chunks
}

/// Validate the parameters and chunk `text` into a [`ChunkSet`].
///
/// Fails with an invalid-configuration error before doing any work when
/// `overlap >= chunk_size`.
pub fn chunk(text: &str, chunk_size: usize, overlap: usize) -> Result<ChunkSet, ChunkError> {
    let config = ChunkerConfig::new(chunk_size, overlap)?;
    Ok(ChunkSet::from(chunk_text(text, &config)))
}
