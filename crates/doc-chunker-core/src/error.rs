//! Error types for the chunker core.

use thiserror::Error;

/// Errors raised while configuring the chunker or validating a chunk set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// `chunk_size` was zero.
    #[error("invalid configuration: chunk_size must be > 0")]
    ZeroChunkSize,
    /// `overlap` was not strictly less than `chunk_size`, so the window
    /// would never advance.
    #[error("invalid configuration: overlap ({overlap}) must be less than chunk_size ({chunk_size})")]
    OverlapTooLarge { chunk_size: usize, overlap: usize },
    /// A serialized chunk set declared a count that disagrees with its chunks.
    #[error("chunk set total ({total}) does not match chunk count ({actual})")]
    TotalMismatch { total: usize, actual: usize },
}
