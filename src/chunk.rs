//! Sliding-window text chunker, re-exported from `doc-chunker-core`.
//!
//! # Example
//!
//! ```rust
//! use doc_chunker::chunk::{chunk_text, ChunkerConfig};
//!
//! let config = ChunkerConfig::new(10, 2).unwrap();
//! let chunks = chunk_text("The Emperor protects.", &config);
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[1].offset, 8);
//! ```

pub use doc_chunker_core::chunk::*;
pub use doc_chunker_core::models::{Chunk, ChunkSet};
pub use doc_chunker_core::ChunkError;
