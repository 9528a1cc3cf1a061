//! # doc-chunker core
//!
//! Pure chunking logic for doc-chunker: the chunk data model, validated
//! chunker configuration, and the fixed-size sliding-window chunker.
//!
//! This crate performs no filesystem I/O and pulls in no runtime. Text
//! extraction, persistence, and the CLI live in the `doc-chunker` package.

pub mod chunk;
pub mod error;
pub mod models;

pub use chunk::{chunk, chunk_text, ChunkerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use error::ChunkError;
pub use models::{Chunk, ChunkSet};
