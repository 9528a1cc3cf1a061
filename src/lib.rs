//! # doc-chunker
//!
//! Turns one source document into fixed-size overlapping text chunks for a
//! downstream retrieval index.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//! │   Extract    │──▶│    Chunk     │──▶│     Persist      │
//! │ docx/pdf/txt │   │ 1500 / 200   │   │ chunks.json (tmp │
//! └──────────────┘   └──────────────┘   │  file + rename)  │
//!                                       └──────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! process-doc                                  # data/source.docx -> data/chunks.json
//! process-doc --input case.docx --output out.json
//! process-doc --dry-run
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`chunk`] | Sliding-window chunker (re-exported from `doc-chunker-core`) |
//! | [`config`] | TOML configuration parsing and validation |
//! | [`extract`] | `TextExtractor` capability and the file-based extractor |
//! | [`persist`] | Atomic JSON output |
//! | [`pipeline`] | End-to-end run |
//! | [`error`] | Pipeline failure taxonomy |
//! | [`logging`] | `tracing` subscriber setup |

pub mod chunk;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod persist;
pub mod pipeline;
