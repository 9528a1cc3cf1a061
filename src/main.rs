//! # `process-doc`
//!
//! Extracts the text of one document, splits it into overlapping chunks, and
//! writes `{"chunks": [...], "total": N}` to the output file.
//!
//! ## Usage
//!
//! ```bash
//! process-doc [--config <PATH>] [--input <PATH>] [--output <PATH>]
//!             [--chunk-size <N>] [--overlap <N>] [--dry-run]
//! ```
//!
//! With no flags it reads `./config/process-doc.toml` if present, otherwise
//! the built-in defaults (`data/source.docx` → `data/chunks.json`, 1500
//! characters per chunk, 200 characters of overlap).
//!
//! On success a one-line confirmation with the chunk count goes to stdout.
//! Any failure exits non-zero with the reason on stderr; no output file is
//! left behind.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use doc_chunker::config::{self, Config};
use doc_chunker::extract::FileExtractor;
use doc_chunker::logging;
use doc_chunker::pipeline::{self, RunOptions};

/// Split a document into fixed-size overlapping text chunks.
#[derive(Parser)]
#[command(name = "process-doc", version)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/process-doc.toml`; built-in defaults apply when
    /// that file does not exist.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source document (`.docx`, `.pdf`, `.txt`, `.md`).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Destination JSON file. Its directory must already exist.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum characters per chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters shared between adjacent chunks. Must be below the chunk size.
    #[arg(long)]
    overlap: Option<usize>,

    /// Extract and chunk, report the count, and write nothing.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(path) = &self.input {
            cfg.input.path = path.clone();
        }
        if let Some(path) = &self.output {
            cfg.output.path = path.clone();
        }
        if let Some(n) = self.chunk_size {
            cfg.chunking.chunk_size = n;
        }
        if let Some(n) = self.overlap {
            cfg.chunking.overlap = n;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::resolve_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut cfg);
    logging::init_logging(&cfg.logging).context("failed to initialize logging")?;

    let options = RunOptions {
        dry_run: cli.dry_run,
    };
    let outcome = pipeline::run(&cfg, &FileExtractor, options)?;

    match outcome.destination {
        Some(path) => println!(
            "Wrote {} chunks to {}",
            outcome.chunk_set.total(),
            path.display()
        ),
        None => println!(
            "Dry run: {} chunks from {} characters (nothing written)",
            outcome.chunk_set.total(),
            outcome.characters
        ),
    }

    Ok(())
}
