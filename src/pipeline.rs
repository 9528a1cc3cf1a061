//! Extract → chunk → persist, run once to completion.
//!
//! Chunking parameters are validated before the source document is touched,
//! so a bad configuration never costs an extraction. The extractor is
//! injected, which lets tests drive the whole pipeline from string fixtures.

use std::path::PathBuf;

use crate::chunk::{chunk_text, ChunkSet};
use crate::config::Config;
use crate::error::PipelineError;
use crate::extract::TextExtractor;
use crate::persist::persist;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub chunk_set: ChunkSet,
    /// Length of the extracted text in characters.
    pub characters: usize,
    /// Where the chunk set was written; `None` on a dry run.
    pub destination: Option<PathBuf>,
}

/// Options that change how a run behaves without changing its config.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Extract and chunk, but write nothing.
    pub dry_run: bool,
}

pub fn run<E>(config: &Config, extractor: &E, options: RunOptions) -> Result<RunOutcome, PipelineError>
where
    E: TextExtractor + ?Sized,
{
    let chunker = config.chunking.validate()?;
    let source = &config.input.path;

    tracing::info!(
        source = %source.display(),
        chunk_size = chunker.chunk_size(),
        overlap = chunker.overlap(),
        "extracting document text"
    );
    let text = extractor
        .extract_text(source)
        .map_err(|e| PipelineError::Extraction {
            path: source.clone(),
            source: e,
        })?;
    let characters = text.chars().count();

    let chunks = chunk_text(&text, &chunker);
    let chunk_set = ChunkSet::from(chunks);
    tracing::info!(characters, total = chunk_set.total(), "chunked document");

    if options.dry_run {
        tracing::info!("dry run, nothing written");
        return Ok(RunOutcome {
            chunk_set,
            characters,
            destination: None,
        });
    }

    let destination = config.output.path.clone();
    persist(&chunk_set, &destination)?;
    tracing::info!(destination = %destination.display(), "wrote chunk set");

    Ok(RunOutcome {
        chunk_set,
        characters,
        destination: Some(destination),
    })
}
