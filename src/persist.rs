//! Atomic JSON persistence of a [`ChunkSet`].
//!
//! The record is written to a temporary file next to the destination and
//! renamed over it only once the full content is on disk. If anything fails
//! the temporary file is removed when it is dropped, and whatever was at the
//! destination before is left as it was.

use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chunk::ChunkSet;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize chunks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write `chunk_set` to `destination` as `{"chunks": [...], "total": N}`.
///
/// Overwrites an existing file. The parent directory must already exist.
pub fn persist(chunk_set: &ChunkSet, destination: &Path) -> Result<(), PersistError> {
    let dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(PersistError::MissingDirectory(dir.to_path_buf()));
    }

    let json = serde_json::to_string_pretty(chunk_set)?;
    let write_err = |source: std::io::Error| PersistError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".process-doc-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.write_all(b"\n").map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(destination).map_err(|e| write_err(e.error))?;

    tracing::debug!(
        path = %destination.display(),
        bytes = json.len() + 1,
        "persisted chunk set"
    );
    Ok(())
}
