//! Failure taxonomy for a pipeline run.
//!
//! Every variant is fatal: the run stops and no output file is produced.

use std::path::PathBuf;
use thiserror::Error;

use crate::chunk::ChunkError;
use crate::config::ConfigError;
use crate::extract::ExtractError;
use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source document could not be read or parsed.
    #[error("extraction failed for {}", .path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
    /// Chunking parameters or the config file are unusable.
    #[error("invalid configuration")]
    InvalidConfiguration(#[source] ConfigError),
    /// The output artifact could not be written.
    #[error("could not write output")]
    Io(#[from] PersistError),
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        PipelineError::InvalidConfiguration(e)
    }
}

impl From<ChunkError> for PipelineError {
    fn from(e: ChunkError) -> Self {
        PipelineError::InvalidConfiguration(ConfigError::Chunking(e))
    }
}
