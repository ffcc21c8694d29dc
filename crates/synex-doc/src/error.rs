use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from emitting a generated document or metadata file.
///
/// Every variant names the operation and the offending path. There is no
/// retry anywhere: each write is attempted once and any failure aborts the
/// run, possibly leaving a partially written file behind.
#[derive(Debug, Error)]
pub enum DocError {
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: io::Error,
    },

    /// Writing XML events to the file failed.
    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: quick_xml::Error,
    },

    /// Flushing buffered output failed.
    #[error("error flushing {path}: {source}")]
    Flush {
        path: PathBuf,
        source: io::Error,
    },
}

/// Result alias for document emission.
pub type DocResult<T> = Result<T, DocError>;
