use std::io;
use std::path::PathBuf;

use synex_corpus::CorpusError;
use synex_doc::DocError;
use synex_types::MoId;
use thiserror::Error;

/// Errors from a generation run.
///
/// Configuration and corpus failures are fatal at startup; directory and
/// document failures abort the run at the point they occur. Every I/O
/// variant names the operation and the offending path.
#[derive(Debug, Error)]
pub enum GenError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid configuration {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },

    /// An id was registered twice. Indicates a broken allocator seed,
    /// never expected in a normal run.
    #[error("duplicate managed-object id {0}")]
    DuplicateId(MoId),

    /// The word corpus could not be loaded.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// A document or metadata file could not be written.
    #[error(transparent)]
    Doc(#[from] DocError),
}

/// Result alias for generation operations.
pub type GenResult<T> = Result<T, GenError>;
