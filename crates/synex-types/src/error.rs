use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid version spec {0:?}: expected \"major.minor\"")]
    InvalidVersionSpec(String),

    #[error("invalid managed-object id: {0}")]
    InvalidMoId(String),
}
