use thiserror::Error;

/// Errors from loading the word corpus.
///
/// Any of these is fatal at startup: no generation is attempted without a
/// usable corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("word corpus {name:?} contains no usable words")]
    Empty { name: String },
}
