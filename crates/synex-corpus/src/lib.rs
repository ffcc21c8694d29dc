//! Embedded word corpus and random word sampling.
//!
//! The generator fills titles, notes, and body paragraphs with bag-of-words
//! filler drawn from a static corpus bundled into the binary. The corpus is
//! loaded once at startup into an immutable [`Corpus`] and passed by
//! reference wherever text is sampled; there is no global state.
//!
//! Sampling is uniform with replacement and makes no attempt at semantic
//! realism — the output only has to exercise an importer's parser at
//! realistic document sizes.

pub mod error;
pub mod sampler;

pub use error::CorpusError;
pub use sampler::Corpus;
