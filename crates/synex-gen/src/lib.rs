//! Core generation engine for the synthetic content-repository export.
//!
//! This crate sequences the whole run: it allocates ids, spreads flat
//! objects across a two-level shard layout, writes their documents and
//! metadata through `synex-doc`, builds a random browse hierarchy over the
//! generated objects, and finishes with the `ids.xml` summary artifact.
//!
//! # Components
//!
//! - [`IdAllocator`] — strictly increasing object id source, one per run
//! - [`Registry`] — in-memory id → object and kind → objects index
//! - [`resolve_shard`] — random two-level directory placement
//! - [`MoGenerator`] — flat managed-object generation loop
//! - [`BrowseTreeGenerator`] — recursive container hierarchy builder
//! - [`ExportGenerator`] — run orchestrator
//! - [`GenerationConfig`] — run options loaded from a TOML file
//!
//! A run is single-threaded and fully sequential. Any I/O failure aborts
//! immediately; partially generated output is left on disk and the summary
//! artifact is only written on full success.

pub mod alloc;
pub mod browse;
pub mod config;
pub mod error;
pub mod export;
pub mod objects;
pub mod registry;
pub mod shard;

pub use alloc::{IdAllocator, DEFAULT_ID_SEED};
pub use browse::{BrowseTreeGenerator, ROOT_CONTAINER_ID};
pub use config::GenerationConfig;
pub use error::{GenError, GenResult};
pub use export::{ExportGenerator, ExportSummary};
pub use objects::MoGenerator;
pub use registry::Registry;
pub use shard::resolve_shard;
