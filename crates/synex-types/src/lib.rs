//! Foundation types for the synthetic export generator.
//!
//! This crate provides the core identity and versioning types used
//! throughout the generator. Every other synex crate depends on
//! `synex-types`.
//!
//! # Key Types
//!
//! - [`MoId`] — Numeric managed-object identifier, assigned once per object
//! - [`MoKind`] — Object kind tag (XML, non-XML, container, reference)
//! - [`VersionSpec`] — `major.minor` revision label for one object version
//! - [`VersionSequence`] — Iterator producing revision labels in commit order
//! - [`ManagedObject`] — One content unit in the generated export

pub mod error;
pub mod id;
pub mod object;
pub mod version;

pub use error::TypeError;
pub use id::MoId;
pub use object::{ManagedObject, MoKind};
pub use version::{VersionSpec, VersionSequence};
