//! XML document and metadata emission.
//!
//! This crate owns the structural contracts of everything the generator
//! writes to disk: content documents, per-object resource metadata,
//! container documents, browse-node metadata, and the final id summary.
//! The emitted vocabulary mimics an RSuite 3.6 content export (DITA topics
//! and `rs_ca` container maps) closely enough that an importer's parser is
//! exercised at realistic shapes and sizes.
//!
//! All writers are pure with respect to the object registry: they receive
//! ids and titles from their caller and never mint ids themselves. Every
//! file is opened, written through a buffered XML writer, flushed, and
//! closed before the writer returns; a failure mid-write may leave a
//! partial file but never an open handle.
//!
//! Several metadata fields are intentionally constant across every object
//! in a run (commit timestamps, usernames, transaction ids). The target
//! importer does not require variation, so the generator does not produce
//! any.

pub mod container;
pub mod error;
pub mod node;
pub mod resource;
pub mod summary;
pub mod topic;
mod writer;

pub use container::{write_container_document, ContainerRef};
pub use error::{DocError, DocResult};
pub use node::write_node_metadata;
pub use resource::write_resource_metadata;
pub use summary::write_id_summary;
pub use topic::write_content_document;

/// User recorded in object metadata. Constant for the whole run.
pub const EXPORT_USER: &str = "fakeexportuser";

/// User recorded in browse-node system metadata.
pub const NODE_USER: &str = "system";

/// Commit timestamp stamped on every version entry.
pub const COMMITTED_AT: &str = "2010-12-16T20:05:41.000Z";

/// Creation timestamp stamped on every browse node.
pub const NODE_CREATED_AT: &str = "2016-09-27T16:30:04.490Z";

/// Tag name recorded for flat content objects.
pub const TOPIC_TAG: &str = "topic";

/// Tag name recorded for browse containers.
pub const CONTAINER_TAG: &str = "rs_ca";

/// RSuite metadata namespace, bound to the `r` prefix.
pub const RSUITE_NS: &str = "http://www.rsuitecms.com/rsuite/ns/metadata";

/// DITA architecture namespace, bound to the `ditaarch` prefix.
pub const DITA_ARCH_NS: &str = "http://dita.oasis-open.org/architecture/2005/";
