use std::fmt;

use crate::id::MoId;
use crate::version::VersionSpec;

/// The kind of managed object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoKind {
    /// Flat XML content object with a document body and version history.
    Xml,
    /// Flat non-XML (binary) content object.
    NonXml,
    /// Browse-tree container grouping references and nested containers.
    Container,
    /// Lightweight pointer from a container to a flat object.
    Reference,
}

impl fmt::Display for MoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => write!(f, "xml"),
            Self::NonXml => write!(f, "non-xml"),
            Self::Container => write!(f, "container"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

/// One content unit in the generated export.
///
/// The id and kind are fixed at creation. Version history is collected while
/// the object's documents are written and is empty for references and
/// containers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagedObject {
    /// Unique id, assigned once by the allocator.
    pub id: MoId,
    /// Kind tag, fixed at creation.
    pub kind: MoKind,
    /// Human-readable title. Empty for references.
    pub display_name: String,
    /// Revision labels in commit order. At least one entry would exist in a
    /// real repository; generated flat objects may legitimately have zero
    /// extra versions beyond the current snapshot.
    pub versions: Vec<VersionSpec>,
}

impl ManagedObject {
    /// Create an object with an empty version history.
    pub fn new(id: MoId, kind: MoKind, display_name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            display_name: display_name.into(),
            versions: Vec::new(),
        }
    }

    /// Create an object with a pre-collected version history.
    pub fn with_versions(
        id: MoId,
        kind: MoKind,
        display_name: impl Into<String>,
        versions: Vec<VersionSpec>,
    ) -> Self {
        Self {
            id,
            kind,
            display_name: display_name.into(),
            versions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        assert_eq!(format!("{}", MoKind::Xml), "xml");
        assert_eq!(format!("{}", MoKind::NonXml), "non-xml");
        assert_eq!(format!("{}", MoKind::Container), "container");
        assert_eq!(format!("{}", MoKind::Reference), "reference");
    }

    #[test]
    fn new_object_has_no_versions() {
        let mo = ManagedObject::new(MoId::new(1000), MoKind::Xml, "A Title");
        assert!(mo.versions.is_empty());
        assert_eq!(mo.display_name, "A Title");
    }

    #[test]
    fn with_versions_keeps_order() {
        let versions = vec![VersionSpec::new(1, 0), VersionSpec::new(1, 1)];
        let mo = ManagedObject::with_versions(
            MoId::new(1000),
            MoKind::Xml,
            "titled",
            versions.clone(),
        );
        assert_eq!(mo.versions, versions);
    }
}
