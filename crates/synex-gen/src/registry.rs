use std::collections::HashMap;

use synex_types::{ManagedObject, MoId, MoKind};

use crate::error::{GenError, GenResult};

/// In-memory index of every managed object created during a run.
///
/// Supports lookup by id (unique) and by kind (insertion-ordered). The
/// registry is mutated only by the object and browse-tree generators; the
/// document writers never see it. It lives for the duration of one run and
/// is discarded afterwards.
///
/// Invariant: every id held in a kind list resolves through [`Registry::get`],
/// and every registered object appears in exactly one kind list.
#[derive(Debug, Default)]
pub struct Registry {
    by_id: HashMap<MoId, ManagedObject>,
    by_kind: HashMap<MoKind, Vec<MoId>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns `true` if no objects have been registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Register an object. Registering the same id twice is an error.
    pub fn insert(&mut self, mo: ManagedObject) -> GenResult<()> {
        if self.by_id.contains_key(&mo.id) {
            return Err(GenError::DuplicateId(mo.id));
        }
        self.by_kind.entry(mo.kind).or_default().push(mo.id);
        self.by_id.insert(mo.id, mo);
        Ok(())
    }

    /// Look up an object by id.
    pub fn get(&self, id: MoId) -> Option<&ManagedObject> {
        self.by_id.get(&id)
    }

    /// Ids of all objects of the given kind, in insertion order.
    /// Returns an empty slice for kinds with no objects.
    pub fn of_kind(&self, kind: MoKind) -> &[MoId] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of objects of the given kind.
    pub fn count_of_kind(&self, kind: MoKind) -> usize {
        self.of_kind(kind).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mo(id: u64, kind: MoKind) -> ManagedObject {
        ManagedObject::new(MoId::new(id), kind, format!("object {id}"))
    }

    #[test]
    fn insert_then_get() {
        let mut registry = Registry::new();
        registry.insert(mo(1000, MoKind::Xml)).unwrap();
        let got = registry.get(MoId::new(1000)).unwrap();
        assert_eq!(got.display_name, "object 1000");
        assert_eq!(got.kind, MoKind::Xml);
    }

    #[test]
    fn missing_id_is_none() {
        let registry = Registry::new();
        assert!(registry.get(MoId::new(9)).is_none());
    }

    #[test]
    fn kind_list_preserves_insertion_order() {
        let mut registry = Registry::new();
        for id in [1003, 1001, 1002] {
            registry.insert(mo(id, MoKind::Xml)).unwrap();
        }
        let ids: Vec<u64> = registry
            .of_kind(MoKind::Xml)
            .iter()
            .map(|id| id.value())
            .collect();
        assert_eq!(ids, [1003, 1001, 1002]);
    }

    #[test]
    fn unknown_kind_yields_empty_slice() {
        let mut registry = Registry::new();
        registry.insert(mo(1000, MoKind::Xml)).unwrap();
        assert!(registry.of_kind(MoKind::Container).is_empty());
        assert_eq!(registry.count_of_kind(MoKind::Reference), 0);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut registry = Registry::new();
        registry.insert(mo(1000, MoKind::Xml)).unwrap();
        let err = registry.insert(mo(1000, MoKind::Container)).unwrap_err();
        assert!(matches!(err, GenError::DuplicateId(id) if id == MoId::new(1000)));
        // The failed insert must not disturb the kind lists.
        assert_eq!(registry.count_of_kind(MoKind::Container), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn kind_lists_and_id_map_agree() {
        let mut registry = Registry::new();
        registry.insert(mo(1000, MoKind::Xml)).unwrap();
        registry.insert(mo(1001, MoKind::Container)).unwrap();
        registry.insert(mo(1002, MoKind::Xml)).unwrap();

        for kind in [
            MoKind::Xml,
            MoKind::NonXml,
            MoKind::Container,
            MoKind::Reference,
        ] {
            for id in registry.of_kind(kind) {
                let resolved = registry.get(*id).expect("kind list id must resolve");
                assert_eq!(resolved.kind, kind);
            }
        }
        let listed: usize = [
            MoKind::Xml,
            MoKind::NonXml,
            MoKind::Container,
            MoKind::Reference,
        ]
        .iter()
        .map(|kind| registry.count_of_kind(*kind))
        .sum();
        assert_eq!(listed, registry.len());
    }
}
