use std::fs;
use std::path::Path;

use rand::Rng;
use synex_corpus::Corpus;
use synex_doc::{
    write_container_document, write_node_metadata, write_resource_metadata, ContainerRef,
    TOPIC_TAG,
};
use synex_types::{ManagedObject, MoId, MoKind, VersionSpec};
use tracing::debug;

use crate::alloc::IdAllocator;
use crate::config::GenerationConfig;
use crate::error::{GenError, GenResult};
use crate::registry::Registry;

/// Sentinel id of the synthetic root container.
///
/// The root mirrors the fixed id the target system uses for its top-level
/// browse folder; it is never drawn from the allocator and never
/// registered.
pub const ROOT_CONTAINER_ID: MoId = MoId::new(4);

/// Display name of the synthetic root container.
const ROOT_CONTAINER_NAME: &str = "/";

/// Builds the random browse hierarchy over the generated flat objects.
///
/// Containers are nested directories named by their sampled titles;
/// traversal is depth-first (a container's subtree is finished before its
/// next sibling starts). Container and reference ids come from the same
/// allocator sequence as flat objects, and both are registered.
pub struct BrowseTreeGenerator<'a> {
    config: &'a GenerationConfig,
    corpus: &'a Corpus,
}

impl<'a> BrowseTreeGenerator<'a> {
    pub fn new(config: &'a GenerationConfig, corpus: &'a Corpus) -> Self {
        Self { config, corpus }
    }

    /// Build the tree under `content_dir` (`.../rsuite.content`).
    ///
    /// The root's node metadata is always written, even when the drawn
    /// width or the configured depth produces no containers at all.
    pub fn generate<R: Rng>(
        &self,
        content_dir: &Path,
        alloc: &mut IdAllocator,
        registry: &mut Registry,
        rng: &mut R,
    ) -> GenResult<()> {
        debug!(
            width = self.config.browse_width,
            depth = self.config.browse_depth,
            "generating browse tree"
        );
        let child_names = self.spawn_containers(content_dir, 0, alloc, registry, rng)?;
        write_node_metadata(
            content_dir,
            ROOT_CONTAINER_ID,
            ROOT_CONTAINER_NAME,
            &child_names,
            self.corpus,
            rng,
        )?;
        Ok(())
    }

    /// Create the nested containers of a node at `parent_depth`, returning
    /// their display names in drawn order. Creation stops once the child
    /// level would exceed the configured browse depth.
    fn spawn_containers<R: Rng>(
        &self,
        parent_dir: &Path,
        parent_depth: u32,
        alloc: &mut IdAllocator,
        registry: &mut Registry,
        rng: &mut R,
    ) -> GenResult<Vec<String>> {
        if parent_depth >= self.config.browse_depth {
            return Ok(Vec::new());
        }
        let count = rng.gen_range(0..=self.config.browse_width);
        let mut names = Vec::with_capacity(count as usize);
        for _ in 0..count {
            names.push(self.make_container(parent_dir, parent_depth + 1, alloc, registry, rng)?);
        }
        Ok(names)
    }

    /// Create one container: its directory, direct references, nested
    /// containers (recursed first), document file, and node metadata.
    /// Returns the container's display name for the parent's child list.
    fn make_container<R: Rng>(
        &self,
        parent_dir: &Path,
        depth: u32,
        alloc: &mut IdAllocator,
        registry: &mut Registry,
        rng: &mut R,
    ) -> GenResult<String> {
        let name = self.corpus.sample_words(rng, 1, 4);
        let id = alloc.next();
        let dir = parent_dir.join(&name);
        // Sibling containers can draw the same name; they then share a
        // directory and the later one's files win.
        fs::create_dir_all(&dir).map_err(|source| GenError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        // Direct references to flat objects, drawn with replacement. A run
        // with no flat objects yields a container with no references.
        let targets = self.draw_targets(registry, rng);
        let mut child_names: Vec<String> = targets
            .iter()
            .map(|target| {
                registry
                    .get(*target)
                    .map(|mo| mo.display_name.clone())
                    .unwrap_or_default()
            })
            .collect();

        child_names.extend(self.spawn_containers(&dir, depth, alloc, registry, rng)?);

        let refs: Vec<ContainerRef> = targets
            .iter()
            .map(|target| ContainerRef {
                ref_id: alloc.next(),
                target_id: *target,
            })
            .collect();
        write_container_document(&dir, id, &refs)?;
        for r in &refs {
            write_resource_metadata(
                &dir,
                r.ref_id,
                "",
                TOPIC_TAG,
                &[VersionSpec::initial()],
                self.corpus,
                rng,
            )?;
            registry.insert(ManagedObject::new(r.ref_id, MoKind::Reference, ""))?;
        }

        write_node_metadata(&dir, id, &name, &child_names, self.corpus, rng)?;
        registry.insert(ManagedObject::new(id, MoKind::Container, name.clone()))?;
        Ok(name)
    }

    /// Draw the direct-reference targets for one container.
    fn draw_targets<R: Rng>(&self, registry: &Registry, rng: &mut R) -> Vec<MoId> {
        let xml_ids = registry.of_kind(MoKind::Xml);
        if xml_ids.is_empty() {
            return Vec::new();
        }
        let count = rng.gen_range(0..=self.config.max_container_children) as usize;
        (0..count)
            .map(|_| xml_ids[rng.gen_range(0..xml_ids.len())])
            .collect()
    }
}
