use std::fs;
use std::io::{self, Write};
use std::path::Path;

use rand::Rng;
use synex_corpus::Corpus;
use synex_doc::{write_content_document, write_resource_metadata, TOPIC_TAG};
use synex_types::{ManagedObject, MoId, MoKind, VersionSequence, VersionSpec};
use tracing::debug;

use crate::alloc::IdAllocator;
use crate::config::GenerationConfig;
use crate::error::{GenError, GenResult};
use crate::registry::Registry;
use crate::shard::resolve_shard;

/// Progress dots on stdout: one dot per 100 objects, wrapped at 60 dots.
/// Purely cosmetic; write failures on the terminal are ignored.
struct Progress {
    objects: u64,
    dots: u32,
}

impl Progress {
    fn new() -> Self {
        Self { objects: 0, dots: 0 }
    }

    fn tick(&mut self) {
        self.objects += 1;
        if self.objects % 100 != 0 {
            return;
        }
        print!(".");
        let _ = io::stdout().flush();
        self.dots += 1;
        if self.dots >= 60 {
            println!();
            self.dots = 0;
        }
    }

    fn finish(self) {
        println!();
    }
}

/// Generates the flat managed objects of a run.
///
/// For each of `max_mo_count()` objects: resolve a shard, allocate an id,
/// create the object directory, write the current-version document, a
/// random number of version documents, and the resource metadata, then
/// register the object.
pub struct MoGenerator<'a> {
    config: &'a GenerationConfig,
    corpus: &'a Corpus,
}

impl<'a> MoGenerator<'a> {
    pub fn new(config: &'a GenerationConfig, corpus: &'a Corpus) -> Self {
        Self { config, corpus }
    }

    /// Run the generation loop, placing objects under `mos_dir`
    /// (`.../rsuite.content/managed-objects`).
    pub fn generate<R: Rng>(
        &self,
        mos_dir: &Path,
        alloc: &mut IdAllocator,
        registry: &mut Registry,
        rng: &mut R,
    ) -> GenResult<()> {
        let total = self.config.max_mo_count();
        debug!(total, "generating flat managed objects");

        let mut progress = Progress::new();
        for _ in 0..total {
            let shard = resolve_shard(rng, mos_dir)?;
            let id = alloc.next();
            let mo_dir = shard.join(id.to_string());
            fs::create_dir_all(&mo_dir).map_err(|source| GenError::CreateDir {
                path: mo_dir.clone(),
                source,
            })?;

            let mo = self.make_managed_object(&mo_dir, id, rng)?;
            registry.insert(mo)?;
            progress.tick();
        }
        progress.finish();
        Ok(())
    }

    /// Write one object's documents and metadata into its directory.
    ///
    /// Non-XML objects are currently generated with the same document shape
    /// as XML objects and registered as XML; the configured non-XML count
    /// only contributes to the total.
    fn make_managed_object<R: Rng>(
        &self,
        mo_dir: &Path,
        id: MoId,
        rng: &mut R,
    ) -> GenResult<ManagedObject> {
        let title = self.corpus.sample_words(rng, 2, 5);

        write_content_document(&mo_dir.join("content.xml"), id, &title, self.corpus, rng)?;
        let versions = self.write_versions(mo_dir, id, &title, rng)?;
        write_resource_metadata(mo_dir, id, &title, TOPIC_TAG, &versions, self.corpus, rng)?;

        Ok(ManagedObject::with_versions(id, MoKind::Xml, title, versions))
    }

    /// Write the version documents for one object and return the specs in
    /// commit order. A draw of zero versions is valid: the object then has
    /// only its `content.xml` and an empty version history.
    fn write_versions<R: Rng>(
        &self,
        mo_dir: &Path,
        id: MoId,
        title: &str,
        rng: &mut R,
    ) -> GenResult<Vec<VersionSpec>> {
        let count = rng.gen_range(0..=self.config.max_versions) as usize;
        let mut specs = Vec::with_capacity(count);
        for spec in VersionSequence::new().take(count) {
            let path = mo_dir.join(format!("{id}-{spec}.xml"));
            write_content_document(&path, id, title, self.corpus, rng)?;
            specs.push(spec);
        }
        Ok(specs)
    }
}
