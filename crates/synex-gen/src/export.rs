use std::fs;

use rand::Rng;
use synex_corpus::Corpus;
use synex_doc::write_id_summary;
use synex_types::{MoId, MoKind};
use tracing::info;

use crate::alloc::IdAllocator;
use crate::browse::BrowseTreeGenerator;
use crate::config::GenerationConfig;
use crate::error::{GenError, GenResult};
use crate::objects::MoGenerator;
use crate::registry::Registry;

/// Directory under the output root holding all repository content.
const CONTENT_DIR: &str = "rsuite.content";

/// Directory under the content root holding the sharded flat objects.
const MANAGED_OBJECTS_DIR: &str = "managed-objects";

/// Tally of one completed run, by object kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportSummary {
    /// Flat XML objects generated.
    pub xml: usize,
    /// Flat non-XML objects generated.
    pub non_xml: usize,
    /// Browse containers created (excluding the sentinel root).
    pub containers: usize,
    /// References minted inside container documents.
    pub references: usize,
    /// The next unallocated id, as recorded in `ids.xml`.
    pub next_id: MoId,
}

/// Sequences a full generation run.
///
/// Owns the configuration and corpus; the registry and allocator are
/// created fresh per run and discarded afterwards, so consecutive runs
/// into distinct output directories are fully independent.
pub struct ExportGenerator {
    config: GenerationConfig,
    corpus: Corpus,
}

impl ExportGenerator {
    pub fn new(config: GenerationConfig, corpus: Corpus) -> Self {
        Self { config, corpus }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Run managed-object generation, then browse-tree generation, then
    /// write the `ids.xml` summary. Any failure aborts immediately,
    /// leaving partial output on disk; the summary artifact only exists
    /// after a fully successful run.
    pub fn run<R: Rng>(&self, rng: &mut R) -> GenResult<ExportSummary> {
        let outdir = &self.config.outdir;
        let content_dir = outdir.join(CONTENT_DIR);
        let mos_dir = content_dir.join(MANAGED_OBJECTS_DIR);
        create_dir(&mos_dir)?;

        info!(outdir = %outdir.display(), "starting export generation");

        let mut alloc = IdAllocator::new(self.config.id_seed);
        let mut registry = Registry::new();

        MoGenerator::new(&self.config, &self.corpus).generate(
            &mos_dir,
            &mut alloc,
            &mut registry,
            rng,
        )?;
        BrowseTreeGenerator::new(&self.config, &self.corpus).generate(
            &content_dir,
            &mut alloc,
            &mut registry,
            rng,
        )?;

        write_id_summary(outdir, alloc.peek())?;
        info!(next_id = %alloc.peek(), "export generation done");

        Ok(ExportSummary {
            xml: registry.count_of_kind(MoKind::Xml),
            non_xml: registry.count_of_kind(MoKind::NonXml),
            containers: registry.count_of_kind(MoKind::Container),
            references: registry.count_of_kind(MoKind::Reference),
            next_id: alloc.peek(),
        })
    }
}

fn create_dir(path: &std::path::Path) -> GenResult<()> {
    fs::create_dir_all(path).map_err(|source| GenError::CreateDir {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;
    use walkdir::WalkDir;

    fn tiny_config(outdir: &Path) -> GenerationConfig {
        GenerationConfig {
            outdir: outdir.to_owned(),
            max_xml_mos: 5,
            max_binary_mos: 0,
            max_versions: 2,
            browse_width: 2,
            browse_depth: 2,
            max_container_children: 3,
            ..GenerationConfig::default()
        }
    }

    fn run_into(outdir: &Path, seed: u64) -> ExportSummary {
        let generator = ExportGenerator::new(tiny_config(outdir), Corpus::embedded().unwrap());
        let mut rng = StdRng::seed_from_u64(seed);
        generator.run(&mut rng).unwrap()
    }

    #[test]
    fn run_writes_summary_artifact_with_next_id() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run_into(dir.path(), 1);

        let ids = std::fs::read_to_string(dir.path().join("ids.xml")).unwrap();
        assert!(ids.contains(&format!("<ids>{}</ids>", summary.next_id)));
        assert!(dir
            .path()
            .join("rsuite.content")
            .join("managed-objects")
            .is_dir());
        assert!(dir.path().join("rsuite.content").join("rsuite.node").is_file());
    }

    #[test]
    fn summary_counts_cover_all_allocations() {
        let dir = tempfile::tempdir().unwrap();
        let summary = run_into(dir.path(), 2);

        assert_eq!(summary.xml, 5);
        assert_eq!(summary.non_xml, 0);
        // Every allocated id is one registered object; the sentinel root
        // consumes no id.
        let allocated = summary.next_id.value() - 1000;
        let registered = (summary.xml + summary.non_xml + summary.containers
            + summary.references) as u64;
        assert_eq!(allocated, registered);
    }

    #[test]
    fn consecutive_runs_are_independent() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        run_into(first.path(), 3);
        run_into(second.path(), 4);

        // Both runs start their id sequence at the configured seed, so
        // both contain an object directory named 1000.
        for dir in [first.path(), second.path()] {
            let found = WalkDir::new(dir)
                .into_iter()
                .filter_map(Result::ok)
                .any(|e| e.file_type().is_dir() && e.file_name() == "1000");
            assert!(found, "no object dir 1000 under {}", dir.display());
        }
    }

    #[test]
    fn unwritable_output_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy the output path with a regular file.
        let outdir = dir.path().join("export");
        std::fs::write(&outdir, b"in the way").unwrap();

        let generator = ExportGenerator::new(
            GenerationConfig {
                outdir,
                ..tiny_config(dir.path())
            },
            Corpus::embedded().unwrap(),
        );
        let err = generator.run(&mut StdRng::seed_from_u64(5)).unwrap_err();
        assert!(matches!(err, GenError::CreateDir { .. }));
        // The summary artifact must not exist after a failed run.
        assert!(!dir.path().join("export").join("ids.xml").exists());
    }
}
