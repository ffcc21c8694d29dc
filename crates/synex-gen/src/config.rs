use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alloc::DEFAULT_ID_SEED;
use crate::error::{GenError, GenResult};

/// Options for one generation run, loaded from a TOML key/value file.
///
/// Every field has a default, so an empty file (or no file at all) yields a
/// full-scale run into `./export`. Unknown keys are ignored.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Root directory for all generated output.
    pub outdir: PathBuf,
    /// Number of flat XML objects to generate.
    pub max_xml_mos: u64,
    /// Number of flat non-XML objects to generate. Currently emitted with
    /// the same document shape as XML objects; only the total count matters.
    pub max_binary_mos: u64,
    /// Upper bound on extra versions per flat object (0 is valid).
    pub max_versions: u32,
    /// Max sibling containers per browse-tree level.
    pub browse_width: u32,
    /// Max recursion depth of the browse tree.
    pub browse_depth: u32,
    /// Max direct references to flat objects per container.
    pub max_container_children: u32,
    /// First id issued by the allocator.
    pub id_seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            outdir: PathBuf::from("export"),
            max_xml_mos: 10_000,
            max_binary_mos: 10_000,
            max_versions: 3,
            browse_width: 10,
            browse_depth: 5,
            max_container_children: 100,
            id_seed: DEFAULT_ID_SEED,
        }
    }
}

impl GenerationConfig {
    /// Load options from a TOML file. A missing or unreadable file is a
    /// configuration error, fatal at startup.
    pub fn load(path: &Path) -> GenResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| GenError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| GenError::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// Total number of flat objects one run generates.
    pub fn max_mo_count(&self) -> u64 {
        self.max_xml_mos + self.max_binary_mos
    }
}
