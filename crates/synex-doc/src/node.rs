use std::path::Path;

use rand::Rng;
use synex_corpus::Corpus;
use synex_types::{MoId, VersionSpec};

use crate::error::DocResult;
use crate::resource::write_version_entry;
use crate::writer::XmlFile;
use crate::{CONTAINER_TAG, EXPORT_USER, NODE_CREATED_AT, NODE_USER};

/// Write the `rsuite.node` metadata file for a browse container.
///
/// Lists every immediate child (nested containers and direct references)
/// by display name, carries the container's own id and fixed creation
/// metadata, and records a single `1.0` version entry under the container
/// tag name.
pub fn write_node_metadata<R: Rng>(
    dir: &Path,
    container_id: MoId,
    container_name: &str,
    child_names: &[String],
    corpus: &Corpus,
    rng: &mut R,
) -> DocResult<()> {
    let path = dir.join("rsuite.node");
    let mut xml = XmlFile::create(&path)?;

    xml.start("contentResource")?;

    xml.start("nestedIds")?;
    for name in child_names {
        xml.text_element("id", name)?;
    }
    xml.end("nestedIds")?;

    xml.start("systemMetadata")?;
    xml.text_element("createdate", NODE_CREATED_AT)?;
    xml.text_element("id", &container_id.to_string())?;
    xml.text_element("username", NODE_USER)?;
    xml.end("systemMetadata")?;

    xml.start("versions")?;
    write_version_entry(
        &mut xml,
        container_name,
        VersionSpec::initial(),
        CONTAINER_TAG,
        EXPORT_USER,
        corpus,
        rng,
    )?;
    xml.end("versions")?;

    xml.end("contentResource")?;
    xml.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn node_lists_children_and_container_id() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = Corpus::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let children = vec!["first child".to_owned(), "second".to_owned()];
        write_node_metadata(dir.path(), MoId::new(2000), "shelf", &children, &corpus, &mut rng)
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("rsuite.node")).unwrap();
        assert!(written.contains("<id>first child</id>"));
        assert!(written.contains("<id>second</id>"));
        assert!(written.contains("<id>2000</id>"));
        assert!(written.contains("<createdate>2016-09-27T16:30:04.490Z</createdate>"));
        assert!(written.contains("<username>system</username>"));
        assert!(written.contains("<localName>rs_ca</localName>"));
        assert!(written.contains("<revision>1.0</revision>"));
    }

    #[test]
    fn childless_node_has_empty_nested_ids() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = Corpus::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        write_node_metadata(dir.path(), MoId::new(4), "/", &[], &corpus, &mut rng).unwrap();

        let written = std::fs::read_to_string(dir.path().join("rsuite.node")).unwrap();
        assert_eq!(written.matches("<versionEntry>").count(), 1);
        assert!(!written.contains("<id>first"));
    }
}
