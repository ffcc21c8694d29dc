use std::path::Path;

use rand::Rng;
use synex_corpus::Corpus;
use synex_types::{MoId, VersionSpec};

use crate::error::DocResult;
use crate::writer::XmlFile;
use crate::{COMMITTED_AT, EXPORT_USER};

/// Fixed access-control roles stamped on every resource file.
/// Not configurable; the importer only needs well-formed entries.
const ACL_ROLES: [(&str, &str); 3] = [
    ("RSuiteAdministrator", "admin"),
    ("RSuiteEditor", "edit,copy,delete"),
    ("*", "list,view,reuse"),
];

/// Write the `<id>.resource` metadata file for one object.
///
/// The file carries the fixed ACL block, system metadata (id + placeholder
/// user), and one `versionEntry` per collected version spec. An empty
/// `version_specs` slice is valid and produces an empty `versions` block.
pub fn write_resource_metadata<R: Rng>(
    dir: &Path,
    id: MoId,
    title: &str,
    tag_name: &str,
    version_specs: &[VersionSpec],
    corpus: &Corpus,
    rng: &mut R,
) -> DocResult<()> {
    let path = dir.join(format!("{id}.resource"));
    let mut xml = XmlFile::create(&path)?;

    xml.start("contentResource")?;

    xml.start("acl")?;
    for (role, permissions) in ACL_ROLES {
        xml.start_with("role", &[("name", role)])?;
        xml.text(permissions)?;
        xml.end("role")?;
    }
    xml.end("acl")?;

    xml.empty("aliases")?;

    xml.start("systemMetadata")?;
    xml.text_element("id", &id.to_string())?;
    xml.text_element("username", EXPORT_USER)?;
    xml.end("systemMetadata")?;

    xml.start("versions")?;
    for spec in version_specs {
        write_version_entry(&mut xml, title, *spec, tag_name, EXPORT_USER, corpus, rng)?;
    }
    xml.end("versions")?;

    xml.end("contentResource")?;
    xml.finish()
}

/// Write one `versionEntry` element.
///
/// The commit timestamp, entry type, lmd, and transaction id are constant
/// placeholders; only the note varies (1–4 sampled words).
pub(crate) fn write_version_entry<R: Rng>(
    xml: &mut XmlFile,
    title: &str,
    spec: VersionSpec,
    tag_name: &str,
    user: &str,
    corpus: &Corpus,
    rng: &mut R,
) -> DocResult<()> {
    xml.start("versionEntry")?;
    xml.text_element("displayName", title)?;
    xml.text_element("dtCommitted", COMMITTED_AT)?;
    xml.text_element("entryType", "2")?;
    xml.text_element("lmd", "")?;
    xml.text_element("localName", tag_name)?;
    xml.text_element("namespaceUri", "")?;
    xml.text_element("note", &corpus.sample_words(rng, 1, 4))?;
    xml.text_element("revision", &spec.to_string())?;
    xml.text_element("transactionId", "0")?;
    xml.text_element("userId", user)?;
    xml.end("versionEntry")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use synex_types::VersionSequence;

    use crate::TOPIC_TAG;

    fn corpus() -> Corpus {
        Corpus::embedded().unwrap()
    }

    #[test]
    fn resource_file_is_named_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        write_resource_metadata(
            dir.path(),
            MoId::new(1234),
            "a title",
            TOPIC_TAG,
            &[],
            &corpus(),
            &mut rng,
        )
        .unwrap();
        assert!(dir.path().join("1234.resource").is_file());
    }

    #[test]
    fn acl_roles_are_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        write_resource_metadata(
            dir.path(),
            MoId::new(1000),
            "t",
            TOPIC_TAG,
            &[],
            &corpus(),
            &mut rng,
        )
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("1000.resource")).unwrap();
        assert!(written.contains("<role name=\"RSuiteAdministrator\">admin</role>"));
        assert!(written.contains("<role name=\"RSuiteEditor\">edit,copy,delete</role>"));
        assert!(written.contains("<role name=\"*\">list,view,reuse</role>"));
        assert!(written.contains("<aliases/>"));
        assert!(written.contains("<username>fakeexportuser</username>"));
    }

    #[test]
    fn one_version_entry_per_spec() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let specs: Vec<VersionSpec> = VersionSequence::new().take(5).collect();
        write_resource_metadata(
            dir.path(),
            MoId::new(1000),
            "t",
            TOPIC_TAG,
            &specs,
            &corpus(),
            &mut rng,
        )
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("1000.resource")).unwrap();
        assert_eq!(written.matches("<versionEntry>").count(), 5);
        assert!(written.contains("<revision>1.0</revision>"));
        assert!(written.contains("<revision>2.1</revision>"));
        assert!(written.contains("<dtCommitted>2010-12-16T20:05:41.000Z</dtCommitted>"));
        assert!(written.contains("<transactionId>0</transactionId>"));
    }

    #[test]
    fn zero_versions_produces_empty_block() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        write_resource_metadata(
            dir.path(),
            MoId::new(1000),
            "t",
            TOPIC_TAG,
            &[],
            &corpus(),
            &mut rng,
        )
        .unwrap();

        let written = std::fs::read_to_string(dir.path().join("1000.resource")).unwrap();
        assert!(!written.contains("<versionEntry>"));
        assert!(written.contains("<versions>"));
    }
}
