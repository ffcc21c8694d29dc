use std::path::Path;

use synex_types::MoId;

use crate::error::DocResult;
use crate::writer::XmlFile;
use crate::{DITA_ARCH_NS, RSUITE_NS};

/// One reference entry in a container document: a freshly minted reference
/// id pointing at an existing flat object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerRef {
    /// Id of the reference object itself.
    pub ref_id: MoId,
    /// Id of the flat object the reference points at.
    pub target_id: MoId,
}

/// Write the container's document file (`<container-id>.resource`).
///
/// The document is an `rs_ca_map` wrapper holding one empty `moref` element
/// per reference. Reference metadata files are written separately by the
/// caller via [`crate::write_resource_metadata`].
pub fn write_container_document(
    dir: &Path,
    container_id: MoId,
    refs: &[ContainerRef],
) -> DocResult<()> {
    let path = dir.join(format!("{container_id}.resource"));
    let container_rsuite_id = container_id.to_string();

    let mut xml = XmlFile::create(&path)?;
    xml.start_with(
        "rs_ca_map",
        &[
            ("xmlns:ditaarch", DITA_ARCH_NS),
            ("class", "- map/map rs_ca_map/rs_ca_map "),
            ("domains", "(map rs_ca_map) (map rs_ca-d) (props rs_ca-d-att)"),
            ("ditaarch:DITAArchVersion", "1.2"),
        ],
    )?;
    xml.start_with(
        "rs_ca",
        &[
            ("xmlns:r", RSUITE_NS),
            ("type", "ca"),
            ("class", "+ map/topicref rs_ca-d/rs_ca "),
            ("r:rsuiteId", &container_rsuite_id),
        ],
    )?;

    for r in refs {
        xml.empty_with(
            "moref",
            &[
                ("r:rsuiteId", r.ref_id.to_string().as_str()),
                ("class", "+ map/topicref rs_ca-d/rs_moref "),
                ("href", r.target_id.to_string().as_str()),
            ],
        )?;
    }

    xml.end("rs_ca")?;
    xml.end("rs_ca_map")?;
    xml.finish()
}
