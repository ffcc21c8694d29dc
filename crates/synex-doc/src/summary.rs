use std::path::Path;

use synex_types::MoId;

use crate::error::DocResult;
use crate::writer::XmlFile;

/// Write the final `ids.xml` summary artifact.
///
/// Records the next unallocated id so a follow-up run (or the importer)
/// knows where the id sequence left off. Written only after both
/// generators have completed successfully.
pub fn write_id_summary(outdir: &Path, next_id: MoId) -> DocResult<()> {
    let path = outdir.join("ids.xml");
    let mut xml = XmlFile::create(&path)?;
    xml.text_element("ids", &next_id.to_string())?;
    xml.finish()
}
