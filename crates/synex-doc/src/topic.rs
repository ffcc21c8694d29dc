use std::path::Path;

use rand::Rng;
use synex_corpus::Corpus;
use synex_types::MoId;

use crate::error::DocResult;
use crate::writer::XmlFile;
use crate::{DITA_ARCH_NS, RSUITE_NS};

/// DITA domains attribute carried by every generated topic.
const TOPIC_DOMAINS: &str = "(topic hi-d) (topic ut-d) (topic indexing-d) \
(topic hazard-d) (topic abbrev-d) (topic pr-d) (topic sw-d) (topic ui-d)";

/// Write the content document for one revision of a flat object.
///
/// Emits a DITA topic whose root carries the object's id and whose body is
/// 1–9 paragraphs of 7–30 sampled words each. The document has no semantic
/// structure beyond title + paragraphs; it exists to exercise an importer's
/// parser at realistic document sizes.
pub fn write_content_document<R: Rng>(
    path: &Path,
    id: MoId,
    title: &str,
    corpus: &Corpus,
    rng: &mut R,
) -> DocResult<()> {
    let topic_id = format!("topic-{id}");
    let rsuite_id = id.to_string();

    let mut xml = XmlFile::create(path)?;
    xml.start_with(
        "topic",
        &[
            ("xmlns:r", RSUITE_NS),
            ("xmlns:ditaarch", DITA_ARCH_NS),
            ("id", &topic_id),
            ("class", "- topic/topic "),
            ("r:rsuiteId", &rsuite_id),
            ("ditaarch:DITAArchVersion", "1.2"),
            ("domains", TOPIC_DOMAINS),
        ],
    )?;

    xml.start_with("title", &[("class", "- topic/title ")])?;
    xml.text(title)?;
    xml.end("title")?;

    xml.start_with("body", &[("class", "- topic/body ")])?;
    let paragraphs = rng.gen_range(1..=9);
    for _ in 0..paragraphs {
        xml.start_with("p", &[("class", "- topic/p ")])?;
        xml.text(&corpus.sample_words(rng, 7, 30))?;
        xml.end("p")?;
    }
    xml.end("body")?;

    xml.end("topic")?;
    xml.finish()
}
