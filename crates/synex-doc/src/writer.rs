use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{DocError, DocResult};

/// Streaming XML writer over a buffered file, with path-carrying errors.
///
/// A thin convenience layer over `quick_xml::Writer` so the emitting code
/// reads like the document structure it produces. The XML declaration is
/// written on creation; [`XmlFile::finish`] flushes and closes the file.
pub(crate) struct XmlFile {
    path: PathBuf,
    writer: Writer<BufWriter<File>>,
}

impl std::fmt::Debug for XmlFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XmlFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl XmlFile {
    /// Create the file at `path` and write the XML declaration.
    pub(crate) fn create(path: &Path) -> DocResult<Self> {
        let file = File::create(path).map_err(|source| DocError::Create {
            path: path.to_owned(),
            source,
        })?;
        let mut this = Self {
            path: path.to_owned(),
            writer: Writer::new(BufWriter::new(file)),
        };
        this.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(this)
    }

    fn event(&mut self, event: Event<'_>) -> DocResult<()> {
        self.writer
            .write_event(event)
            .map_err(|source| DocError::Write {
                path: self.path.clone(),
                source: source.into(),
            })
    }

    /// Open a start tag with no attributes.
    pub(crate) fn start(&mut self, name: &str) -> DocResult<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    /// Open a start tag carrying the given attributes.
    pub(crate) fn start_with(&mut self, name: &str, attrs: &[(&str, &str)]) -> DocResult<()> {
        let mut elem = BytesStart::new(name);
        for (key, value) in attrs {
            elem.push_attribute((*key, *value));
        }
        self.event(Event::Start(elem))
    }

    /// Write a self-closing element with no attributes.
    pub(crate) fn empty(&mut self, name: &str) -> DocResult<()> {
        self.event(Event::Empty(BytesStart::new(name)))
    }

    /// Write a self-closing element carrying the given attributes.
    pub(crate) fn empty_with(&mut self, name: &str, attrs: &[(&str, &str)]) -> DocResult<()> {
        let mut elem = BytesStart::new(name);
        for (key, value) in attrs {
            elem.push_attribute((*key, *value));
        }
        self.event(Event::Empty(elem))
    }

    /// Write character content. Markup characters are escaped.
    pub(crate) fn text(&mut self, content: &str) -> DocResult<()> {
        self.event(Event::Text(BytesText::new(content)))
    }

    /// Close the named element.
    pub(crate) fn end(&mut self, name: &str) -> DocResult<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// Write `<name>content</name>` in one call.
    pub(crate) fn text_element(&mut self, name: &str, content: &str) -> DocResult<()> {
        self.start(name)?;
        self.text(content)?;
        self.end(name)
    }

    /// Flush buffered output and close the file.
    pub(crate) fn finish(self) -> DocResult<()> {
        let Self { path, writer } = self;
        writer
            .into_inner()
            .flush()
            .map_err(|source| DocError::Flush { path, source })
    }
}
