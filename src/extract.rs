//! Plain-text extraction from source documents.
//!
//! The pipeline only depends on the [`TextExtractor`] capability: given a
//! path, return its text or fail. [`FileExtractor`] is the concrete
//! implementation used by the CLI and picks a format from the file
//! extension:
//!
//! | Extension | Format |
//! |-----------|--------|
//! | `.docx` | OOXML word-processing document |
//! | `.pdf` | PDF |
//! | `.txt`, `.md`, `.markdown` | UTF-8 text |
//!
//! DOCX text is raw paragraph text: runs are concatenated, each paragraph
//! ends with a blank line, tabs and line breaks inside runs are kept.

use quick_xml::events::Event;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum decompressed bytes to read from a single ZIP entry (zip-bomb protection).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("DOCX extraction failed: {0}")]
    Ooxml(String),
    #[error("text file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Source of document text for the pipeline.
pub trait TextExtractor {
    fn extract_text(&self, source: &Path) -> Result<String, ExtractError>;
}

/// Document formats understood by [`FileExtractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Docx,
    Pdf,
    PlainText,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, ExtractError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            "txt" | "md" | "markdown" => Ok(DocumentFormat::PlainText),
            "" => Err(ExtractError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(ExtractError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Reads documents from the filesystem, dispatching on extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtractor;

impl TextExtractor for FileExtractor {
    fn extract_text(&self, source: &Path) -> Result<String, ExtractError> {
        let format = DocumentFormat::from_path(source)?;
        let bytes = std::fs::read(source).map_err(|e| ExtractError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(path = %source.display(), bytes = bytes.len(), ?format, "read source document");
        extract_bytes(&bytes, format)
    }
}

/// Returns the same text for every path.
#[derive(Debug, Clone, Default)]
pub struct StaticText(pub String);

impl TextExtractor for StaticText {
    fn extract_text(&self, _source: &Path) -> Result<String, ExtractError> {
        Ok(self.0.clone())
    }
}

/// Extract text from in-memory document bytes.
pub fn extract_bytes(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    match format {
        DocumentFormat::Docx => extract_docx(bytes),
        DocumentFormat::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        }
        DocumentFormat::PlainText => Ok(String::from_utf8(bytes.to_vec())?),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).map_err(ooxml)?;
    let part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| ooxml(format!("{}: {}", DOCX_BODY_PART, e)))?;

    // Read one byte past the limit so an oversized part is detected, not truncated.
    let mut xml = Vec::new();
    part.take(MAX_XML_ENTRY_BYTES + 1)
        .read_to_end(&mut xml)
        .map_err(ooxml)?;
    if xml.len() as u64 > MAX_XML_ENTRY_BYTES {
        return Err(ooxml(format!(
            "{} is larger than {} bytes",
            DOCX_BODY_PART, MAX_XML_ENTRY_BYTES
        )));
    }
    docx_body_text(&xml)
}

fn ooxml(e: impl std::fmt::Display) -> ExtractError {
    ExtractError::Ooxml(e.to_string())
}

/// Walk `word/document.xml` and collect run text.
///
/// Only `w:t` content counts as text; `w:tab` and `w:br`/`w:cr` count only
/// inside a run (`w:r`), so tab-stop definitions in paragraph properties
/// are ignored. Runs nest through text boxes (`w:txbxContent`), so run
/// membership is a depth, not a flag.
fn docx_body_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = quick_xml::Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut out = String::new();
    let mut run_depth = 0usize;
    let mut in_text = false;
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(ooxml)?;
        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => run_depth += 1,
                b"t" => in_text = run_depth > 0,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if run_depth > 0 => out.push('\t'),
                b"br" | b"cr" if run_depth > 0 => out.push('\n'),
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Event::Text(te) if in_text => {
                let text = te
                    .unescape()
                    .map_err(ooxml)?;
                out.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    Ok(out)
}
