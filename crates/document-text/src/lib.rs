//! Plain text from stored resolutions.
//!
//! The extraction engine only reads text. This crate produces that text from
//! the files a resolution is published as: PDF with a text layer, HTML, or
//! text already extracted elsewhere.
//!
//! # Example
//! ```no_run
//! use document_text::{TextError, TextExtractor};
//!
//! fn load(path: &str) -> Result<(), TextError> {
//!     let extracted = TextExtractor::from_path(path)?;
//!     println!("{} pages, {} bytes", extracted.pages.len(), extracted.text.len());
//!     let document = extracted.into_raw_document(path);
//!     println!("{}", document.source_locator);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod html;
pub mod pdf;

pub use error::TextError;
pub use html::html_to_text;
pub use pdf::PdfReader;

use serde::{Deserialize, Serialize};
use shared_types::RawDocument;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Pdf,
    Html,
    Text,
}

impl SourceKind {
    /// Kind implied by a file extension; anything unknown is plain text
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => SourceKind::Pdf,
            Some("html") | Some("htm") => SourceKind::Html,
            _ => SourceKind::Text,
        }
    }
}

/// Text of one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    pub kind: SourceKind,
    /// Whole document, pages separated by a line break
    pub text: String,
    /// Page texts for PDFs; a single entry otherwise
    pub pages: Vec<String>,
}

impl ExtractedText {
    fn single_page(kind: SourceKind, text: String) -> Self {
        Self {
            kind,
            pages: vec![text.clone()],
            text,
        }
    }

    /// Engine input for this text, located at `source_locator`
    pub fn into_raw_document(self, source_locator: impl Into<String>) -> RawDocument {
        RawDocument::new(self.text, source_locator)
    }
}

pub struct TextExtractor;

impl TextExtractor {
    /// Read `path` and extract its text according to its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ExtractedText, TextError> {
        let path = path.as_ref();
        let kind = SourceKind::from_path(path);
        tracing::debug!(path = %path.display(), ?kind, "Extracting text");

        let extracted = match kind {
            SourceKind::Pdf => Self::from_pdf_bytes(&fs::read(path)?)?,
            SourceKind::Html => Self::from_html(&fs::read_to_string(path)?),
            SourceKind::Text => ExtractedText::single_page(kind, fs::read_to_string(path)?),
        };

        tracing::debug!(
            path = %path.display(),
            pages = extracted.pages.len(),
            chars = extracted.text.chars().count(),
            "Text extracted"
        );
        Ok(extracted)
    }

    pub fn from_pdf_bytes(pdf_bytes: &[u8]) -> Result<ExtractedText, TextError> {
        let pages = PdfReader::extract_pages(pdf_bytes)?;
        Ok(ExtractedText {
            kind: SourceKind::Pdf,
            text: pages.join("\n"),
            pages,
        })
    }

    pub fn from_html(html: &str) -> ExtractedText {
        ExtractedText::single_page(SourceKind::Html, html_to_text(html))
    }
}
