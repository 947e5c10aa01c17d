//! Direct text extraction from PDF bytes.
//!
//! Only the text layer is read. A PDF whose text layer is nearly empty is a
//! scan and is reported as such; running OCR on it is the caller's business.

use crate::error::TextError;
use pdf_extract::extract_text_from_mem;

/// Fewer trimmed characters than this means the PDF is a scan
pub const MIN_DIRECT_TEXT_CHARS: usize = 100;

pub struct PdfReader;

impl PdfReader {
    /// Extract the text of every non-blank page, in order
    pub fn extract_pages(pdf_bytes: &[u8]) -> Result<Vec<String>, TextError> {
        let raw_text = extract_text_from_mem(pdf_bytes).map_err(|e| {
            let error_msg = e.to_string().to_lowercase();
            if error_msg.contains("encrypted") || error_msg.contains("password") {
                TextError::PasswordProtected
            } else if error_msg.contains("invalid")
                || error_msg.contains("malformed")
                || error_msg.contains("corrupt")
            {
                TextError::InvalidPdf(e.to_string())
            } else {
                TextError::ExtractionError(e.to_string())
            }
        })?;

        if raw_text.trim().chars().count() < MIN_DIRECT_TEXT_CHARS {
            return Err(TextError::ScannedPdfNeedsOcr);
        }

        let pages = split_pages(&raw_text);
        if pages.is_empty() {
            return Err(TextError::ExtractionError(
                "No pages could be extracted from PDF".to_string(),
            ));
        }
        Ok(pages)
    }
}

/// Split on form feeds, dropping blank pages
pub(crate) fn split_pages(text: &str) -> Vec<String> {
    text.split('\x0C')
        .filter(|page| !page.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bytes_are_rejected() {
        // not a PDF at all; the exact variant depends on pdf-extract's message
        let result = PdfReader::extract_pages(b"plain bytes, no PDF header");
        assert!(result.is_err());
    }

    #[test]
    fn test_split_pages_on_form_feed() {
        let pages = split_pages("Página 1\x0CPágina 2\x0C  \n\x0CPágina 3");
        assert_eq!(pages, vec!["Página 1", "Página 2", "Página 3"]);
    }

    #[test]
    fn test_split_single_page() {
        let pages = split_pages("RESOLUCIÓN\nVISTO\nCONSIDERANDO");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines().count(), 3);
    }

    #[test]
    fn test_split_blank_text() {
        assert!(split_pages(" \n\x0C\n").is_empty());
    }
}
