use thiserror::Error;

/// Errors raised while turning a stored document into plain text
#[derive(Error, Debug)]
pub enum TextError {
    #[error("PDF extraction failed: {0}")]
    ExtractionError(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("Password-protected PDF")]
    PasswordProtected,

    #[error("Scanned PDF detected - OCR required")]
    ScannedPdfNeedsOcr,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
