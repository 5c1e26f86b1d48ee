//! Résumé text extraction.
//!
//! The handler only sees `ResumeTextExtractor`; `PdfTextExtractor` is the production
//! backend and wraps `pdf-extract` over the uploaded bytes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded résumé is empty")]
    EmptyFile,

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),
}

/// Converts an uploaded résumé file into plain text.
///
/// Implementations are synchronous; callers run them on the blocking pool.
pub trait ResumeTextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extracts text from an in-memory PDF, all pages in document order.
pub struct PdfTextExtractor;

impl ResumeTextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyFile);
        }
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_is_rejected() {
        let err = PdfTextExtractor.extract(&[]).unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyFile));
    }

    #[test]
    fn test_non_pdf_bytes_fail_with_pdf_error() {
        let err = PdfTextExtractor
            .extract(b"plain text pretending to be a resume")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
        assert!(err.to_string().starts_with("Failed to extract text from PDF"));
    }
}
