//! PDF text extraction. All parsing is delegated to `pdf-extract`; this module
//! only guards the call and normalises its failures.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("file is not a PDF")]
    NotPdf,

    #[error("PDF could not be parsed: {0}")]
    Corrupted(String),

    #[error("PDF extraction crashed")]
    Crashed,
}

/// Turns an uploaded document into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractError::NotPdf);
        }
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Corrupted(e.to_string()))
    }
}

/// Runs the extractor on the blocking pool. A panic inside the PDF parser is
/// reported as `Crashed` instead of taking the worker down.
pub async fn extract_text(
    extractor: Arc<dyn TextExtractor>,
    bytes: Vec<u8>,
) -> Result<String, ExtractError> {
    match tokio::task::spawn_blocking(move || extractor.extract(&bytes)).await {
        Ok(result) => result,
        Err(e) => {
            warn!("PDF extraction task failed: {e}");
            Err(ExtractError::Crashed)
        }
    }
}
