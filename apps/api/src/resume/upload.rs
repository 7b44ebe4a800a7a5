//! Upload intake shared by every endpoint that takes a resume file:
//! multipart parsing, type/size checks, text extraction, and the resume heuristic.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::resume::extract::{extract_text, ExtractError};
use crate::resume::validity::check_resume;
use crate::state::AppState;

pub const FILE_FIELD: &str = "file";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Headroom on top of the file limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Validated resume text together with the file it came from.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub size: usize,
    pub text: String,
}

/// Pulls the `file` field out of a multipart body.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(UploadedFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{FILE_FIELD}'"
    )))
}

/// Type and size checks that do not need to parse the file.
pub fn validate_file(file: &UploadedFile, max_bytes: usize) -> Result<(), AppError> {
    let has_pdf_extension = file.filename.to_lowercase().ends_with(".pdf");
    let has_pdf_type = file
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.eq_ignore_ascii_case(PDF_CONTENT_TYPE));

    if !has_pdf_extension && !has_pdf_type {
        return Err(AppError::UnsupportedMediaType(format!(
            "Only PDF resumes are supported (got '{}')",
            file.filename
        )));
    }

    if file.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    if file.bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {} bytes; the limit is {} bytes",
            file.bytes.len(),
            max_bytes
        )));
    }

    Ok(())
}

/// Full intake: validate, extract, and reject anything that does not look like a resume.
pub async fn read_resume(
    state: &AppState,
    multipart: &mut Multipart,
) -> Result<ResumeUpload, AppError> {
    let file = read_file_field(multipart).await?;
    validate_file(&file, state.config.max_upload_bytes)?;

    let UploadedFile {
        filename, bytes, ..
    } = file;
    let size = bytes.len();

    let text = extract_text(state.extractor.clone(), bytes)
        .await
        .map_err(|e| {
            warn!("Rejecting '{}': {}", filename, e);
            match e {
                ExtractError::NotPdf => {
                    AppError::UnprocessableEntity("File is not a valid PDF".to_string())
                }
                ExtractError::Corrupted(_) | ExtractError::Crashed => {
                    AppError::UnprocessableEntity("Invalid or corrupted PDF file".to_string())
                }
            }
        })?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No readable text found in the PDF (scanned documents are not supported)".to_string(),
        ));
    }

    let check = check_resume(&text);
    if !check.is_valid() {
        info!(
            "Rejecting '{}' as non-resume: {} resume terms, non-resume terms {:?}",
            filename,
            check.resume_terms.len(),
            check.non_resume_terms
        );
        let reason = check
            .rejection_reason()
            .unwrap_or_else(|| "Document does not look like a resume".to_string());
        return Err(AppError::UnprocessableEntity(reason));
    }

    info!("Accepted resume '{}' ({} bytes, {} chars)", filename, size, check.char_count);
    Ok(ResumeUpload {
        filename,
        size,
        text,
    })
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
