use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::optimizer::OptimizeResult;
use crate::resume::upload::read_resume;
use crate::state::AppState;

const UPLOADED_STATUS: &str = "uploaded successfully";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub size: usize,
    pub status: &'static str,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

/// POST /resume/upload
/// Validates the uploaded PDF and returns its extracted text.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let upload = read_resume(&state, &mut multipart).await?;

    Ok(Json(UploadResponse {
        filename: upload.filename,
        size: upload.size,
        status: UPLOADED_STATUS,
        text: upload.text,
    }))
}

/// POST /resume/optimize
/// Suggests missing skills, stronger bullets, and ATS keywords for one job.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(body): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResult>, AppError> {
    if body.resume_text.trim().is_empty() || body.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing resume or job description".to_string(),
        ));
    }

    let result = state
        .optimizer
        .optimize(&body.resume_text, &body.job_description)
        .await;
    info!(
        "Optimized resume via {}: {} missing skills, {} bullets",
        result.backend,
        result.missing_skills.len(),
        result.improved_bullets.len()
    );

    Ok(Json(result))
}
