use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::region::{supported_regions, Region};
use crate::jobs::search::DEFAULT_LIMIT;
use crate::models::job::JobPosting;
use crate::resume::keywords::extract_keyword;
use crate::resume::upload::read_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsQuery {
    pub country: Option<String>,
    pub limit: Option<u32>,
}

/// POST /jobs/from-resume?country=in&limit=10
/// Ranks live postings against the uploaded resume. Provider trouble yields `[]`.
pub async fn handle_jobs_from_resume(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
    mut multipart: Multipart,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let region = match params.country.as_deref() {
        Some(code) => code.parse::<Region>().map_err(|e| {
            AppError::Validation(format!(
                "{e}; supported regions: {}",
                supported_regions().join(", ")
            ))
        })?,
        None => Region::default(),
    };

    let upload = read_resume(&state, &mut multipart).await?;
    let query = extract_keyword(&upload.text);
    info!("Resume '{}' mapped to query '{}'", upload.filename, query);

    let jobs = state
        .jobs
        .fetch_jobs(
            query,
            &region,
            &upload.text,
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .await;

    Ok(Json(jobs))
}
