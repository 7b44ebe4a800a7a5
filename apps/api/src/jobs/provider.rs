//! Job-search provider. The only module that talks to the Adzuna search API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::jobs::region::Region;
use crate::models::job::RawPosting;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("job search credentials are not configured")]
    MissingCredentials,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("provider response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A source of raw job postings.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn search(
        &self,
        region: &Region,
        query: &str,
        limit: u32,
    ) -> Result<Vec<RawPosting>, JobSearchError>;
}

#[derive(Clone)]
struct Credentials {
    app_id: String,
    api_key: String,
}

/// Adzuna search client. Built without credentials, every search fails with
/// `MissingCredentials` and the caller degrades to no results.
#[derive(Clone)]
pub struct AdzunaClient {
    client: Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl AdzunaClient {
    pub fn from_config(config: &Config) -> Result<Self, JobSearchError> {
        let credentials = match (&config.adzuna_app_id, &config.adzuna_api_key) {
            (Some(app_id), Some(api_key)) => Some(Credentials {
                app_id: app_id.clone(),
                api_key: api_key.clone(),
            }),
            _ => None,
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.job_search_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.adzuna_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    fn search_url(&self, region: &Region) -> String {
        format!("{}/v1/api/jobs/{}/search/1", self.base_url, region)
    }
}

#[async_trait]
impl JobProvider for AdzunaClient {
    async fn search(
        &self,
        region: &Region,
        query: &str,
        limit: u32,
    ) -> Result<Vec<RawPosting>, JobSearchError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(JobSearchError::MissingCredentials)?;

        let limit = limit.to_string();
        let response = self
            .client
            .get(self.search_url(region))
            .query(&[
                ("app_id", credentials.app_id.as_str()),
                ("app_key", credentials.api_key.as_str()),
                ("what", query),
                ("results_per_page", limit.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        let postings = parse_results(value);

        debug!(
            "Adzuna returned {} postings for '{}' in {}",
            postings.len(),
            query,
            region
        );
        Ok(postings)
    }
}

/// Decodes each entry of `results` on its own so one malformed posting does
/// not discard the batch.
fn parse_results(body: Value) -> Vec<RawPosting> {
    let results = match body.get("results").and_then(Value::as_array) {
        Some(results) => results.clone(),
        None => return Vec::new(),
    };

    results
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value::<RawPosting>(entry) {
            Ok(posting) => Some(posting),
            Err(e) => {
                warn!("Skipping malformed posting #{idx}: {e}");
                None
            }
        })
        .collect()
}
