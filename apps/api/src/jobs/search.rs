//! Job search orchestration: fetch, filter, score, rank.
//!
//! Best-effort by contract: provider failures are logged and collapsed into an
//! empty result, never surfaced to the caller.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::jobs::provider::JobProvider;
use crate::jobs::region::Region;
use crate::matching::description::normalize_description;
use crate::matching::scoring::{score_tokens, Jitter};
use crate::matching::tokenizer::{tokenize, TokenSet};
use crate::matching::visa::is_visa_friendly;
use crate::models::job::{JobPosting, RawPosting};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 20;
/// Broad query used for the single retry in sparse regions.
pub const FALLBACK_QUERY: &str = "software engineer";

#[derive(Clone)]
pub struct JobSearch {
    provider: Arc<dyn JobProvider>,
    jitter: Arc<dyn Jitter>,
}

impl JobSearch {
    pub fn new(provider: Arc<dyn JobProvider>, jitter: Arc<dyn Jitter>) -> Self {
        Self { provider, jitter }
    }

    /// Returns postings for `query` in `region`, ranked by match score against
    /// `resume_text` (highest first).
    ///
    /// Sparse regions get one retry with `FALLBACK_QUERY` when the first
    /// search leaves no postings.
    pub async fn fetch_jobs(
        &self,
        query: &str,
        region: &Region,
        resume_text: &str,
        limit: u32,
    ) -> Vec<JobPosting> {
        let limit = limit.clamp(1, MAX_LIMIT);
        let resume_tokens = tokenize(resume_text);

        let jobs = self.search_once(query, region, &resume_tokens, limit).await;
        info!("Job search '{}' in {}: {} postings", query, region, jobs.len());

        if jobs.is_empty() && region.has_sparse_results() {
            let jobs = self
                .search_once(FALLBACK_QUERY, region, &resume_tokens, limit)
                .await;
            info!("Fallback search in {}: {} postings", region, jobs.len());
            return jobs;
        }

        jobs
    }

    async fn search_once(
        &self,
        query: &str,
        region: &Region,
        resume_tokens: &TokenSet,
        limit: u32,
    ) -> Vec<JobPosting> {
        let raw = match self.provider.search(region, query, limit).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Job search failed for '{}' in {}: {}", query, region, e);
                return Vec::new();
            }
        };

        let mut jobs: Vec<JobPosting> = raw
            .into_iter()
            .filter_map(|posting| self.build_posting(posting, region, resume_tokens))
            .collect();

        // Vec::sort_by is stable: equal scores keep provider order.
        jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        jobs
    }

    fn build_posting(
        &self,
        raw: RawPosting,
        region: &Region,
        resume_tokens: &TokenSet,
    ) -> Option<JobPosting> {
        let description = normalize_description(raw.description.as_deref().unwrap_or_default());

        if region.requires_visa_filter() && !is_visa_friendly(&description) {
            return None;
        }

        let match_score = score_tokens(resume_tokens, &tokenize(&description), self.jitter.as_ref());

        Some(JobPosting {
            id: Uuid::new_v4(),
            title: non_blank(raw.title.as_deref()).unwrap_or("Unknown").to_string(),
            company: raw.company_name().unwrap_or("Unknown").to_string(),
            location: raw.location_name().unwrap_or("Remote").to_string(),
            description,
            match_score,
            apply_url: raw.redirect_url.unwrap_or_default(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
