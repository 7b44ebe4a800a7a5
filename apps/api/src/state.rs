use std::sync::Arc;

use crate::config::Config;
use crate::jobs::search::JobSearch;
use crate::optimizer::ResumeOptimizer;
use crate::resume::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// PDF text extraction. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Job provider plus scoring, ready to rank postings.
    pub jobs: JobSearch,
    /// Pluggable optimizer. Default: HeuristicOptimizer. Swap via OPTIMIZER_MODE.
    pub optimizer: Arc<dyn ResumeOptimizer>,
}
