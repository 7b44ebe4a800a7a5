//! Resume optimization: pluggable, trait-based suggestion engine that compares
//! a resume against one job description.
//!
//! Default: `HeuristicOptimizer` (pure-Rust, deterministic, no network).
//! `LlmOptimizer` delegates the analysis to the chat model.
//!
//! `AppState` holds an `Arc<dyn ResumeOptimizer>`, chosen at startup via `OPTIMIZER_MODE`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod heuristic;
pub mod llm;
pub mod prompts;

pub use heuristic::HeuristicOptimizer;
pub use llm::LlmOptimizer;

/// Suggestions returned to the caller. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResult {
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub improved_bullets: Vec<String>,
    #[serde(default)]
    pub ats_keywords: Vec<String>,
    /// "static" | "llm"
    #[serde(default)]
    pub backend: String,
}

/// Swap backends without touching the handler. Implementations never fail:
/// upstream problems turn into a fallback result.
#[async_trait]
pub trait ResumeOptimizer: Send + Sync {
    async fn optimize(&self, resume_text: &str, job_description: &str) -> OptimizeResult;
}
