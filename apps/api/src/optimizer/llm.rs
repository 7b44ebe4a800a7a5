use async_trait::async_trait;
use tracing::warn;

use super::prompts::{optimizer_system_prompt, optimizer_user_prompt};
use super::{OptimizeResult, ResumeOptimizer};
use crate::llm_client::{LlmClient, LlmError};
use crate::matching::description::truncate_chars;

pub const BACKEND: &str = "llm";

/// Per-field input cap, in characters, to bound token usage.
pub const MAX_INPUT_CHARS: usize = 4000;

pub const FORMAT_FALLBACK_BULLET: &str = "AI response formatting issue. Please retry.";
pub const UNAVAILABLE_FALLBACK_BULLET: &str =
    "AI optimization is temporarily unavailable. Please retry.";

/// Asks the chat model for suggestions.
pub struct LlmOptimizer {
    llm: LlmClient,
}

impl LlmOptimizer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeOptimizer for LlmOptimizer {
    async fn optimize(&self, resume_text: &str, job_description: &str) -> OptimizeResult {
        let prompt = optimizer_user_prompt(
            truncate_chars(resume_text, MAX_INPUT_CHARS),
            truncate_chars(job_description, MAX_INPUT_CHARS),
        );
        let system = optimizer_system_prompt();

        match self.llm.call_json::<OptimizeResult>(&prompt, &system).await {
            Ok(mut result) => {
                result.backend = BACKEND.to_string();
                result
            }
            Err(e @ (LlmError::Parse(_) | LlmError::NoJsonObject | LlmError::EmptyContent)) => {
                warn!("LLM optimizer reply was not usable JSON: {e}");
                fallback(FORMAT_FALLBACK_BULLET)
            }
            Err(e) => {
                warn!("LLM optimizer call failed: {e}");
                fallback(UNAVAILABLE_FALLBACK_BULLET)
            }
        }
    }
}

fn fallback(bullet: &str) -> OptimizeResult {
    OptimizeResult {
        missing_skills: Vec::new(),
        improved_bullets: vec![bullet.to_string()],
        ats_keywords: Vec::new(),
        backend: BACKEND.to_string(),
    }
}
