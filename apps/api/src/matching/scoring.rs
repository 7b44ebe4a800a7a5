//! Match scoring: bounded lexical similarity between a resume and a job description.
//!
//! The overlap of the two token sets is mapped onto a fixed step function and a
//! small jitter is added so postings with identical overlap do not all show the
//! same number. The jitter source is injectable: production uses `RandomJitter`,
//! tests and `MATCH_SCORE_JITTER=false` use `FixedJitter`.

use rand::Rng;

use crate::matching::tokenizer::TokenSet;

pub const MAX_SCORE: u32 = 100;
/// Score used when either side has no significant words. Returned as-is, without jitter.
pub const DEGENERATE_BASELINE: u32 = 40;
/// Inclusive upper bound of the jitter added to step-function scores.
pub const MAX_JITTER: u32 = 10;

/// (minimum overlap, base score), checked top-down.
const OVERLAP_TIERS: &[(usize, u32)] = &[(15, 85), (10, 70), (6, 55), (3, 40)];
const LOWEST_TIER_SCORE: u32 = 25;

/// Source of the per-score jitter.
pub trait Jitter: Send + Sync {
    /// Returns a value in `0..=max`.
    fn sample(&self, max: u32) -> u32;
}

/// Uniform jitter from the thread-local generator.
pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn sample(&self, max: u32) -> u32 {
        rand::rng().random_range(0..=max)
    }
}

/// Constant jitter, capped at `max`. `FixedJitter(0)` makes scoring reproducible.
pub struct FixedJitter(pub u32);

impl Jitter for FixedJitter {
    fn sample(&self, max: u32) -> u32 {
        self.0.min(max)
    }
}

/// Base score for an overlap count, before jitter.
pub fn base_score(overlap: usize) -> u32 {
    OVERLAP_TIERS
        .iter()
        .find(|(min_overlap, _)| overlap >= *min_overlap)
        .map(|(_, score)| *score)
        .unwrap_or(LOWEST_TIER_SCORE)
}

/// Scores a tokenized resume against a tokenized job description, in `0..=100`.
/// The job search tokenizes the resume once per request, not once per posting.
pub fn score_tokens(resume: &TokenSet, job: &TokenSet, jitter: &dyn Jitter) -> u32 {
    if resume.is_empty() || job.is_empty() {
        return DEGENERATE_BASELINE;
    }

    let base = base_score(resume.intersection(job).count());
    (base + jitter.sample(MAX_JITTER)).min(MAX_SCORE)
}
