use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Documents shorter than this (after trimming) are never accepted.
pub const MIN_RESUME_CHARS: usize = 200;
const MIN_RESUME_HITS: usize = 3;

const RESUME_TERMS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "work experience",
    "professional experience",
    "internship",
    "software",
    "engineer",
    "developer",
    "university",
    "bachelor",
    "master",
    "python",
    "java",
    "javascript",
    "react",
    "sql",
    "swift",
];

const NON_RESUME_TERMS: &[&str] = &[
    "boarding pass",
    "flight",
    "gate",
    "seat",
    "invoice",
    "receipt",
    "ticket",
    "payment",
    "tax",
    "bank",
    "statement",
];

// Whole words plus plural forms ("flights", "taxes"), so "aggregate" or
// "syntax" in a resume do not trip the filter.
static NON_RESUME_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    NON_RESUME_TERMS
        .iter()
        .map(|term| {
            let pattern = format!(r"\b{}(?:s|es)?\b", regex::escape(term));
            (*term, Regex::new(&pattern).expect("term pattern is valid"))
        })
        .collect()
});

/// Outcome of the resume heuristic, kept so rejections can say why.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeCheck {
    pub char_count: usize,
    pub resume_terms: Vec<&'static str>,
    pub non_resume_terms: Vec<&'static str>,
}

impl ResumeCheck {
    pub fn is_long_enough(&self) -> bool {
        self.char_count >= MIN_RESUME_CHARS
    }

    /// Coarse accept/reject: long enough, at least three resume terms, no
    /// non-resume terms. Meant to stop boarding passes and invoices, nothing finer.
    pub fn is_valid(&self) -> bool {
        self.is_long_enough()
            && self.resume_terms.len() >= MIN_RESUME_HITS
            && self.non_resume_terms.is_empty()
    }

    /// Human-readable reason for a rejection; `None` when the check passed.
    pub fn rejection_reason(&self) -> Option<String> {
        if !self.is_long_enough() {
            return Some(format!(
                "Document is too short to be a resume ({} characters of text, need at least {MIN_RESUME_CHARS})",
                self.char_count
            ));
        }
        if !self.non_resume_terms.is_empty() {
            return Some(format!(
                "Document looks like something other than a resume (found: {})",
                self.non_resume_terms.join(", ")
            ));
        }
        if self.resume_terms.len() < MIN_RESUME_HITS {
            return Some(
                "Document does not look like a resume: expected sections such as experience, education and skills"
                    .to_string(),
            );
        }
        None
    }
}

/// Scores extracted text against resume-indicative and non-resume keyword lists.
pub fn check_resume(text: &str) -> ResumeCheck {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();

    let resume_terms = RESUME_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .collect();

    let non_resume_terms = NON_RESUME_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(&lowered))
        .map(|(term, _)| *term)
        .collect();

    ResumeCheck {
        char_count: trimmed.chars().count(),
        resume_terms,
        non_resume_terms,
    }
}
