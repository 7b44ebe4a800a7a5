use async_trait::async_trait;

use super::{OptimizeResult, ResumeOptimizer};

pub const BACKEND: &str = "static";

const KNOWN_SKILLS: &[&str] = &[
    "python",
    "java",
    "react",
    "swift",
    "aws",
    "docker",
    "kubernetes",
    "sql",
    "javascript",
    "typescript",
    "ci/cd",
    "git",
    "rest",
    "api",
    "microservices",
];

const DEFAULT_MISSING_SKILLS: &[&str] = &["Leadership", "System Design"];

/// Bullet offered when the resume mentions the given skill.
const SKILL_BULLETS: &[(&str, &str)] = &[
    (
        "react",
        "Developed high-performance React applications with reusable components.",
    ),
    (
        "python",
        "Built scalable backend services using Python and REST APIs.",
    ),
];

const DEFAULT_BULLETS: &[&str] = &[
    "Built scalable applications following best coding practices.",
    "Collaborated with teams to deliver high-quality features.",
];

const GENERIC_ATS_KEYWORDS: &[&str] = &["Agile", "APIs", "Cloud", "Engineering"];

const MAX_MISSING_SKILLS: usize = 5;
const MAX_BULLETS: usize = 5;
const MAX_ATS_KEYWORDS: usize = 6;
const ATS_SKILLS_FROM_GAPS: usize = 3;

/// Keyword rules over a fixed skill list. Fast and deterministic.
pub struct HeuristicOptimizer;

#[async_trait]
impl ResumeOptimizer for HeuristicOptimizer {
    async fn optimize(&self, resume_text: &str, job_description: &str) -> OptimizeResult {
        suggest(resume_text, job_description)
    }
}

pub fn suggest(resume_text: &str, job_description: &str) -> OptimizeResult {
    let resume = resume_text.to_lowercase();
    let job = job_description.to_lowercase();

    let mut missing_skills: Vec<String> = KNOWN_SKILLS
        .iter()
        .filter(|skill| job.contains(*skill) && !resume.contains(*skill))
        .map(|skill| skill.to_uppercase())
        .collect();
    if missing_skills.is_empty() {
        missing_skills = owned(DEFAULT_MISSING_SKILLS);
    }
    missing_skills.truncate(MAX_MISSING_SKILLS);

    let mut improved_bullets: Vec<String> = SKILL_BULLETS
        .iter()
        .filter(|(skill, _)| resume.contains(skill))
        .map(|(_, bullet)| bullet.to_string())
        .collect();
    if improved_bullets.is_empty() {
        improved_bullets = owned(DEFAULT_BULLETS);
    }
    improved_bullets.truncate(MAX_BULLETS);

    let mut ats_keywords: Vec<String> = Vec::new();
    let candidates = missing_skills
        .iter()
        .take(ATS_SKILLS_FROM_GAPS)
        .map(String::as_str)
        .chain(GENERIC_ATS_KEYWORDS.iter().copied());
    for keyword in candidates {
        if !ats_keywords.iter().any(|k| k == keyword) {
            ats_keywords.push(keyword.to_string());
        }
    }
    ats_keywords.truncate(MAX_ATS_KEYWORDS);

    OptimizeResult {
        missing_skills,
        improved_bullets,
        ats_keywords,
        backend: BACKEND.to_string(),
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
