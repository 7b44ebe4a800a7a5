/// Role and skill keywords in priority order. The first one present wins,
/// regardless of where it appears in the text.
const QUERY_KEYWORDS: &[&str] = &[
    "ios",
    "swift",
    "frontend",
    "react",
    "backend",
    "python",
    "java",
    "full stack",
    "software engineer",
];

pub const DEFAULT_QUERY: &str = "software engineer";

/// Picks the job-search query for a resume.
pub fn extract_keyword(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    QUERY_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
        .unwrap_or(DEFAULT_QUERY)
}
