use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Lower-cased significant words of a text. Order-irrelevant, duplicates collapsed.
pub type TokenSet = HashSet<String>;

/// Tokens this short carry no signal for matching.
const MIN_TOKEN_CHARS: usize = 3;

pub const STOPWORDS: &[&str] = &[
    "the", "and", "to", "a", "of", "in", "for", "with", "on", "at", "by", "an", "be", "is", "are",
    "as", "from", "or",
];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Splits free text into its set of significant words.
///
/// Empty or non-alphanumeric input yields an empty set.
pub fn tokenize(text: &str) -> TokenSet {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|w| !STOPWORDS.contains(w))
        .map(str::to_string)
        .collect()
}
