/// Upper bound, in characters, of a normalized job description.
pub const MAX_DESCRIPTION_CHARS: usize = 2000;
pub const TRUNCATION_MARKER: &str = "...";

/// Collapses whitespace runs to single spaces, trims, and bounds the length.
///
/// Truncated output keeps the first `MAX_DESCRIPTION_CHARS - 3` characters and
/// ends with `TRUNCATION_MARKER`, so it never exceeds the bound.
pub fn normalize_description(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= MAX_DESCRIPTION_CHARS {
        return collapsed;
    }

    let keep = MAX_DESCRIPTION_CHARS - TRUNCATION_MARKER.chars().count();
    let mut truncated = truncate_chars(&collapsed, keep).trim_end().to_string();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Returns at most `max_chars` characters of `text`, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            normalize_description("  Build\n\n  APIs\tin   Rust  "),
            "Build APIs in Rust"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_description(""), "");
        assert_eq!(normalize_description(" \n\t "), "");
    }

    #[test]
    fn test_truncates_with_marker() {
        let long = "word ".repeat(1000);
        let normalized = normalize_description(&long);
        assert!(normalized.chars().count() <= MAX_DESCRIPTION_CHARS);
        assert!(normalized.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_exactly_at_bound_is_untouched() {
        let exact = "x".repeat(MAX_DESCRIPTION_CHARS);
        assert_eq!(normalize_description(&exact), exact);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_DESCRIPTION_CHARS + 10);
        let normalized = normalize_description(&accented);
        assert_eq!(normalized.chars().count(), MAX_DESCRIPTION_CHARS);
        assert!(normalized.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_idempotent_under_bound() {
        let inputs = ["", "plain", "  spaced \n out\ttext ", "already normalized text"];
        for input in inputs {
            let once = normalize_description(input);
            assert_eq!(normalize_description(&once), once);
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("über", 2), "üb");
    }
}
