const VISA_TERMS: &[&str] = &["visa", "sponsorship", "h1b", "opt", "cpt", "relocation"];

/// True when the description mentions any sponsorship-related term.
///
/// Plain substring match, so "opt" also fires inside "optimize". This is a
/// coarse filter applied only to US searches.
pub fn is_visa_friendly(description: &str) -> bool {
    let lowered = description.to_lowercase();
    VISA_TERMS.iter().any(|term| lowered.contains(term))
}
