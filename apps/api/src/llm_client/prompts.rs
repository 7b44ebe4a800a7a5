// Cross-cutting prompt fragments. Each feature that calls the LLM keeps its own
// prompts next to it and appends these where needed.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_RULES: &str = "Rules:\n\
    - Output raw JSON only\n\
    - No explanations\n\
    - No markdown\n\
    - No extra text";
