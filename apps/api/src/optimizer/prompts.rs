use crate::llm_client::prompts::JSON_ONLY_RULES;

pub const OPTIMIZER_SYSTEM_PREAMBLE: &str = "You are an expert resume optimizer and career coach.\n\n\
    Analyze the resume and job description.\n\n\
    Return ONLY valid JSON in this exact format:\n\n\
    {\n  \"missing_skills\": [string],\n  \"improved_bullets\": [string],\n  \"ats_keywords\": [string]\n}";

const OPTIMIZER_EXTRA_RULES: &str = "- Keep bullets concise and professional\n\
    - Focus on realistic improvements";

pub fn optimizer_system_prompt() -> String {
    format!("{OPTIMIZER_SYSTEM_PREAMBLE}\n\n{JSON_ONLY_RULES}\n{OPTIMIZER_EXTRA_RULES}")
}

pub fn optimizer_user_prompt(resume_text: &str, job_description: &str) -> String {
    format!("Resume:\n{resume_text}\n\nJob description:\n{job_description}")
}
