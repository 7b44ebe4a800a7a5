use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A ranked posting as returned to the front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "applyURL")]
    pub apply_url: String,
}

/// One entry of the provider's `results` array. Every field may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPosting {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<DisplayName>,
    #[serde(default)]
    pub location: Option<DisplayName>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayName {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl RawPosting {
    pub fn company_name(&self) -> Option<&str> {
        display_name(&self.company)
    }

    pub fn location_name(&self) -> Option<&str> {
        display_name(&self.location)
    }
}

fn display_name(field: &Option<DisplayName>) -> Option<&str> {
    field
        .as_ref()
        .and_then(|d| d.display_name.as_deref())
        .filter(|s| !s.trim().is_empty())
}
