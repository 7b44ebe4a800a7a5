use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Country codes the job-search provider serves.
const SUPPORTED: &[&str] = &[
    "at", "au", "be", "br", "ca", "ch", "de", "es", "fr", "gb", "in", "it", "mx", "nl", "nz", "pl",
    "sg", "us", "za",
];

/// Region used when the caller does not pass one.
pub const DEFAULT_REGION: &str = "in";

/// A validated, lower-cased search region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region(String);

impl Region {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// US searches only keep postings that mention sponsorship.
    pub fn requires_visa_filter(&self) -> bool {
        self.0 == "us"
    }

    /// India searches retry once with a broad query when the first yields nothing.
    pub fn has_sparse_results(&self) -> bool {
        self.0 == "in"
    }
}

impl Default for Region {
    fn default() -> Self {
        Region(DEFAULT_REGION.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported region '{0}'")]
pub struct UnsupportedRegion(pub String);

impl FromStr for Region {
    type Err = UnsupportedRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        if SUPPORTED.contains(&code.as_str()) {
            Ok(Region(code))
        } else {
            Err(UnsupportedRegion(s.to_string()))
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn supported_regions() -> &'static [&'static str] {
    SUPPORTED
}
