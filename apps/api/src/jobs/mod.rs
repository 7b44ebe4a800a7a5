// Job search: provider client, region rules, and the ranking pipeline.
// Everything here is best-effort; callers get an empty list rather than an error.

pub mod handlers;
pub mod provider;
pub mod region;
pub mod search;
