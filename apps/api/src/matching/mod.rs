// Text matching primitives shared by job search and resume checks.
// Pure functions only: no I/O, no shared state.

pub mod description;
pub mod scoring;
pub mod tokenizer;
pub mod visa;
