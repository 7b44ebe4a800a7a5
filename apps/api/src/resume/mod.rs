// Resume intake: upload validation, PDF text extraction, the resume heuristic,
// and the optimize endpoint.

pub mod extract;
pub mod handlers;
pub mod keywords;
pub mod upload;
pub mod validity;
