//! Request and response types for the copilot API

/// Answer endpoint types
pub mod answer;
/// Citation types
pub mod citation;

pub use answer::{AnswerRequest, AnswerResponse, ResponseMetadata};
pub use citation::{Citation, CitationCategory, CitationExtra};
