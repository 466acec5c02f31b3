//! Types for the copilot `/api/copilot` endpoint

use serde::{Deserialize, Serialize};

use super::citation::Citation;

/// Result-count hint the page always sent
pub const DEFAULT_RESULT_COUNT: u32 = 5;

/// Request body for `POST /api/copilot`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerRequest {
    /// The free-text clinical query to answer
    pub query: String,

    /// Hint for how many context documents the backend should retrieve.
    /// Enforcement is entirely the backend's responsibility.
    pub n_results: u32,
}

impl AnswerRequest {
    /// Create a new answer request with the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            n_results: DEFAULT_RESULT_COUNT,
        }
    }

    /// Set the result-count hint
    #[must_use]
    pub const fn with_n_results(mut self, n_results: u32) -> Self {
        self.n_results = n_results;
        self
    }
}

/// Metadata block attached to a successful answer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseMetadata {
    /// Model identifier that produced the answer
    pub model: String,
    /// Sampling temperature the backend used
    pub temperature: f64,
    /// Source-category labels of the material the backend consulted
    #[serde(default)]
    pub context_sources: Vec<String>,
}

/// Response from `POST /api/copilot` on success
///
/// A payload with an answer but neither citations nor metadata is valid;
/// both sections default to absent. Citation ordering is preserved exactly
/// as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerResponse {
    /// The query this answer responds to
    #[serde(default)]
    pub query: String,

    /// The generated answer text; may contain embedded line breaks
    pub answer: String,

    /// Evidence citations supporting the answer; order is backend-defined
    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Count of context documents the backend used
    #[serde(default)]
    pub context_used: u32,

    /// Backend confidence score
    #[serde(default)]
    pub confidence: f64,

    /// Model/temperature/source metadata, when the backend attaches it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

impl AnswerResponse {
    /// Whether the payload carries a usable answer
    ///
    /// A 2xx response whose answer trims to empty renders as "no analysis",
    /// not as an error.
    #[must_use]
    pub fn has_answer(&self) -> bool {
        !self.answer.trim().is_empty()
    }
}
