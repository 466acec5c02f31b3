#![deny(warnings)]
#![deny(clippy::all)]
#![deny(missing_docs)]

//! Async clinical copilot API client with typed requests/responses and wiremock tests.
//!
//! The copilot backend answers free-text clinical queries with an AI-generated
//! analysis, evidence citations, and response metadata. This crate speaks that
//! contract: one `POST /api/copilot` per call, one outcome per call. Nothing is
//! retried automatically; recovery is the caller's decision.

/// HTTP client implementation
pub mod client;
/// Configuration types for the client
pub mod config;
/// Error types
pub mod error;
/// API resource implementations
pub mod resources;
/// Test support utilities (for use in tests)
#[doc(hidden)]
pub mod test_support;
/// Request and response types
pub mod types;

pub use crate::client::Client;
pub use crate::config::CopilotConfig;
pub use crate::error::{ApiErrorObject, CopilotError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{Client, CopilotConfig};
}
