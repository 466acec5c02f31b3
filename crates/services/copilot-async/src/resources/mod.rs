//! API resource implementations

/// Answer endpoint resource
pub mod answer;
