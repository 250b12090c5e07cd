//! Error types for the access policy crate.
//!
//! Parsing is the only fallible surface here. Permission evaluation itself
//! never errors: an unrecognized role or action degrades to a deny
//! (fail-closed), which is a decision, not a failure.

/// Error parsing an enumerated policy value from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string matched neither the global nor the workspace role table.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// The string is not a known protected resource.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// The string is not a known action.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
