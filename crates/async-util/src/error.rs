//! Error types for async helpers.

use thiserror::Error;

/// Errors produced by the async helpers themselves.
///
/// Failures of user operations are passed through unchanged; this type only
/// covers conditions the helpers introduce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsyncError {
    /// The wrapped future did not finish within the given milliseconds.
    #[error("Operation timed out after {0}ms")]
    Timeout(u64),
}
