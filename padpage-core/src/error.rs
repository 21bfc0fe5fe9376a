//! Error types for pad page generation.

use thiserror::Error;

/// Errors that can occur while producing a pad page.
#[derive(Debug, Error)]
pub enum PadError {
    /// The operating system's secure random source could not supply entropy.
    ///
    /// There is no fallback generator; the request that observed this error
    /// must fail.
    #[error("secure random source unavailable: {0}")]
    Generation(String),

    /// A page dimension was not a positive count.
    #[error("invalid page layout: {0}")]
    Configuration(String),
}

/// Result type for pad page generation.
pub type PadResult<T> = Result<T, PadError>;
