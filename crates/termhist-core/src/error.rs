//! Error types for histogram construction and rendering
//!
//! Provides a unified error type for all termhist crates.

use thiserror::Error;

/// Core error type for binning and rendering operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (writing to an output sink)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a histogram requested with no buckets
    pub fn zero_buckets() -> Self {
        Self::InvalidParameter("bucket count must be at least 1".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a series that cannot be scaled to a width
    pub fn empty_series(context: &str) -> Self {
        Self::Computation(format!(
            "{context} has no positive maximum and cannot be normalized"
        ))
    }
}
