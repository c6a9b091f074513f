//! Error types for weighted order statistics

use thiserror::Error;

/// Errors that can occur computing weighted order statistics
#[derive(Error, Debug)]
pub enum Error {
    /// No observation carries usable mass (empty input or all-zero weights)
    #[error("Cannot compute an order statistic of an empty or zero-weight sample")]
    NoUsableObservations,

    /// Invalid quantile probability
    #[error("Quantile probability {p} must be in [0, 1]")]
    InvalidProbability { p: f64 },

    /// Weight container error
    #[error("Weight error: {0}")]
    Core(#[from] weights_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability { p });
        }
        Ok(())
    }
}
