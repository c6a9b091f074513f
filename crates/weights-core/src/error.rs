//! Error types for the weighted-stats crates
//!
//! Provides the shared error taxonomy: invalid weight values, out-of-domain
//! parameters, extent/axis disagreements, and checked-conversion failures.

use thiserror::Error;

/// Core error type for weighted statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// A weight value that can never participate in a computation
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// An out-of-domain parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Array/weight extents disagree, or an axis exceeds the array rank
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A checked numeric conversion that cannot be represented losslessly
    #[error("Inexact conversion: {0}")]
    Inexact(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a NaN or infinite weight value
    pub fn non_finite_weight(index: usize, value: f64) -> Self {
        Self::InvalidWeight(format!("weight at index {index} is not finite ({value})"))
    }

    /// Create an error for a negative weight value
    pub fn negative_weight(index: usize, value: f64) -> Self {
        Self::InvalidWeight(format!("weight at index {index} is negative ({value})"))
    }

    /// Create an error for a fractional frequency weight
    pub fn fractional_frequency(index: usize, value: f64) -> Self {
        Self::InvalidWeight(format!(
            "frequency weight at index {index} must be an integer, got {value}"
        ))
    }

    /// Create an error for a weight vector with no usable mass
    pub fn zero_total_mass() -> Self {
        Self::InvalidArgument("weight vector sums to zero".to_string())
    }

    /// Create an error for an out-of-range probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidArgument(format!("probability {p} must be in [0, 1]"))
    }

    /// Create an error for mismatched extents
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::DimensionMismatch(format!(
            "{context}: expected length {expected}, got {actual}"
        ))
    }

    /// Create an error for an axis index beyond the array rank
    pub fn axis_out_of_bounds(axis: usize, rank: usize) -> Self {
        Self::DimensionMismatch(format!("axis {axis} exceeds array rank {rank}"))
    }

    /// Create an error for an output buffer of the wrong shape
    pub fn shape_mismatch(context: &str) -> Self {
        Self::DimensionMismatch(format!("{context}: output shape does not match reduced shape"))
    }

    /// Create an error for empty input to an operation that needs observations
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidArgument(format!("{operation} requires at least one observation"))
    }

    /// Create an error for a value that does not fit the target numeric type
    pub fn inexact_cast(context: &str) -> Self {
        Self::Inexact(format!("{context} is not representable in the target type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::non_finite_weight(3, f64::NAN);
        assert_eq!(err.to_string(), "Invalid weight: weight at index 3 is not finite (NaN)");

        let err = Error::negative_weight(0, -1.5);
        assert_eq!(err.to_string(), "Invalid weight: weight at index 0 is negative (-1.5)");

        let err = Error::invalid_probability(1.5);
        assert_eq!(err.to_string(), "Invalid argument: probability 1.5 must be in [0, 1]");

        let err = Error::length_mismatch(4, 2, "weighted sum");
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: weighted sum: expected length 4, got 2"
        );

        let err = Error::axis_out_of_bounds(3, 2);
        assert_eq!(err.to_string(), "Dimension mismatch: axis 3 exceeds array rank 2");
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        assert!(matches!(Error::zero_total_mass(), Error::InvalidArgument(_)));
        assert!(matches!(Error::fractional_frequency(1, 1.5), Error::InvalidWeight(_)));
        assert!(matches!(Error::shape_mismatch("wsum"), Error::DimensionMismatch(_)));
        assert!(matches!(Error::inexact_cast("length"), Error::Inexact(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn check(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(7)
            } else {
                Err(Error::empty_input("check"))
            }
        }

        assert_eq!(check(true).unwrap(), 7);
        assert!(check(false).is_err());
    }
}
