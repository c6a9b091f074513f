//! Weighted order statistics
//!
//! Quantile, median, and mode estimation under a weight kind. Frequency
//! weights reproduce the standard unweighted estimator on the
//! replication-expanded virtual sample exactly; analytic, probability, and
//! custom weights interpolate against cumulative-weight positions; uniform
//! weights reduce to the plain unweighted estimator.
//!
//! # Example
//!
//! ```rust
//! use weights_core::frequency_weights;
//! use weights_order::{median, quantile};
//!
//! let data = [1.0, 2.0, 4.0];
//! let w = frequency_weights(&[1.0, 2.0, 1.0]).unwrap();
//! // equivalent to the unweighted estimator over [1, 2, 2, 4]
//! assert_eq!(median(&data, &w).unwrap(), 2.0);
//! assert_eq!(quantile(&data, &w, 1.0).unwrap(), 4.0);
//! ```

pub mod error;
pub mod mode;
pub mod quantile;

pub use error::{Error, Result};
pub use mode::{mode, modes};
pub use quantile::{
    median, quantile, quantiles, unweighted_median, unweighted_quantile,
    unweighted_quantile_sorted,
};
