//! Weighted statistics toolkit
//!
//! A family of weight representations and the estimators built on them:
//! weighted sums, means, and variances over N-dimensional arrays, weighted
//! order statistics (quantile, median, mode) whose behavior forks by weight
//! kind, exponential decay weight generation, and dispersion and
//! information measures.
//!
//! # Weight kinds
//!
//! The semantics of a weight vector change how estimators behave, not just
//! their arithmetic:
//!
//! - **Frequency** weights are integer replication counts; quantiles are
//!   exactly those of the replication-expanded sample.
//! - **Analytic** weights are inverse-variance precisions; the corrected
//!   variance uses the reliability-weighted estimator.
//! - **Probability** weights are inverse sampling probabilities.
//! - **Uniform** weights carry no information beyond the extent and never
//!   allocate; every consumer takes an unweighted fast path.
//! - **Custom** weight schemes implement [`Weighted`] and are treated as
//!   general non-uniform weights.
//!
//! # Example
//!
//! ```rust
//! use weighted_stats::{frequency_weights, median, quantile, uniform_weights, mean};
//! use ndarray::array;
//!
//! let data = [1.0, 2.0, 4.0];
//! let w = frequency_weights(&[1.0, 2.0, 1.0]).unwrap();
//! assert_eq!(median(&data, &w).unwrap(), 2.0);
//! assert_eq!(quantile(&data, &w, 0.0).unwrap(), 1.0);
//!
//! let u = uniform_weights::<f64>(3).unwrap();
//! assert_eq!(mean(&array![1.0, 2.0, 3.0], &u).unwrap(), 2.0);
//! ```

// Re-export core types
pub use weights_core::{
    analytic_weights, eweights, eweights_in, eweights_n, frequency_weights, probability_weights,
    uniform_weights, weights, Error, Result, UniformWeights, WeightKind, WeightVector, Weighted,
};

// Re-export reductions
pub use weights_reduce::{mean, mean_axis, std, sum, sum_axis, variance, wsum, wsum_axis, wsum_into};

// Re-export order statistics; their error type wraps the container errors
pub use weights_order::{
    median, mode, modes, quantile, quantiles, unweighted_median, unweighted_quantile,
};
pub use weights_order::Error as OrderError;

// Re-export measures
pub use weights_measures::{
    crossentropy, crossentropy_base, entropy, entropy_base, genmean, geomean, harmmean, iqr,
    kldivergence, kldivergence_base, kurtosis, mad, mad_mut, moment, renyientropy, sem, skewness,
    span, standardize, variation, zscore, zscore_mut,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        analytic_weights, frequency_weights, mean, median, mode, probability_weights, quantile,
        uniform_weights, variance, weights, wsum, Error, Result, UniformWeights, WeightKind,
        WeightVector, Weighted,
    };
}
