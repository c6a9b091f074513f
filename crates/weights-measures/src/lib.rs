//! Dispersion and information measures for weighted statistics
//!
//! Lower-level numeric formulas layered over the weight containers and
//! reductions: generalized means, z-scores, median absolute deviation,
//! interquartile range and friends, weighted central moments, and the
//! entropy/divergence family.
//!
//! # Example
//!
//! ```rust
//! use weights_measures::{entropy, mad};
//!
//! let h = entropy(&[0.5, 0.5]).unwrap();
//! assert!((h - std::f64::consts::LN_2).abs() < 1e-12);
//!
//! let m = mad(&[1.0, 2.0, 3.0, 4.0, 5.0], None, false).unwrap();
//! assert_eq!(m, 1.0);
//! ```

pub mod dispersion;
pub mod information;
pub mod means;

// Errors surface through the order-statistics taxonomy, which wraps the
// container errors
pub use weights_order::{Error, Result};

pub use dispersion::{
    iqr, kurtosis, mad, mad_mut, moment, sem, skewness, span, standardize, variation, zscore,
    zscore_mut,
};
pub use information::{
    crossentropy, crossentropy_base, entropy, entropy_base, kldivergence, kldivergence_base,
    renyientropy,
};
pub use means::{genmean, geomean, harmmean};
