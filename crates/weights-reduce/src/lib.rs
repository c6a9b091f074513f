//! Axis-generic weighted reductions over N-dimensional arrays
//!
//! This crate provides the reduction kernel shared by the weighted
//! estimators: [`wsum`] and friends compute `sum(x .* w)` flattened, along a
//! chosen axis, or into a caller-owned accumulator, and
//! [`mean`]/[`variance`] build the weighted central-tendency estimators on
//! top with kind-dependent bias corrections.
//!
//! # Example
//!
//! ```rust
//! use ndarray::{array, Axis};
//! use weights_core::weights;
//! use weights_reduce::{mean, wsum_axis};
//!
//! let x = array![[1.0, 2.0], [3.0, 4.0]];
//! let w = weights(&[2.0, 1.0]).unwrap();
//! let by_row = wsum_axis(&x, &w, Axis(0)).unwrap();
//! assert_eq!(by_row[[0, 0]], 5.0);
//!
//! let flat = weights(&[1.0, 1.0, 1.0, 1.0]).unwrap();
//! assert_eq!(mean(&x, &flat).unwrap(), 2.5);
//! ```

pub mod moments;
pub mod wsum;

pub use moments::{mean, mean_axis, std, sum, sum_axis, variance};
pub use wsum::{wsum, wsum_axis, wsum_into};
