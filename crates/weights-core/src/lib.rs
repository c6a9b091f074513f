//! Weight containers and kinds for weighted statistics
//!
//! This crate provides the foundation the other weighted-stats crates build
//! on: the [`WeightKind`] taxonomy, the owned [`WeightVector`] container with
//! incremental total-mass bookkeeping, the zero-allocation
//! [`UniformWeights`] variant, the [`Weighted`] capability trait for
//! user-defined weight schemes, and exponential decay weight generation.
//!
//! # Example
//!
//! ```rust
//! use weights_core::{frequency_weights, Weighted};
//!
//! let w = frequency_weights(&[2.0, 1.0, 3.0]).unwrap();
//! assert_eq!(w.total(), 6.0);
//! assert_eq!(w.weight(2), 3.0);
//! ```

pub mod error;
pub mod exponential;
pub mod kind;
pub mod traits;
pub mod uniform;
pub mod vector;

pub use error::{Error, Result};
pub use exponential::{eweights, eweights_in, eweights_n};
pub use kind::WeightKind;
pub use traits::Weighted;
pub use uniform::{uniform_weights, UniformWeights};
pub use vector::{
    analytic_weights, frequency_weights, probability_weights, weights, WeightVector,
};
