//! Zero-allocation uniform weights
//!
//! A uniform weight vector carries no information beyond its extent, so it is
//! represented by the extent alone. Consumers special-case
//! [`WeightKind::Uniform`] to skip multiplies entirely.

use crate::error::{Error, Result};
use crate::kind::WeightKind;
use crate::traits::Weighted;
use num_traits::Float;

/// A weight vector of `len` implicit unit weights.
///
/// Participates in every operation as if materialized, but never allocates a
/// values buffer. There is no mutation API: uniformity is load-bearing for
/// the O(1) shortcuts downstream, so turning one element non-unit is a
/// programming error the type simply cannot express.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformWeights<F: Float = f64> {
    len: usize,
    total: F,
}

impl<F: Float> UniformWeights<F> {
    /// Create uniform weights over `len` observations with `total == len`.
    ///
    /// Fails with an inexact-conversion error if `len` is not representable
    /// in `F`.
    pub fn new(len: usize) -> Result<Self> {
        let total = F::from(len).ok_or_else(|| Error::inexact_cast("uniform weight extent"))?;
        Ok(Self { len, total })
    }

    /// Number of implicit weights
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total mass (`len` as `F`)
    pub fn total(&self) -> F {
        self.total
    }
}

impl<F: Float> Weighted<F> for UniformWeights<F> {
    fn len(&self) -> usize {
        self.len
    }

    fn weight(&self, _i: usize) -> F {
        F::one()
    }

    fn total(&self) -> F {
        self.total
    }

    fn kind(&self) -> WeightKind {
        WeightKind::Uniform
    }

    fn sum_of_squares(&self) -> F {
        self.total
    }
}

/// Uniform weights over `n` observations
pub fn uniform_weights<F: Float>(n: usize) -> Result<UniformWeights<F>> {
    UniformWeights::new(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_total_is_extent() {
        let u: UniformWeights<f64> = uniform_weights(4).unwrap();
        assert_eq!(u.len(), 4);
        assert_eq!(u.total(), 4.0);
        assert_eq!(Weighted::<f64>::weight(&u, 2), 1.0);
        assert_eq!(u.kind(), WeightKind::Uniform);
    }

    #[test]
    fn test_uniform_empty() {
        let u: UniformWeights<f64> = uniform_weights(0).unwrap();
        assert!(u.is_empty());
        assert_eq!(u.total(), 0.0);
    }

    #[test]
    fn test_uniform_sum_of_squares() {
        let u: UniformWeights<f64> = uniform_weights(7).unwrap();
        assert_eq!(Weighted::<f64>::sum_of_squares(&u), 7.0);
    }
}
