//! Materialized weight vectors
//!
//! [`WeightVector`] owns its values buffer, caches the total mass, and keeps
//! that cache consistent through single-element and ranged mutation without
//! ever rescanning the buffer.

use crate::error::{Error, Result};
use crate::kind::WeightKind;
use crate::traits::Weighted;
use num_traits::{Float, ToPrimitive};
use std::ops::Index;

/// An ordered sequence of non-negative finite weights tagged with a kind.
///
/// Construction validates every element: `Inf`, `NaN`, and negative values
/// are rejected up front, so consumers can rely on the buffer holding only
/// usable mass. The cached total is maintained incrementally
/// (`total += new - old`) across mutations.
#[derive(Clone, Debug)]
pub struct WeightVector<F: Float = f64> {
    values: Vec<F>,
    total: F,
    kind: WeightKind,
}

fn validate<F: Float>(values: &[F]) -> Result<F> {
    let mut total = F::zero();
    for (i, &w) in values.iter().enumerate() {
        if !w.is_finite() {
            return Err(Error::non_finite_weight(i, w.to_f64().unwrap_or(f64::NAN)));
        }
        if w < F::zero() {
            return Err(Error::negative_weight(i, w.to_f64().unwrap_or(f64::NAN)));
        }
        total = total + w;
    }
    Ok(total)
}

impl<F: Float> WeightVector<F> {
    /// Create a weight vector taking ownership of `values` (no copy).
    ///
    /// Empty input succeeds with extent 0 and total 0. Fails if any element
    /// is `Inf`, `NaN`, or negative, or if `kind` is [`WeightKind::Uniform`]
    /// (uniform weights are never materialized; use
    /// [`UniformWeights`](crate::UniformWeights)).
    pub fn from_vec(values: Vec<F>, kind: WeightKind) -> Result<Self> {
        if kind.is_uniform() {
            return Err(Error::InvalidArgument(
                "uniform weights are never materialized; use UniformWeights".to_string(),
            ));
        }
        let total = validate(&values)?;
        Ok(Self { values, total, kind })
    }

    /// Create a weight vector copying from `values`.
    pub fn from_slice(values: &[F], kind: WeightKind) -> Result<Self> {
        Self::from_vec(values.to_vec(), kind)
    }

    /// Weight at position `i`, or `None` past the end
    pub fn get(&self, i: usize) -> Option<F> {
        self.values.get(i).copied()
    }

    /// Overwrite the weight at position `i`, keeping the cached total
    /// consistent in O(1).
    ///
    /// Fails if `v` is `Inf`, `NaN`, or negative; on failure the vector is
    /// left untouched. Panics if `i` is out of bounds, like slice indexing.
    pub fn set(&mut self, i: usize, v: F) -> Result<()> {
        if !v.is_finite() {
            return Err(Error::non_finite_weight(i, v.to_f64().unwrap_or(f64::NAN)));
        }
        if v < F::zero() {
            return Err(Error::negative_weight(i, v.to_f64().unwrap_or(f64::NAN)));
        }
        let old = self.values[i];
        self.values[i] = v;
        self.total = self.total + v - old;
        Ok(())
    }

    /// Overwrite `new.len()` weights starting at `start`.
    ///
    /// All-or-nothing relative to validation: every incoming value is checked
    /// before the first write, so a rejected element leaves both the buffer
    /// and the cached total untouched.
    pub fn set_range(&mut self, start: usize, new: &[F]) -> Result<()> {
        let end = start + new.len();
        if end > self.values.len() {
            return Err(Error::length_mismatch(
                self.values.len(),
                end,
                "ranged weight assignment",
            ));
        }
        for (j, &v) in new.iter().enumerate() {
            if !v.is_finite() {
                return Err(Error::non_finite_weight(start + j, v.to_f64().unwrap_or(f64::NAN)));
            }
            if v < F::zero() {
                return Err(Error::negative_weight(start + j, v.to_f64().unwrap_or(f64::NAN)));
            }
        }
        for (j, &v) in new.iter().enumerate() {
            let old = self.values[start + j];
            self.values[start + j] = v;
            self.total = self.total + v - old;
        }
        Ok(())
    }

    /// The values buffer
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Iterate over the weights
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.values.iter().copied()
    }

    /// Total mass
    pub fn total(&self) -> F {
        self.total
    }

    /// Number of weights
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Semantic kind
    pub fn kind(&self) -> WeightKind {
        self.kind
    }

    /// Strict identity: same kind and bitwise-identical values.
    ///
    /// Unlike `==`, this distinguishes `+0.0` from `-0.0`.
    pub fn strictly_eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a == b && a.is_sign_negative() == b.is_sign_negative())
    }
}

/// Numeric equality: same kind and elementwise equal values
/// (`+0.0` and `-0.0` compare equal). The cached total is derived state and
/// does not participate.
impl<F: Float> PartialEq for WeightVector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.values == other.values
    }
}

impl<F: Float> Index<usize> for WeightVector<F> {
    type Output = F;

    fn index(&self, i: usize) -> &F {
        &self.values[i]
    }
}

impl<F: Float> Weighted<F> for WeightVector<F> {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn weight(&self, i: usize) -> F {
        self.values[i]
    }

    fn total(&self) -> F {
        self.total
    }

    fn kind(&self) -> WeightKind {
        self.kind
    }
}

/// Frequency (replication-count) weights
pub fn frequency_weights<F: Float>(values: &[F]) -> Result<WeightVector<F>> {
    WeightVector::from_slice(values, WeightKind::Frequency)
}

/// Analytic (inverse-variance) weights
pub fn analytic_weights<F: Float>(values: &[F]) -> Result<WeightVector<F>> {
    WeightVector::from_slice(values, WeightKind::Analytic)
}

/// Probability (inverse sampling-probability) weights
pub fn probability_weights<F: Float>(values: &[F]) -> Result<WeightVector<F>> {
    WeightVector::from_slice(values, WeightKind::Probability)
}

/// Unclassified weights with no kind-specific semantics
pub fn weights<F: Float>(values: &[F]) -> Result<WeightVector<F>> {
    WeightVector::from_slice(values, WeightKind::Custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_construction_computes_total() {
        let w = frequency_weights(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(w.len(), 3);
        assert_relative_eq!(w.total(), 6.0);
        assert_eq!(w.kind(), WeightKind::Frequency);
    }

    #[test]
    fn test_empty_construction_succeeds() {
        let w = weights::<f64>(&[]).unwrap();
        assert!(w.is_empty());
        assert_eq!(w.total(), 0.0);
    }

    #[test]
    fn test_construction_rejects_non_finite() {
        assert!(matches!(
            weights(&[1.0, f64::NAN]),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(
            weights(&[f64::INFINITY, 1.0]),
            Err(Error::InvalidWeight(_))
        ));
        assert!(matches!(weights(&[1.0, -2.0]), Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn test_uniform_kind_is_never_materialized() {
        assert!(WeightVector::from_vec(vec![1.0, 1.0], WeightKind::Uniform).is_err());
    }

    #[test]
    fn test_set_updates_total_incrementally() {
        let mut w = analytic_weights(&[1.0, 2.0, 3.0]).unwrap();
        w.set(1, 5.0).unwrap();
        assert_eq!(w.get(1), Some(5.0));
        assert_relative_eq!(w.total(), 9.0);
    }

    #[test]
    fn test_failed_set_leaves_state_unchanged() {
        let mut w = analytic_weights(&[1.0, 2.0, 3.0]).unwrap();
        assert!(w.set(1, f64::NAN).is_err());
        assert!(w.set(2, -1.0).is_err());
        assert_eq!(w.values(), &[1.0, 2.0, 3.0]);
        assert_relative_eq!(w.total(), 6.0);
    }

    #[test]
    fn test_set_range_all_or_nothing() {
        let mut w = weights(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        w.set_range(1, &[5.0, 6.0]).unwrap();
        assert_eq!(w.values(), &[1.0, 5.0, 6.0, 4.0]);
        assert_relative_eq!(w.total(), 16.0);

        // second element invalid: nothing is written
        assert!(w.set_range(0, &[9.0, f64::INFINITY]).is_err());
        assert_eq!(w.values(), &[1.0, 5.0, 6.0, 4.0]);
        assert_relative_eq!(w.total(), 16.0);

        // past-the-end range
        assert!(matches!(
            w.set_range(3, &[1.0, 1.0]),
            Err(Error::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_equality_ignores_zero_sign_and_total_cache() {
        let a = weights(&[0.0, 1.0]).unwrap();
        let b = weights(&[-0.0, 1.0]).unwrap();
        assert_eq!(a, b);
        assert!(!a.strictly_eq(&b));

        let c = weights(&[0.0, 1.0]).unwrap();
        assert!(a.strictly_eq(&c));
    }

    #[test]
    fn test_equality_requires_same_kind() {
        let f = frequency_weights(&[1.0, 2.0]).unwrap();
        let a = analytic_weights(&[1.0, 2.0]).unwrap();
        assert_ne!(f, a);
        assert!(!f.strictly_eq(&a));
    }

    #[test]
    fn test_from_vec_takes_ownership_without_copy() {
        let buf = vec![1.0, 2.0];
        let ptr = buf.as_ptr();
        let w = WeightVector::from_vec(buf, WeightKind::Custom).unwrap();
        assert_eq!(w.values().as_ptr(), ptr);
    }

    proptest! {
        #[test]
        fn prop_total_matches_rescan_after_mutations(
            init in proptest::collection::vec(0.0f64..1e6, 1..32),
            writes in proptest::collection::vec((0usize..32, 0.0f64..1e6), 0..32),
        ) {
            let mut w = weights(&init).unwrap();
            for (i, v) in writes {
                let i = i % w.len();
                w.set(i, v).unwrap();
            }
            let rescan: f64 = w.values().iter().sum();
            prop_assert!((w.total() - rescan).abs() <= 1e-6 * rescan.max(1.0));
        }

        #[test]
        fn prop_finite_non_negative_always_constructs(
            vals in proptest::collection::vec(0.0f64..1e12, 0..64),
        ) {
            let w = weights(&vals).unwrap();
            let expected: f64 = vals.iter().sum();
            prop_assert_eq!(w.len(), vals.len());
            prop_assert!((w.total() - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
