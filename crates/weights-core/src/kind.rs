//! Weight kind tags and their per-kind behavior
//!
//! The kind of a weight vector decides how downstream estimators treat it:
//! the degrees-of-freedom correction applied to a weighted variance, whether
//! order statistics demand integer weights, and whether the uniform fast
//! paths apply.

use crate::error::{Error, Result};
use num_traits::Float;

/// Semantic interpretation of a per-observation weight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightKind {
    /// Integer replication counts
    Frequency,
    /// Inverse-variance (precision) weights
    Analytic,
    /// Inverse sampling-probability weights
    Probability,
    /// Every element implicitly 1, never materialized
    Uniform,
    /// Opaque, user-defined weights
    Custom,
}

impl WeightKind {
    /// Whether nonzero weights must be exact integers at order-statistic sites
    pub fn requires_integer_weights(self) -> bool {
        matches!(self, WeightKind::Frequency)
    }

    /// Whether this kind carries no information beyond the extent
    pub fn is_uniform(self) -> bool {
        matches!(self, WeightKind::Uniform)
    }

    /// Degrees-of-freedom correction applied to a weighted variance estimate.
    ///
    /// `total` is the total mass, `sum_sq` is `Σw²` (only used by
    /// [`WeightKind::Analytic`]) and `n` the extent. Fails with an argument
    /// error when the correction denominator is zero or negative, i.e. the
    /// sample holds a single effective observation.
    pub fn correction_factor<F: Float>(self, total: F, sum_sq: F, n: usize) -> Result<F> {
        let one = F::one();
        match self {
            WeightKind::Uniform => {
                if n <= 1 {
                    return Err(Error::InvalidArgument(format!(
                        "corrected variance requires more than one observation, got {n}"
                    )));
                }
                let n = F::from(n).ok_or_else(|| Error::inexact_cast("observation count"))?;
                Ok(n / (n - one))
            }
            WeightKind::Frequency | WeightKind::Probability => {
                if total <= one {
                    return Err(Error::InvalidArgument(
                        "corrected variance requires total weight greater than one".to_string(),
                    ));
                }
                Ok(total / (total - one))
            }
            WeightKind::Analytic => {
                let denom = total * total - sum_sq;
                if denom <= F::zero() {
                    return Err(Error::InvalidArgument(
                        "corrected variance is degenerate for these analytic weights".to_string(),
                    ));
                }
                Ok(total * total / denom)
            }
            WeightKind::Custom => Err(Error::InvalidArgument(
                "bias correction is not defined for custom weights".to_string(),
            )),
        }
    }
}
