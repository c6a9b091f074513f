//! Capability trait for weight sequences
//!
//! Estimators in the downstream crates accept any type exposing indexed
//! weight values and a total mass. User-defined weight schemes implement
//! [`Weighted`] directly and are treated as general non-uniform weights.

use crate::kind::WeightKind;
use num_traits::Float;

/// A fixed-length sequence of non-negative weights with a known total mass.
///
/// Implementations must keep `total()` consistent with the sum of all
/// `weight(i)` at observation time. `weight(i)` may panic for `i >= len()`,
/// like slice indexing.
pub trait Weighted<F: Float> {
    /// Number of weights (the extent)
    fn len(&self) -> usize;

    /// Weight at position `i`
    fn weight(&self, i: usize) -> F;

    /// Total mass, i.e. the sum of all weights
    fn total(&self) -> F;

    /// Semantic kind; user-defined implementations are `Custom` by default
    fn kind(&self) -> WeightKind {
        WeightKind::Custom
    }

    /// Whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `Σw²`, needed by the analytic variance correction
    fn sum_of_squares(&self) -> F {
        let mut acc = F::zero();
        for i in 0..self.len() {
            let w = self.weight(i);
            acc = acc + w * w;
        }
        acc
    }
}
