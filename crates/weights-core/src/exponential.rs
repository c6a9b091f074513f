//! Exponential decay weight generation
//!
//! Builds a weight vector where observations decay geometrically with their
//! distance from the most recent position of a timeline. Positions are
//! 1-based integer time indices; a sparse sub-selection of a larger timeline
//! is supported by passing the reference domain explicitly.

use crate::error::{Error, Result};
use crate::kind::WeightKind;
use crate::vector::WeightVector;
use num_traits::Float;
use std::ops::RangeInclusive;

fn check_lambda(lambda: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&lambda) {
        return Err(Error::InvalidArgument(format!(
            "decay rate {lambda} must be in [0, 1]"
        )));
    }
    Ok(())
}

fn check_position(t: i64) -> Result<()> {
    if t <= 0 {
        return Err(Error::InvalidArgument(format!(
            "time index {t} must be a positive integer"
        )));
    }
    Ok(())
}

fn build<F: Float>(times: &[i64], t_max: i64, lambda: f64, scale: bool) -> Result<WeightVector<F>> {
    let mut values = Vec::with_capacity(times.len());
    for &t in times {
        let w = if scale {
            (1.0 - lambda).powf((t_max - t) as f64)
        } else {
            lambda * (1.0 - lambda).powf((1 - t) as f64)
        };
        values.push(F::from(w).ok_or_else(|| Error::inexact_cast("exponential weight"))?);
    }
    WeightVector::from_vec(values, WeightKind::Custom)
}

/// Exponential weights for the given time indices.
///
/// With `scale`, position `t` receives `(1 - lambda)^(t_max - t)` where
/// `t_max` is the largest supplied index, so the most recent observation has
/// weight 1. Without `scale`, position `t` receives the unnormalized decay
/// `lambda * (1 - lambda)^(1 - t)`.
///
/// Every index must be a positive integer and `lambda` must lie in `[0, 1]`.
/// Empty input yields an empty vector.
pub fn eweights<F: Float>(times: &[i64], lambda: f64, scale: bool) -> Result<WeightVector<F>> {
    check_lambda(lambda)?;
    let mut t_max = 0i64;
    for &t in times {
        check_position(t)?;
        t_max = t_max.max(t);
    }
    build(times, t_max, lambda, scale)
}

/// Exponential weights for a sub-selection `times` of the reference timeline
/// `domain`.
///
/// The decay is anchored at the end of `domain` rather than at the largest
/// supplied index, so sparse selections keep the weights they would have in
/// the full timeline. Every index must lie inside `domain`.
pub fn eweights_in<F: Float>(
    times: &[i64],
    domain: RangeInclusive<i64>,
    lambda: f64,
    scale: bool,
) -> Result<WeightVector<F>> {
    check_lambda(lambda)?;
    check_position(*domain.start())?;
    for &t in times {
        check_position(t)?;
        if !domain.contains(&t) {
            return Err(Error::InvalidArgument(format!(
                "time index {t} lies outside the reference domain {}..={}",
                domain.start(),
                domain.end()
            )));
        }
    }
    build(times, *domain.end(), lambda, scale)
}

/// Exponential weights for positions `1..=n`
pub fn eweights_n<F: Float>(n: usize, lambda: f64, scale: bool) -> Result<WeightVector<F>> {
    check_lambda(lambda)?;
    let times: Vec<i64> = (1..=n as i64).collect();
    build(&times, n as i64, lambda, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scaled_weights_end_at_one() {
        let w: WeightVector<f64> = eweights_n(3, 0.3, true).unwrap();
        assert_relative_eq!(w.values()[0], 0.49);
        assert_relative_eq!(w.values()[1], 0.7);
        assert_relative_eq!(w.values()[2], 1.0);
    }

    #[test]
    fn test_unscaled_weights() {
        let w: WeightVector<f64> = eweights_n(3, 0.3, false).unwrap();
        assert_relative_eq!(w.values()[0], 0.3);
        assert_relative_eq!(w.values()[1], 0.3 / 0.7);
        assert_relative_eq!(w.values()[2], 0.3 / 0.49);
    }

    #[test]
    fn test_sparse_selection_anchors_at_domain_end() {
        let full: WeightVector<f64> = eweights_n(5, 0.2, true).unwrap();
        let sparse: WeightVector<f64> = eweights_in(&[1, 3, 5], 1..=5, 0.2, true).unwrap();
        assert_relative_eq!(sparse.values()[0], full.values()[0]);
        assert_relative_eq!(sparse.values()[1], full.values()[2]);
        assert_relative_eq!(sparse.values()[2], full.values()[4]);
    }

    #[test]
    fn test_max_anchor_without_domain() {
        let w: WeightVector<f64> = eweights(&[2, 5], 0.5, true).unwrap();
        assert_relative_eq!(w.values()[0], 0.5f64.powi(3));
        assert_relative_eq!(w.values()[1], 1.0);
    }

    #[test]
    fn test_empty_input_yields_empty_vector() {
        let w: WeightVector<f64> = eweights_n(0, 0.3, true).unwrap();
        assert!(w.is_empty());
    }

    #[test]
    fn test_invalid_decay_rate() {
        assert!(eweights_n::<f64>(3, 1.1, true).is_err());
        assert!(eweights_n::<f64>(3, -0.1, true).is_err());
    }

    #[test]
    fn test_invalid_positions() {
        assert!(eweights::<f64>(&[0, 1], 0.3, true).is_err());
        assert!(eweights::<f64>(&[-2], 0.3, true).is_err());
        assert!(eweights_in::<f64>(&[6], 1..=5, 0.3, true).is_err());
    }
}
