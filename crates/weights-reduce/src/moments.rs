//! Weighted central tendency: sum, mean, and variance
//!
//! Mean is the weighted sum scaled by total mass; variance is the weighted
//! second moment about the weighted mean with a kind-dependent
//! degrees-of-freedom correction.

use crate::wsum::{wsum, wsum_axis};
use ndarray::{Array, ArrayBase, Axis, Data, Dimension, RemoveAxis};
use num_traits::Float;
use weights_core::{Error, Result, Weighted};

/// Weighted sum of `x` flattened; alias of [`wsum`]
pub fn sum<F, S, D, W>(x: &ArrayBase<S, D>, w: &W) -> Result<F>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
    W: Weighted<F>,
{
    wsum(x, w)
}

/// Weighted sum of `x` along `axis`; alias of [`wsum_axis`]
pub fn sum_axis<F, S, D, W>(x: &ArrayBase<S, D>, w: &W, axis: Axis) -> Result<Array<F, D>>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension + RemoveAxis,
    W: Weighted<F>,
{
    wsum_axis(x, w, axis)
}

/// Weighted mean of `x` flattened
pub fn mean<F, S, D, W>(x: &ArrayBase<S, D>, w: &W) -> Result<F>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
    W: Weighted<F>,
{
    Ok(wsum(x, w)? / w.total())
}

/// Weighted mean of `x` along `axis`
pub fn mean_axis<F, S, D, W>(x: &ArrayBase<S, D>, w: &W, axis: Axis) -> Result<Array<F, D>>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension + RemoveAxis,
    W: Weighted<F>,
{
    let total = w.total();
    let mut out = wsum_axis(x, w, axis)?;
    out.mapv_inplace(|v| v / total);
    Ok(out)
}

/// Weighted variance of `x`.
///
/// Computes the weighted second moment about the weighted mean. With
/// `corrected`, a kind-dependent degrees-of-freedom correction is applied
/// (see [`weights_core::WeightKind::correction_factor`]); without it the
/// weights act purely as weighting, matching the population form. Fails when
/// a corrected estimate is requested for a degenerate sample.
pub fn variance<F, W>(x: &[F], w: &W, corrected: bool) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    if w.len() != x.len() {
        return Err(Error::length_mismatch(x.len(), w.len(), "weighted variance"));
    }
    let total = w.total();
    let uniform = w.kind().is_uniform();

    let mut acc = F::zero();
    for (i, &v) in x.iter().enumerate() {
        acc = acc + if uniform { v } else { v * w.weight(i) };
    }
    let mu = acc / total;

    let mut m2 = F::zero();
    for (i, &v) in x.iter().enumerate() {
        let d = v - mu;
        m2 = m2 + if uniform { d * d } else { d * d * w.weight(i) };
    }
    let moment = m2 / total;

    if corrected {
        let factor = w.kind().correction_factor(total, w.sum_of_squares(), x.len())?;
        Ok(moment * factor)
    } else {
        Ok(moment)
    }
}

/// Weighted standard deviation, the square root of [`variance`]
pub fn std<F, W>(x: &[F], w: &W, corrected: bool) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    variance(x, w, corrected).map(Float::sqrt)
}
