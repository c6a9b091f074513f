//! Weighted quantile and median estimation
//!
//! Zero-weight observations are discarded, the remainder is sorted by value,
//! and the requested probabilities are located by a single cumulative-weight
//! walk. Frequency weights reproduce the standard unweighted estimator on
//! the replication-expanded virtual sample exactly; all other non-uniform
//! kinds interpolate against the cumulative-weight positions; uniform weights
//! fall through to the plain unweighted estimator.

use crate::error::{Error, Result};
use num_traits::Float;
use tracing::trace;
use weights_core::{Error as CoreError, Weighted};

/// Validated, zero-elided observations sorted by value
struct Prepared<F> {
    pairs: Vec<(F, F)>,
    total: F,
    has_nan: bool,
}

fn prepare<F: Float, W: Weighted<F>>(data: &[F], w: &W) -> Result<Prepared<F>> {
    if data.len() != w.len() {
        return Err(CoreError::length_mismatch(data.len(), w.len(), "weighted quantile").into());
    }
    let integral = w.kind().requires_integer_weights();
    let mut pairs = Vec::with_capacity(data.len());
    let mut total = F::zero();
    let mut has_nan = false;
    for (i, &v) in data.iter().enumerate() {
        let wi = w.weight(i);
        if wi.is_nan() {
            return Err(CoreError::non_finite_weight(i, f64::NAN).into());
        }
        if wi < F::zero() {
            return Err(CoreError::negative_weight(i, wi.to_f64().unwrap_or(f64::NAN)).into());
        }
        if wi == F::zero() {
            continue;
        }
        if integral && wi.fract() != F::zero() {
            return Err(CoreError::fractional_frequency(i, wi.to_f64().unwrap_or(f64::NAN)).into());
        }
        if v.is_nan() {
            has_nan = true;
        }
        total = total + wi;
        pairs.push((v, wi));
    }
    if pairs.is_empty() || total <= F::zero() {
        return Err(Error::NoUsableObservations);
    }
    if !has_nan {
        // stable by-value sort: equal values keep their relative order
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    }
    Ok(Prepared { pairs, total, has_nan })
}

/// Weighted quantiles of `data` at each probability in `ps`.
///
/// Results are matched to the positions of `ps`, which may be in any order.
/// If any nonzero-weight value is NaN, every result is NaN.
pub fn quantiles<F, W>(data: &[F], w: &W, ps: &[f64]) -> Result<Vec<F>>
where
    F: Float,
    W: Weighted<F>,
{
    for &p in ps {
        Error::check_probability(p)?;
    }

    if w.kind().is_uniform() {
        if data.len() != w.len() {
            return Err(
                CoreError::length_mismatch(data.len(), w.len(), "weighted quantile").into(),
            );
        }
        if data.is_empty() {
            return Err(Error::NoUsableObservations);
        }
        if data.iter().any(|v| v.is_nan()) {
            return Ok(vec![F::nan(); ps.len()]);
        }
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        return ps
            .iter()
            .map(|&p| unweighted_quantile_sorted(&sorted, p))
            .collect();
    }

    let prep = prepare(data, w)?;
    if prep.has_nan {
        return Ok(vec![F::nan(); ps.len()]);
    }

    let n = prep.pairs.len();
    trace!(observations = n, probabilities = ps.len(), "weighted quantile walk");

    // process probabilities in ascending order, scatter back through the
    // permutation so the output matches the caller's order
    let mut perm: Vec<usize> = (0..ps.len()).collect();
    perm.sort_by(|&a, &b| ps[a].partial_cmp(&ps[b]).unwrap());

    let integral = w.kind().requires_integer_weights();
    let one = F::one();
    let w1 = prep.pairs[0].1;
    let last = prep.pairs[n - 1].0;

    let mut out = vec![F::zero(); ps.len()];
    let mut cum = F::zero();
    let mut cum_prev = F::zero();
    let mut v = F::zero();
    let mut v_prev = F::zero();
    let mut k = 0usize;

    'walk: for (step, &pi) in perm.iter().enumerate() {
        let p = F::from(ps[pi]).ok_or_else(|| CoreError::inexact_cast("probability"))?;
        // target position on the cumulative-weight scale
        let h = if integral {
            p * (prep.total - one) + one
        } else {
            p * (prep.total - w1) + w1
        };
        while cum <= h {
            if k == n {
                // past the last observation: clamp this and all remaining
                for &pj in &perm[step..] {
                    out[pj] = last;
                }
                break 'walk;
            }
            cum_prev = cum;
            v_prev = v;
            v = prep.pairs[k].0;
            cum = cum + prep.pairs[k].1;
            k += 1;
        }
        out[pi] = if integral {
            v_prev + (h - cum_prev).min(one) * (v - v_prev)
        } else {
            v_prev + (h - cum_prev) / (cum - cum_prev) * (v - v_prev)
        };
    }
    Ok(out)
}

/// Weighted quantile of `data` at probability `p`
pub fn quantile<F, W>(data: &[F], w: &W, p: f64) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    let mut out = quantiles(data, w, &[p])?;
    Ok(out.pop().unwrap())
}

/// Weighted median, i.e. the weighted quantile at `p = 0.5`
pub fn median<F, W>(data: &[F], w: &W) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    quantile(data, w, 0.5)
}

/// Unweighted quantile with linear interpolation between order statistics.
///
/// NaN values propagate: the result is NaN if any observation is NaN.
pub fn unweighted_quantile<F: Float>(data: &[F], p: f64) -> Result<F> {
    Error::check_probability(p)?;
    if data.is_empty() {
        return Err(Error::NoUsableObservations);
    }
    if data.iter().any(|v| v.is_nan()) {
        return Ok(F::nan());
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    unweighted_quantile_sorted(&sorted, p)
}

/// Unweighted quantile over already-sorted, NaN-free data
pub fn unweighted_quantile_sorted<F: Float>(sorted: &[F], p: f64) -> Result<F> {
    Error::check_probability(p)?;
    if sorted.is_empty() {
        return Err(Error::NoUsableObservations);
    }
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let gamma = F::from(rank - lo as f64).ok_or_else(|| CoreError::inexact_cast("rank"))?;
    Ok(sorted[lo] + gamma * (sorted[hi] - sorted[lo]))
}

/// Unweighted median
pub fn unweighted_median<F: Float>(data: &[F]) -> Result<F> {
    unweighted_quantile(data, 0.5)
}
