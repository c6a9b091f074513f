//! Dispersion measures
//!
//! Z-scores, median absolute deviation, interquartile range, span, standard
//! error of the mean, coefficient of variation, and weighted central
//! moments with the shape statistics built on them.

use crate::Result;
use ndarray::aview1;
use num_traits::Float;
use statrs::distribution::{ContinuousCDF, Normal};
use weights_core::{Error as CoreError, Weighted};
use weights_order::{unweighted_quantile, unweighted_quantile_sorted};

/// Gaussian consistency factor `1/Φ⁻¹(3/4)` scaling a MAD to a standard
/// deviation equivalent under normality
fn mad_constant<F: Float>() -> F {
    let normal = Normal::new(0.0, 1.0).unwrap();
    F::from(1.0 / normal.inverse_cdf(0.75)).unwrap()
}

/// Elementwise `(x - center) / scale`
pub fn zscore<F: Float>(x: &[F], center: F, scale: F) -> Vec<F> {
    x.iter().map(|&v| (v - center) / scale).collect()
}

/// In-place variant of [`zscore`]; the caller guarantees exclusive access to
/// `x` for the duration of the call
pub fn zscore_mut<F: Float>(x: &mut [F], center: F, scale: F) {
    for v in x.iter_mut() {
        *v = (*v - center) / scale;
    }
}

/// Z-scores against the sample's own mean and corrected standard deviation
pub fn standardize<F: Float>(x: &[F]) -> Result<Vec<F>> {
    let u = weights_core::uniform_weights::<F>(x.len())?;
    let center = weights_reduce::mean(&aview1(x), &u)?;
    let scale = weights_reduce::std(x, &u, true)?;
    Ok(zscore(x, center, scale))
}

/// Median absolute deviation about `center` (the median when `None`).
///
/// With `normalize`, the result is scaled by `1/Φ⁻¹(3/4)` (≈ 1.4826) to
/// approximate a standard deviation under Gaussian assumptions. Fails on
/// empty input.
pub fn mad<F: Float>(x: &[F], center: Option<F>, normalize: bool) -> Result<F> {
    if x.is_empty() {
        return Err(CoreError::empty_input("median absolute deviation").into());
    }
    let c = match center {
        Some(c) => c,
        None => unweighted_quantile(x, 0.5)?,
    };
    let deviations: Vec<F> = x.iter().map(|&v| (v - c).abs()).collect();
    let m = unweighted_quantile(&deviations, 0.5)?;
    Ok(if normalize { m * mad_constant() } else { m })
}

/// Destructive variant of [`mad`]: sorts and overwrites the caller's buffer
/// instead of allocating. The caller guarantees exclusive access to `x` for
/// the duration of the call; its contents are unspecified afterwards.
pub fn mad_mut<F: Float>(x: &mut [F], center: Option<F>, normalize: bool) -> Result<F> {
    if x.is_empty() {
        return Err(CoreError::empty_input("median absolute deviation").into());
    }
    if x.iter().any(|v| v.is_nan()) {
        return Ok(F::nan());
    }
    let c = match center {
        Some(c) => c,
        None => {
            x.sort_by(|a, b| a.partial_cmp(b).unwrap());
            unweighted_quantile_sorted(x, 0.5)?
        }
    };
    for v in x.iter_mut() {
        *v = (*v - c).abs();
    }
    x.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let m = unweighted_quantile_sorted(x, 0.5)?;
    Ok(if normalize { m * mad_constant() } else { m })
}

/// Interquartile range
pub fn iqr<F: Float>(x: &[F]) -> Result<F> {
    Ok(unweighted_quantile(x, 0.75)? - unweighted_quantile(x, 0.25)?)
}

/// Span of the data, `max - min`
pub fn span<F: Float>(x: &[F]) -> Result<F> {
    if x.is_empty() {
        return Err(CoreError::empty_input("span").into());
    }
    let mut lo = x[0];
    let mut hi = x[0];
    for &v in &x[1..] {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    Ok(hi - lo)
}

/// Standard error of the mean
pub fn sem<F: Float>(x: &[F]) -> Result<F> {
    let u = weights_core::uniform_weights::<F>(x.len())?;
    let sd = weights_reduce::std(x, &u, true)?;
    Ok(sd / F::from(x.len()).unwrap().sqrt())
}

/// Coefficient of variation, the corrected standard deviation over the mean
pub fn variation<F: Float>(x: &[F]) -> Result<F> {
    let u = weights_core::uniform_weights::<F>(x.len())?;
    let sd = weights_reduce::std(x, &u, true)?;
    let m = weights_reduce::mean(&aview1(x), &u)?;
    Ok(sd / m)
}

/// `k`-th weighted central moment about the weighted mean
pub fn moment<F, W>(x: &[F], k: u32, w: &W) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    if x.len() != w.len() {
        return Err(CoreError::length_mismatch(x.len(), w.len(), "weighted moment").into());
    }
    if x.is_empty() {
        return Err(CoreError::empty_input("weighted moment").into());
    }
    let mu = weights_reduce::mean(&aview1(x), w)?;
    let uniform = w.kind().is_uniform();
    let mut acc = F::zero();
    for (i, &v) in x.iter().enumerate() {
        let d = (v - mu).powi(k as i32);
        acc = acc + if uniform { d } else { d * w.weight(i) };
    }
    Ok(acc / w.total())
}

/// Weighted skewness (third standardized moment)
pub fn skewness<F, W>(x: &[F], w: &W) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    let m2 = moment(x, 2, w)?;
    let m3 = moment(x, 3, w)?;
    Ok(m3 / m2.powf(F::from(1.5).unwrap()))
}

/// Weighted excess kurtosis (fourth standardized moment minus 3)
pub fn kurtosis<F, W>(x: &[F], w: &W) -> Result<F>
where
    F: Float,
    W: Weighted<F>,
{
    let m2 = moment(x, 2, w)?;
    let m4 = moment(x, 4, w)?;
    Ok(m4 / (m2 * m2) - F::from(3.0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use weights_core::{frequency_weights, uniform_weights};

    #[test]
    fn test_zscore_and_in_place_agree() {
        let x = [1.0, 2.0, 3.0];
        let z = zscore(&x, 2.0, 0.5);
        assert_eq!(z, vec![-2.0, 0.0, 2.0]);

        let mut y = x;
        zscore_mut(&mut y, 2.0, 0.5);
        assert_eq!(y.to_vec(), z);
    }

    #[test]
    fn test_standardize_centers_and_scales() {
        let x = [2.0, 4.0, 6.0, 8.0];
        let z = standardize(&x).unwrap();
        assert_relative_eq!(z.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
        assert!(z[0] < 0.0 && z[3] > 0.0);
    }

    #[test]
    fn test_mad_unnormalized() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(mad(&x, None, false).unwrap(), 1.0);
        // explicit center
        assert_relative_eq!(mad(&x, Some(1.0), false).unwrap(), 2.0);
    }

    #[test]
    fn test_mad_normalized_uses_gaussian_constant() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let m = mad(&x, None, true).unwrap();
        assert_relative_eq!(m, 1.4826, epsilon = 1e-3);
    }

    #[test]
    fn test_mad_mut_matches_mad() {
        let x = [4.0, 1.0, 7.0, 2.0, 9.0];
        let expected = mad(&x, None, true).unwrap();
        let mut buf = x;
        assert_relative_eq!(mad_mut(&mut buf, None, true).unwrap(), expected);
    }

    #[test]
    fn test_mad_empty_fails() {
        assert!(mad::<f64>(&[], None, false).is_err());
        assert!(mad_mut::<f64>(&mut [], None, false).is_err());
    }

    #[test]
    fn test_iqr_and_span() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(iqr(&x).unwrap(), 2.0);
        assert_relative_eq!(span(&x).unwrap(), 4.0);
        assert!(span::<f64>(&[]).is_err());
    }

    #[test]
    fn test_sem_and_variation() {
        let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = (32.0f64 / 7.0).sqrt();
        assert_relative_eq!(sem(&x).unwrap(), sd / 8.0f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(variation(&x).unwrap(), sd / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_moment_matches_replication() {
        let x = [1.0, 2.0, 3.0];
        let w = frequency_weights(&[1.0, 2.0, 1.0]).unwrap();
        let expanded = [1.0, 2.0, 2.0, 3.0];
        let u = uniform_weights::<f64>(4).unwrap();
        for k in 2..=4 {
            assert_relative_eq!(
                moment(&x, k, &w).unwrap(),
                moment(&expanded, k, &u).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_symmetric_sample_has_zero_skewness() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let u = uniform_weights::<f64>(5).unwrap();
        assert_relative_eq!(skewness(&x, &u).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_kurtosis_of_two_point_sample() {
        // symmetric two-point distribution has excess kurtosis -2
        let x = [-1.0, 1.0];
        let u = uniform_weights::<f64>(2).unwrap();
        assert_relative_eq!(kurtosis(&x, &u).unwrap(), -2.0, epsilon = 1e-12);
    }
}
