//! Generalized means
//!
//! Geometric, harmonic, and power means. These are pure numeric formulas:
//! out-of-domain inputs (negative values under a log or fractional power)
//! propagate NaN per IEEE arithmetic rather than erroring, and the empty
//! input yields NaN.

use num_traits::Float;

/// Geometric mean, computed in the log domain.
///
/// Any zero input yields 0.
pub fn geomean<F: Float>(x: &[F]) -> F {
    let mut acc = F::zero();
    for &v in x {
        acc = acc + v.ln();
    }
    (acc / F::from(x.len()).unwrap()).exp()
}

/// Harmonic mean
pub fn harmmean<F: Float>(x: &[F]) -> F {
    let mut acc = F::zero();
    for &v in x {
        acc = acc + v.recip();
    }
    F::from(x.len()).unwrap() / acc
}

/// Generalized power mean of order `p`.
///
/// `p = 0` yields the geometric mean; `p = ±inf` yield the maximum and
/// minimum. Finite orders are computed against the largest magnitude to stay
/// stable for large `|p|`.
pub fn genmean<F: Float>(x: &[F], p: f64) -> F {
    if x.is_empty() {
        return F::nan();
    }
    if p == 0.0 {
        return geomean(x);
    }
    if p.is_infinite() {
        return if p > 0.0 {
            x.iter().copied().fold(F::neg_infinity(), F::max)
        } else {
            x.iter().copied().fold(F::infinity(), F::min)
        };
    }
    let scale = x.iter().fold(F::zero(), |m, &v| m.max(v.abs()));
    if scale == F::zero() {
        return F::zero();
    }
    let p_f = F::from(p).unwrap();
    let mut acc = F::zero();
    for &v in x {
        acc = acc + (v / scale).powf(p_f);
    }
    scale * (acc / F::from(x.len()).unwrap()).powf(p_f.recip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geomean() {
        assert_relative_eq!(geomean(&[1.0, 4.0, 16.0]), 4.0, epsilon = 1e-12);
        assert_relative_eq!(geomean(&[2.0, 8.0]), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geomean_with_zero_is_zero() {
        assert_eq!(geomean(&[0.0, 4.0, 16.0]), 0.0);
    }

    #[test]
    fn test_geomean_empty_is_nan() {
        assert!(geomean::<f64>(&[]).is_nan());
    }

    #[test]
    fn test_harmmean() {
        assert_relative_eq!(harmmean(&[1.0, 2.0, 4.0]), 12.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_genmean_special_orders() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(genmean(&x, 1.0), 2.5, epsilon = 1e-12);
        assert_relative_eq!(genmean(&x, 0.0), geomean(&x), epsilon = 1e-12);
        assert_relative_eq!(genmean(&x, -1.0), harmmean(&x), epsilon = 1e-12);
        assert_relative_eq!(
            genmean(&x, 2.0),
            (30.0f64 / 4.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_genmean_converges_to_extrema() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(genmean(&x, f64::INFINITY), 4.0);
        assert_eq!(genmean(&x, f64::NEG_INFINITY), 1.0);
        // large finite orders stay finite and approach the extrema
        assert_relative_eq!(genmean(&x, 200.0), 4.0, epsilon = 0.1);
        assert_relative_eq!(genmean(&x, -200.0), 1.0, epsilon = 0.1);
    }

    #[test]
    fn test_genmean_near_zero_order_approaches_geomean() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(genmean(&x, 1e-9), geomean(&x), epsilon = 1e-6);
    }
}
