//! Information-theoretic measures
//!
//! Shannon and Rényi entropy, cross-entropy, and Kullback-Leibler
//! divergence over discrete probability-like vectors. Inputs need not sum
//! to 1: the generalized forms correct by the total mass, so the measures
//! stay defined for unnormalized distributions.

use crate::Result;
use num_traits::Float;
use weights_core::Error as CoreError;

fn check_non_empty<F: Float>(p: &[F], operation: &str) -> Result<()> {
    if p.is_empty() {
        return Err(CoreError::empty_input(operation).into());
    }
    Ok(())
}

fn check_same_length<F: Float>(p: &[F], q: &[F], context: &str) -> Result<()> {
    if p.len() != q.len() {
        return Err(CoreError::length_mismatch(p.len(), q.len(), context).into());
    }
    Ok(())
}

/// Shannon entropy `-Σ p ln p` in nats; zero entries contribute nothing
pub fn entropy<F: Float>(p: &[F]) -> Result<F> {
    check_non_empty(p, "entropy")?;
    let mut acc = F::zero();
    for &pi in p {
        if pi != F::zero() {
            acc = acc - pi * pi.ln();
        }
    }
    Ok(acc)
}

/// Shannon entropy in an arbitrary logarithm base
pub fn entropy_base<F: Float>(p: &[F], base: f64) -> Result<F> {
    Ok(entropy(p)? / F::from(base).unwrap().ln())
}

/// Cross-entropy `-Σ p ln q`; entries with zero `p` contribute nothing
pub fn crossentropy<F: Float>(p: &[F], q: &[F]) -> Result<F> {
    check_non_empty(p, "cross-entropy")?;
    check_same_length(p, q, "cross-entropy")?;
    let mut acc = F::zero();
    for (&pi, &qi) in p.iter().zip(q) {
        if pi != F::zero() {
            acc = acc - pi * qi.ln();
        }
    }
    Ok(acc)
}

/// Cross-entropy in an arbitrary logarithm base
pub fn crossentropy_base<F: Float>(p: &[F], q: &[F], base: f64) -> Result<F> {
    Ok(crossentropy(p, q)? / F::from(base).unwrap().ln())
}

/// Kullback-Leibler divergence `Σ p ln(p/q)`.
///
/// Entries with zero `p` contribute nothing; a zero `q` against nonzero `p`
/// yields infinity.
pub fn kldivergence<F: Float>(p: &[F], q: &[F]) -> Result<F> {
    check_non_empty(p, "KL divergence")?;
    check_same_length(p, q, "KL divergence")?;
    let mut acc = F::zero();
    for (&pi, &qi) in p.iter().zip(q) {
        if pi != F::zero() {
            acc = acc + pi * (pi / qi).ln();
        }
    }
    Ok(acc)
}

/// KL divergence in an arbitrary logarithm base
pub fn kldivergence_base<F: Float>(p: &[F], q: &[F], base: f64) -> Result<F> {
    Ok(kldivergence(p, q)? / F::from(base).unwrap().ln())
}

/// Rényi entropy of order `order ≥ 0`, generalized to unnormalized
/// distributions through the total-mass correction.
///
/// Order 0 is the log count of strictly positive entries, order 1 the
/// Shannon entropy, and order infinity `-ln(max probability)`.
pub fn renyientropy<F: Float>(p: &[F], order: f64) -> Result<F> {
    if order < 0.0 {
        return Err(CoreError::InvalidArgument(format!(
            "Rényi entropy order {order} must be non-negative"
        ))
        .into());
    }
    check_non_empty(p, "Rényi entropy")?;

    let mut scale = F::zero();
    for &pi in p {
        scale = scale + pi;
    }

    if order == 0.0 {
        let support = p.iter().filter(|&&pi| pi > F::zero()).count();
        Ok(F::from(support).unwrap().ln() - scale.ln())
    } else if order == 1.0 {
        let mut acc = F::zero();
        for &pi in p {
            if pi > F::zero() {
                acc = acc - pi * pi.ln();
            }
        }
        Ok(acc / scale + scale.ln())
    } else if order.is_infinite() {
        let max = p.iter().copied().fold(F::neg_infinity(), F::max);
        Ok(scale.ln() - max.ln())
    } else {
        let alpha = F::from(order).unwrap();
        let mut acc = F::zero();
        for &pi in p {
            if pi > F::zero() {
                acc = acc + pi.powf(alpha);
            }
        }
        Ok((acc.ln() - alpha * scale.ln()) / (F::one() - alpha))
    }
}
