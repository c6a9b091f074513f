//! Weighted mode estimation
//!
//! The mode is the value whose accumulated weight is maximal. Accumulation
//! scans the data in its original order with a running maximum, so ties
//! resolve to the first value that reaches the winning mass.

use crate::error::{Error, Result};
use num_traits::float::FloatCore;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use weights_core::{Error as CoreError, Weighted};

fn validate<F, W>(data: &[F], w: &W) -> Result<()>
where
    F: Float,
    W: Weighted<F>,
{
    if data.is_empty() {
        return Err(Error::NoUsableObservations);
    }
    if data.len() != w.len() {
        return Err(CoreError::length_mismatch(data.len(), w.len(), "weighted mode").into());
    }
    for i in 0..w.len() {
        let wi = w.weight(i);
        if Float::is_nan(wi) {
            return Err(CoreError::non_finite_weight(i, f64::NAN).into());
        }
        if wi < F::zero() {
            return Err(CoreError::negative_weight(i, wi.to_f64().unwrap_or(f64::NAN)).into());
        }
    }
    Ok(())
}

/// The value of `data` with maximal total weight.
///
/// Ties resolve to the value that first accumulates the winning mass in the
/// original scan order. Fails if any weight is NaN or negative, or if `data`
/// is empty.
pub fn mode<F, W>(data: &[F], w: &W) -> Result<F>
where
    F: Float + FloatCore + ordered_float::PrimitiveFloat,
    W: Weighted<F>,
{
    validate(data, w)?;
    let mut totals: HashMap<OrderedFloat<F>, F> = HashMap::with_capacity(data.len());
    let mut best_value = data[0];
    let mut best_mass = w.weight(0);
    for (i, &v) in data.iter().enumerate() {
        let entry = totals.entry(OrderedFloat(v)).or_insert_with(F::zero);
        *entry = *entry + w.weight(i);
        if *entry > best_mass {
            best_mass = *entry;
            best_value = v;
        }
    }
    Ok(best_value)
}

/// All values of `data` tied at the maximal total weight, in first-encounter
/// order.
pub fn modes<F, W>(data: &[F], w: &W) -> Result<Vec<F>>
where
    F: Float + FloatCore + ordered_float::PrimitiveFloat,
    W: Weighted<F>,
{
    validate(data, w)?;
    let mut totals: HashMap<OrderedFloat<F>, F> = HashMap::with_capacity(data.len());
    let mut encountered: Vec<F> = Vec::new();
    for (i, &v) in data.iter().enumerate() {
        let entry = totals.entry(OrderedFloat(v)).or_insert_with(|| {
            encountered.push(v);
            F::zero()
        });
        *entry = *entry + w.weight(i);
    }
    let mut max_mass = <F as Float>::neg_infinity();
    for &v in &encountered {
        let mass = totals[&OrderedFloat(v)];
        if mass > max_mass {
            max_mass = mass;
        }
    }
    Ok(encountered
        .into_iter()
        .filter(|&v| totals[&OrderedFloat(v)] == max_mass)
        .collect())
}
