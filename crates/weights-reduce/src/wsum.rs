//! Dimensional weighted reduction
//!
//! The shared kernel beneath weighted sum, mean, and variance: multiply every
//! slice of an N-dimensional array orthogonal to a chosen axis by a weight
//! vector and sum along that axis, collapsing it to size 1.
//!
//! Accumulation is a plain left-to-right fold per output cell, so results are
//! deterministic for identical inputs; NaN and overflow propagate per IEEE
//! arithmetic.

use ndarray::{Array, ArrayBase, Axis, Data, DataMut, Dimension, RemoveAxis, Zip};
use num_traits::Float;
use weights_core::{Error, Result, Weighted};

fn check_axis<S, D, F>(x: &ArrayBase<S, D>, axis: Axis) -> Result<()>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
{
    if axis.index() >= x.ndim() {
        return Err(Error::axis_out_of_bounds(axis.index(), x.ndim()));
    }
    Ok(())
}

/// Weighted sum of `x` flattened in its natural (logical) iteration order.
///
/// The weight extent must equal the total element count; empty `x` with
/// empty weights yields 0.
pub fn wsum<F, S, D, W>(x: &ArrayBase<S, D>, w: &W) -> Result<F>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension,
    W: Weighted<F>,
{
    if w.len() != x.len() {
        return Err(Error::length_mismatch(x.len(), w.len(), "weighted sum"));
    }
    if w.kind().is_uniform() {
        return Ok(x.iter().fold(F::zero(), |acc, &v| acc + v));
    }
    let mut acc = F::zero();
    for (i, &v) in x.iter().enumerate() {
        acc = acc + v * w.weight(i);
    }
    Ok(acc)
}

/// Weighted sum of `x` along `axis`, collapsing it to size 1.
///
/// The weight extent must equal `x`'s extent along `axis`; the remaining
/// axes are unchanged.
pub fn wsum_axis<F, S, D, W>(x: &ArrayBase<S, D>, w: &W, axis: Axis) -> Result<Array<F, D>>
where
    F: Float,
    S: Data<Elem = F>,
    D: Dimension + RemoveAxis,
    W: Weighted<F>,
{
    check_axis(x, axis)?;
    if w.len() != x.len_of(axis) {
        return Err(Error::length_mismatch(
            x.len_of(axis),
            w.len(),
            "weighted axis sum",
        ));
    }
    let mut dim = x.raw_dim();
    dim.slice_mut()[axis.index()] = 1;
    let mut out = Array::zeros(dim);
    accumulate(&mut out, x, w, axis);
    Ok(out)
}

/// Weighted sum of `x` along `axis` into a caller-owned output buffer.
///
/// With `init` the buffer is overwritten with the fresh reduction; without it
/// the reduction is added onto the existing contents, enabling chained
/// accumulation across calls. `out`'s shape must exactly equal the reduced
/// shape (axis collapsed to 1). The caller guarantees exclusive access to
/// `out` for the duration of the call; the same buffer is returned.
pub fn wsum_into<'a, F, S, S2, D, W>(
    out: &'a mut ArrayBase<S2, D>,
    x: &ArrayBase<S, D>,
    w: &W,
    axis: Axis,
    init: bool,
) -> Result<&'a mut ArrayBase<S2, D>>
where
    F: Float,
    S: Data<Elem = F>,
    S2: DataMut<Elem = F>,
    D: Dimension + RemoveAxis,
    W: Weighted<F>,
{
    check_axis(x, axis)?;
    if w.len() != x.len_of(axis) {
        return Err(Error::length_mismatch(
            x.len_of(axis),
            w.len(),
            "weighted axis sum",
        ));
    }
    let mut expected = x.raw_dim();
    expected.slice_mut()[axis.index()] = 1;
    if out.raw_dim() != expected {
        return Err(Error::shape_mismatch("weighted axis sum"));
    }
    if init {
        out.fill(F::zero());
    }
    accumulate(out, x, w, axis);
    Ok(out)
}

/// Add the reduction of `x` by `w` along `axis` onto `out` (reduced shape,
/// already initialized). Uniform weights skip the multiply.
fn accumulate<F, S, S2, D, W>(out: &mut ArrayBase<S2, D>, x: &ArrayBase<S, D>, w: &W, axis: Axis)
where
    F: Float,
    S: Data<Elem = F>,
    S2: DataMut<Elem = F>,
    D: Dimension + RemoveAxis,
    W: Weighted<F>,
{
    let uniform = w.kind().is_uniform();
    let mut lane = out.index_axis_mut(axis, 0);
    for (i, sub) in x.axis_iter(axis).enumerate() {
        if uniform {
            Zip::from(&mut lane).and(&sub).for_each(|o, &v| *o = *o + v);
        } else {
            let wi = w.weight(i);
            Zip::from(&mut lane).and(&sub).for_each(|o, &v| *o = *o + v * wi);
        }
    }
}
