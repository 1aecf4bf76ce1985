//! # Matrix Norms and Distances
//!
//! Norms and distances evaluated jointly along a pair of axes. An array of
//! dimension n is treated as a stack of matrices; the codomain has
//! dimension n − 2.
//!
//! | Name | Function | Description |
//! |------|----------|-------------|
//! | `frobenius` | `norm_frobenius` | Euclidean norm over both axes |
//! | `pq` | `norm_pq` | p-norm along the first axis, then q-norm along the second |
//!
//! Also converts between matrices and labeled cell maps.

use std::collections::BTreeMap;

use ndarray::{Array2, ArrayBase, ArrayD, ArrayViewD, Data, Dimension, Ix2};

use crate::config;
use crate::core::array::{self, dyn_view, sum_axes, ArrayLike, Axes};
use crate::core::params::Params;
use crate::core::registry::{self, Callable, Category, Metadata, Registry};
use crate::core::vector::{self, check_exponent};
use crate::error::{MathError, Result};

/// Default axes of matrix functions
pub const MATRIX_AXES: (usize, usize) = (0, 1);

// Ordered pair of distinct axes, which are in range of an array of dimension ndim
fn resolve_pair(axes: Axes, ndim: usize) -> Result<(usize, usize)> {
    let (a, b) = axes.pair()?;
    Axes::from((a, b)).resolve(ndim)?;
    Ok((a, b))
}

/// Frobenius norm: √Σᵢⱼxᵢⱼ²
pub fn norm_frobenius<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let pair = resolve_pair(axes.into(), x.ndim())?;
    vector::norm_euclid(x, pair)
}

/// pq-norm: (Σⱼ(Σᵢ|xᵢⱼ|ᵖ)^(q/p))^(1/q)
///
/// The inner p-sum runs along the first axis of `axes`, the outer q-sum
/// along the second.
pub fn norm_pq<S, D>(x: &ArrayBase<S, D>, p: f64, q: f64, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let (a, b) = resolve_pair(axes.into(), x.ndim())?;
    check_exponent("p", p)?;
    check_exponent("q", q)?;

    if p == 2.0 && q == 2.0 {
        return norm_frobenius(x, (a, b));
    }
    if p == q {
        return vector::norm_p(x, p, (a, b));
    }

    // The second axis shifts, when the first one is collapsed before it
    let (axis_p, axis_q) = if a < b { (a, b - 1) } else { (a, b) };

    let x = dyn_view(x);
    let psum = sum_axes(x.mapv(|v| v.abs().powf(p)), &[axis_p]);
    let qsum = sum_axes(psum.mapv_into(|v| v.powf(q / p)), &[axis_q]);
    Ok(qsum.mapv_into(|v| v.powf(1.0 / q)))
}

/// Frobenius distance, induced by the Frobenius norm
pub fn dist_frobenius<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let d = array::difference(&dyn_view(x), &dyn_view(y))?;
    norm_frobenius(&d, axes)
}

/// pq-distance, induced by the pq-norm
pub fn dist_pq<S, T, D>(
    x: &ArrayBase<S, D>,
    y: &ArrayBase<T, D>,
    p: f64,
    q: f64,
    axes: impl Into<Axes>,
) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let d = array::difference(&dyn_view(x), &dyn_view(y))?;
    norm_pq(&d, p, q, axes)
}

//
// Dispatch
//

/// Sorted names of matrix norms
pub fn norms() -> Result<Vec<String>> {
    registry::list_names(Category::MatrixNorm)
}

/// Sorted names of matrix distances
pub fn distances() -> Result<Vec<String>> {
    registry::list_names(Category::MatrixDistance)
}

/// Evaluate matrix norm by name
pub fn norm<X>(x: &X, name: &str, axes: impl Into<Axes>, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    registry::resolve(Category::MatrixNorm, name)?.eval_reduce(x.view(), &axes.into(), params)
}

/// Evaluate matrix distance by name
pub fn distance<X, Y>(x: &X, y: &Y, name: &str, axes: impl Into<Axes>, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    let y = y.to_array()?;
    array::check_shapes(&x.view(), &y.view())?;
    registry::resolve(Category::MatrixDistance, name)?.eval_compare(x.view(), y.view(), &axes.into(), params)
}

/// Evaluate the configured default matrix norm along the first two axes
pub fn norm_default<X>(x: &X) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    norm(x, &config::DEFAULT_MATRIX_NORM, MATRIX_AXES, &Params::new())
}

/// Evaluate the configured default matrix distance along the first two axes
pub fn distance_default<X, Y>(x: &X, y: &Y) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    distance(x, y, &config::DEFAULT_MATRIX_DISTANCE, MATRIX_AXES, &Params::new())
}

//
// Labeled cells
//

/// Matrix from labeled cells
///
/// Cells `(row, column)` missing in `cells` are filled with `nan`.
pub fn from_pairs<R, C>(cells: &BTreeMap<(String, String), f64>, rows: &[R], columns: &[C], nan: f64) -> Array2<f64>
where
    R: AsRef<str>,
    C: AsRef<str>,
{
    Array2::from_shape_fn((rows.len(), columns.len()), |(i, j)| {
        let key = (rows[i].as_ref().to_string(), columns[j].as_ref().to_string());
        cells.get(&key).copied().unwrap_or(nan)
    })
}

/// Labeled cells from matrix
///
/// Cells equal to `nan` are skipped; NaN matches NaN. With `nan = None`
/// every cell is returned.
pub fn as_pairs<S, R, C>(
    x: &ArrayBase<S, Ix2>,
    rows: &[R],
    columns: &[C],
    nan: Option<f64>,
) -> Result<BTreeMap<(String, String), f64>>
where
    S: Data<Elem = f64>,
    R: AsRef<str>,
    C: AsRef<str>,
{
    if x.dim() != (rows.len(), columns.len()) {
        return Err(MathError::shape_mismatch(&[rows.len(), columns.len()], x.shape()));
    }

    let skip = |v: f64| match nan {
        Some(n) if n.is_nan() => v.is_nan(),
        Some(n) => v == n,
        None => false,
    };

    let mut cells = BTreeMap::new();
    for ((i, j), &v) in x.indexed_iter() {
        if skip(v) {
            continue;
        }
        cells.insert((rows[i].as_ref().to_string(), columns[j].as_ref().to_string()), v);
    }
    Ok(cells)
}

//
// Registration
//

fn reduce_frobenius(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_frobenius(&x, axes)
}

fn reduce_pq(x: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    norm_pq(&x, params.get_or("p", 2.0), params.get_or("q", 2.0), axes)
}

fn compare_frobenius(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_frobenius(&x, &y, axes)
}

fn compare_pq(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    dist_pq(&x, &y, params.get_or("p", 2.0), params.get_or("q", 2.0), axes)
}

/// Publish matrix norms and distances
pub fn register_builtins(registry: &mut Registry) -> Result<()> {
    use Callable::{Compare, Reduce};
    use Category::{MatrixDistance, MatrixNorm};

    let pq = Metadata::new().param("p", 2.0).param("q", 2.0);
    registry.register(MatrixNorm, "frobenius", Reduce(reduce_frobenius), Metadata::new())?;
    registry.register(MatrixNorm, "pq", Reduce(reduce_pq), pq.clone())?;
    registry.register(MatrixDistance, "frobenius", Compare(compare_frobenius), Metadata::new())?;
    registry.register(MatrixDistance, "pq", Compare(compare_pq), pq)?;
    Ok(())
}
