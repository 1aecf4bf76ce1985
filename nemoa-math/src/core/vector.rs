//! # Vector Norms and Distances
//!
//! Magnitudes and pairwise distances of arrays, evaluated along given axes.
//!
//! ## Norms
//!
//! | Name | Function | Formula |
//! |------|----------|---------|
//! | `1` | `norm_1` | Σ\|xᵢ\| |
//! | `euclid` | `norm_euclid` | √Σxᵢ² |
//! | `max` | `norm_max` | max\|xᵢ\| |
//! | `p` | `norm_p` | (Σ\|xᵢ\|ᵖ)^(1/p) |
//! | `pmean` | `norm_pmean` | (mean\|xᵢ\|ᵖ)^(1/p) |
//! | `amean` | `norm_amean` | mean\|xᵢ\| |
//! | `qmean` | `norm_qmean` | √mean xᵢ² |
//!
//! ## Distances
//!
//! Every distance is the norm of the difference x − y: `manhattan` (1-norm),
//! `euclid`, `chebyshev` (max), `minkowski` (p), `pmean`, `amean`, `qmean`.
//!
//! For p ≥ 1 the p-norm and the power mean are norms and induce metrics.
//! For 0 < p < 1 they are quasi-norms, which violate the triangle inequality.
//!
//! The codomain of every function has dimension dim(x) − |axes|.

use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension};

use crate::config;
use crate::core::array::{self, dyn_view, fold_axes, mean_axes, sum_axes, ArrayLike, Axes};
use crate::core::params::Params;
use crate::core::registry::{self, Callable, Category, Metadata, Registry};
use crate::error::{MathError, Result};

/// Validate exponent of p-norms and power means
pub(crate) fn check_exponent(name: &str, p: f64) -> Result<()> {
    if !p.is_finite() || p <= 0.0 {
        return Err(MathError::InvalidParameter(format!(
            "'{}' is required to be a positive real number, not {}",
            name, p
        )));
    }
    Ok(())
}

//
// Norms
//

/// 1-norm: Σ|xᵢ|
pub fn norm_1<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    Ok(sum_axes(x.mapv(f64::abs), &axes))
}

/// Euclidean norm: √Σxᵢ²
pub fn norm_euclid<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    Ok(sum_axes(x.mapv(|v| v * v), &axes).mapv_into(f64::sqrt))
}

/// Maximum norm: max|xᵢ|
///
/// The maximum over an empty axis is 0.
pub fn norm_max<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    Ok(fold_axes(x.mapv(f64::abs), &axes, 0.0, f64::max))
}

/// p-norm: (Σ|xᵢ|ᵖ)^(1/p)
///
/// A norm for p ≥ 1, a quasi-norm for 0 < p < 1.
pub fn norm_p<S, D>(x: &ArrayBase<S, D>, p: f64, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_exponent("p", p)?;
    if p == 1.0 {
        return norm_1(x, axes);
    }
    if p == 2.0 {
        return norm_euclid(x, axes);
    }

    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    let psum = sum_axes(x.mapv(|v| v.abs().powf(p)), &axes);
    Ok(psum.mapv_into(|v| v.powf(1.0 / p)))
}

/// Hölder mean: (mean|xᵢ|ᵖ)^(1/p)
pub fn norm_pmean<S, D>(x: &ArrayBase<S, D>, p: f64, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_exponent("p", p)?;
    if p == 1.0 {
        return norm_amean(x, axes);
    }
    if p == 2.0 {
        return norm_qmean(x, axes);
    }

    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    let pmean = mean_axes(x.mapv(|v| v.abs().powf(p)), &axes);
    Ok(pmean.mapv_into(|v| v.powf(1.0 / p)))
}

/// Mean absolute: mean|xᵢ|
pub fn norm_amean<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    Ok(mean_axes(x.mapv(f64::abs), &axes))
}

/// Quadratic mean: √mean xᵢ²
pub fn norm_qmean<S, D>(x: &ArrayBase<S, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let x = dyn_view(x);
    let axes = axes.into().resolve(x.ndim())?;
    Ok(mean_axes(x.mapv(|v| v * v), &axes).mapv_into(f64::sqrt))
}

//
// Distances
//

fn diff<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    array::difference(&dyn_view(x), &dyn_view(y))
}

/// Manhattan distance, induced by the 1-norm
pub fn dist_manhattan<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_1(&diff(x, y)?, axes)
}

/// Euclidean distance, induced by the Euclidean norm
pub fn dist_euclid<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_euclid(&diff(x, y)?, axes)
}

/// Chebyshev distance, induced by the maximum norm
pub fn dist_chebyshev<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_max(&diff(x, y)?, axes)
}

/// Minkowski distance, induced by the p-norm
///
/// A metric for p ≥ 1, a quasi-metric for 0 < p < 1.
pub fn dist_minkowski<S, T, D>(
    x: &ArrayBase<S, D>,
    y: &ArrayBase<T, D>,
    p: f64,
    axes: impl Into<Axes>,
) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_p(&diff(x, y)?, p, axes)
}

/// Power mean difference, induced by the Hölder mean
pub fn dist_pmean<S, T, D>(
    x: &ArrayBase<S, D>,
    y: &ArrayBase<T, D>,
    p: f64,
    axes: impl Into<Axes>,
) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_pmean(&diff(x, y)?, p, axes)
}

/// Mean absolute difference
pub fn dist_amean<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_amean(&diff(x, y)?, axes)
}

/// Quadratic mean difference
pub fn dist_qmean<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    norm_qmean(&diff(x, y)?, axes)
}

//
// Dispatch
//

/// Sorted names of vector norms
pub fn norms() -> Result<Vec<String>> {
    registry::list_names(Category::VectorNorm)
}

/// Sorted names of vector distances
pub fn distances() -> Result<Vec<String>> {
    registry::list_names(Category::VectorDistance)
}

/// Evaluate vector norm by name
///
/// `params` are forwarded to the norm, e.g. `p` for `"p"` and `"pmean"`.
pub fn norm<X>(x: &X, name: &str, axes: impl Into<Axes>, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    registry::resolve(Category::VectorNorm, name)?.eval_reduce(x.view(), &axes.into(), params)
}

/// Evaluate vector distance by name
pub fn distance<X, Y>(x: &X, y: &Y, name: &str, axes: impl Into<Axes>, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    let y = y.to_array()?;
    array::check_shapes(&x.view(), &y.view())?;
    registry::resolve(Category::VectorDistance, name)?.eval_compare(x.view(), y.view(), &axes.into(), params)
}

/// Evaluate the configured default norm (`NEMOA_DEFAULT_NORM`)
pub fn norm_default<X>(x: &X, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    norm(x, &config::DEFAULT_NORM, axes, &Params::new())
}

/// Evaluate the configured default distance (`NEMOA_DEFAULT_DISTANCE`)
pub fn distance_default<X, Y>(x: &X, y: &Y, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    distance(x, y, &config::DEFAULT_DISTANCE, axes, &Params::new())
}

//
// Registration
//

fn reduce_1(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_1(&x, axes)
}

fn reduce_euclid(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_euclid(&x, axes)
}

fn reduce_max(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_max(&x, axes)
}

fn reduce_p(x: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    norm_p(&x, params.get_or("p", 2.0), axes)
}

fn reduce_pmean(x: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    norm_pmean(&x, params.get_or("p", 2.0), axes)
}

fn reduce_amean(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_amean(&x, axes)
}

fn reduce_qmean(x: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    norm_qmean(&x, axes)
}

fn compare_manhattan(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_manhattan(&x, &y, axes)
}

fn compare_euclid(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_euclid(&x, &y, axes)
}

fn compare_chebyshev(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_chebyshev(&x, &y, axes)
}

fn compare_minkowski(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    dist_minkowski(&x, &y, params.get_or("p", 2.0), axes)
}

fn compare_pmean(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
    dist_pmean(&x, &y, params.get_or("p", 2.0), axes)
}

fn compare_amean(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_amean(&x, &y, axes)
}

fn compare_qmean(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    dist_qmean(&x, &y, axes)
}

/// Publish vector norms and distances
pub fn register_builtins(registry: &mut Registry) -> Result<()> {
    use Callable::{Compare, Reduce};
    use Category::{VectorDistance, VectorNorm};

    registry.register(VectorNorm, "1", Reduce(reduce_1), Metadata::new())?;
    registry.register(VectorNorm, "euclid", Reduce(reduce_euclid), Metadata::new())?;
    registry.register(VectorNorm, "max", Reduce(reduce_max), Metadata::new())?;
    registry.register(VectorNorm, "p", Reduce(reduce_p), Metadata::new().param("p", 2.0))?;
    registry.register(VectorNorm, "pmean", Reduce(reduce_pmean), Metadata::new().normalized().param("p", 2.0))?;
    registry.register(VectorNorm, "amean", Reduce(reduce_amean), Metadata::new().normalized())?;
    registry.register(VectorNorm, "qmean", Reduce(reduce_qmean), Metadata::new().normalized())?;

    registry.register(VectorDistance, "manhattan", Compare(compare_manhattan), Metadata::new())?;
    registry.register(VectorDistance, "euclid", Compare(compare_euclid), Metadata::new())?;
    registry.register(VectorDistance, "chebyshev", Compare(compare_chebyshev), Metadata::new())?;
    registry.register(VectorDistance, "minkowski", Compare(compare_minkowski), Metadata::new().param("p", 2.0))?;
    registry.register(
        VectorDistance,
        "pmean",
        Compare(compare_pmean),
        Metadata::new().normalized().param("p", 2.0),
    )?;
    registry.register(VectorDistance, "amean", Compare(compare_amean), Metadata::new().normalized())?;
    registry.register(VectorDistance, "qmean", Compare(compare_qmean), Metadata::new().normalized())?;
    Ok(())
}
