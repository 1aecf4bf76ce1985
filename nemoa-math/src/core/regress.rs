//! # Regression Errors
//!
//! Discrepancy measures between a prediction `x` and observed data `y` of the
//! same shape, reduced along given axes.
//!
//! | Name | Measure | Formula |
//! |------|---------|---------|
//! | `sad` | Sum of Absolute Differences | Σ\|xᵢ − yᵢ\| |
//! | `rss` | Residual Sum of Squares | Σ(xᵢ − yᵢ)² |
//! | `mse` | Mean Squared Error | mean (xᵢ − yᵢ)² |
//! | `mae` | Mean Absolute Error | mean \|xᵢ − yᵢ\| |
//! | `rmse` | Root-Mean-Square Error | √mean (xᵢ − yᵢ)² |

use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension};

use crate::core::array::{self, dyn_view, mean_axes, sum_axes, ArrayLike, Axes};
use crate::core::params::Params;
use crate::core::registry::{self, Callable, Category, Metadata, Registry};
use crate::core::vector;
use crate::error::Result;

fn squared_residuals<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    Ok(array::difference(&dyn_view(x), &dyn_view(y))?.mapv_into(|v| v * v))
}

/// Sum of Absolute Differences
pub fn sad<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    vector::dist_manhattan(x, y, axes)
}

/// Residual Sum of Squares
pub fn rss<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let r = squared_residuals(x, y)?;
    let axes = axes.into().resolve(r.ndim())?;
    Ok(sum_axes(r, &axes))
}

/// Mean Squared Error
pub fn mse<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    let r = squared_residuals(x, y)?;
    let axes = axes.into().resolve(r.ndim())?;
    Ok(mean_axes(r, &axes))
}

/// Mean Absolute Error
pub fn mae<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    vector::dist_amean(x, y, axes)
}

/// Root-Mean-Square Error
pub fn rmse<S, T, D>(x: &ArrayBase<S, D>, y: &ArrayBase<T, D>, axes: impl Into<Axes>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
    D: Dimension,
{
    vector::dist_qmean(x, y, axes)
}

/// Sorted names of regression errors
pub fn errors() -> Result<Vec<String>> {
    registry::list_names(Category::Error)
}

/// Evaluate regression error by name
pub fn error<X, Y>(x: &X, y: &Y, name: &str, axes: impl Into<Axes>, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
    Y: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    let y = y.to_array()?;
    array::check_shapes(&x.view(), &y.view())?;
    registry::resolve(Category::Error, name)?.eval_compare(x.view(), y.view(), &axes.into(), params)
}

fn compare_sad(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    sad(&x, &y, axes)
}

fn compare_rss(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    rss(&x, &y, axes)
}

fn compare_mse(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    mse(&x, &y, axes)
}

fn compare_mae(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    mae(&x, &y, axes)
}

fn compare_rmse(x: ArrayViewD<'_, f64>, y: ArrayViewD<'_, f64>, axes: &Axes, _: &Params) -> Result<ArrayD<f64>> {
    rmse(&x, &y, axes)
}

/// Publish regression errors
pub fn register_builtins(registry: &mut Registry) -> Result<()> {
    use Callable::Compare;
    use Category::Error;

    registry.register(Error, "sad", Compare(compare_sad), Metadata::new())?;
    registry.register(Error, "rss", Compare(compare_rss), Metadata::new())?;
    registry.register(Error, "mse", Compare(compare_mse), Metadata::new().normalized())?;
    registry.register(Error, "mae", Compare(compare_mae), Metadata::new().normalized())?;
    registry.register(Error, "rmse", Compare(compare_rmse), Metadata::new().normalized())?;
    Ok(())
}
