//! # Curves
//!
//! Elementwise curves used for unit activations and contrast amplification.
//!
//! ## Sigmoids
//!
//! Monotonically increasing, bounded, with a single inflection point.
//!
//! | Function | Formula |
//! |----------|---------|
//! | `logistic` | 1 / (1 + e^(−x)) |
//! | `tanh` | tanh(x) |
//! | `tanh_lecun` | 1.7159 · tanh(0.6666 x) |
//! | `elliot` | x / (1 + \|x\|) |
//! | `hill` | x / (1 + xⁿ)^(1/n), n even |
//! | `arctan` | arctan(x) |
//!
//! ## Bells
//!
//! Non-negative with a single extremal point: `gauss` and the derivatives
//! `d_logistic`, `d_elliot`, `d_hill`, `d_tanh_lecun`, `d_tanh`, `d_arctan`.
//!
//! ## Composite Curves
//!
//! `dialogistic`, `softstep` and `multi_logistic` take a scale and a
//! sharpness parameter. They belong to neither family.

use std::f64::consts::PI;

use ndarray::{Array, ArrayBase, ArrayD, ArrayViewD, Data, Dimension};

use crate::config;
use crate::core::array::ArrayLike;
use crate::core::params::Params;
use crate::core::registry::{self, Callable, Category, Metadata, Registry};
use crate::error::{MathError, Result};

/// Default scale of composite curves
pub const DEFAULT_SCALE: f64 = 1.0;

/// Default sharpness of composite curves
pub const DEFAULT_SHARPNESS: f64 = 10.0;

const LECUN_SCALE: f64 = 1.7159;
const LECUN_SLOPE: f64 = 0.6666;
// LECUN_SCALE * LECUN_SLOPE
const LECUN_GAIN: f64 = 1.14382;

#[inline]
fn logistic_scalar(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn check_hill_coefficient(n: u32) -> Result<()> {
    if n < 2 || n % 2 == 1 {
        return Err(MathError::InvalidParameter(format!(
            "'n' is required to be an even number >= 2, not {}",
            n
        )));
    }
    Ok(())
}

//
// Sigmoids
//

/// Standard logistic function: 1 / (1 + e^(−x))
pub fn logistic<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(logistic_scalar)
}

/// Hyperbolic tangent
pub fn tanh<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(f64::tanh)
}

/// LeCun's scaled hyperbolic tangent: 1.7159 · tanh(0.6666 x)
///
/// Y. LeCun, L. Bottou, G. B. Orr, K. Müller, "Efficient BackProp" (1998)
pub fn tanh_lecun<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| LECUN_SCALE * (LECUN_SLOPE * v).tanh())
}

/// Elliot sigmoid: x / (1 + |x|)
pub fn elliot<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| v / (1.0 + v.abs()))
}

/// Hill type sigmoid: x / (1 + xⁿ)^(1/n)
///
/// The Hill coefficient `n` has to be even.
pub fn hill<S, D>(x: &ArrayBase<S, D>, n: u32) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_hill_coefficient(n)?;
    let n = n as f64;
    let root = 1.0 / n;
    // Outside [-1, 1] factor out |x| so that |x|ⁿ can not overflow
    Ok(x.mapv(|v| {
        let a = v.abs();
        if a <= 1.0 {
            v / (1.0 + a.powf(n)).powf(root)
        } else {
            v.signum() / (1.0 + a.powf(-n)).powf(root)
        }
    }))
}

/// Inverse tangent
pub fn arctan<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(f64::atan)
}

//
// Bells
//

/// Gauss function with location `mu` and scale `sigma`
pub fn gauss<S, D>(x: &ArrayBase<S, D>, mu: f64, sigma: f64) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(MathError::InvalidParameter(format!(
            "'sigma' is required to be a positive real number, not {}",
            sigma
        )));
    }
    let pre = 1.0 / (sigma * (2.0 * PI).sqrt());
    Ok(x.mapv(|v| {
        let z = (v - mu) / sigma;
        pre * (-0.5 * z * z).exp()
    }))
}

/// Derivative of the logistic function
pub fn d_logistic<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| {
        let f = logistic_scalar(v);
        f * (1.0 - f)
    })
}

/// Derivative of the Elliot sigmoid
pub fn d_elliot<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| {
        let d = 1.0 + v.abs();
        1.0 / (d * d)
    })
}

/// Derivative of the Hill type sigmoid
pub fn d_hill<S, D>(x: &ArrayBase<S, D>, n: u32) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_hill_coefficient(n)?;
    let n = n as f64;
    let power = (1.0 + n) / n;
    Ok(x.mapv(|v| {
        let a = v.abs();
        if a <= 1.0 {
            1.0 / (1.0 + a.powf(n)).powf(power)
        } else {
            a.powf(-(n + 1.0)) / (1.0 + a.powf(-n)).powf(power)
        }
    }))
}

/// Derivative of LeCun's hyperbolic tangent
pub fn d_tanh_lecun<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| {
        let c = (LECUN_SLOPE * v).cosh();
        LECUN_GAIN / (c * c)
    })
}

/// Derivative of the hyperbolic tangent
pub fn d_tanh<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| {
        let t = v.tanh();
        1.0 - t * t
    })
}

/// Derivative of the inverse tangent
pub fn d_arctan<S, D>(x: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|v| 1.0 / (1.0 + v * v))
}

//
// Composite curves
//

/// Dialogistic function
///
/// Smooth absolute value built from two logistics shifted by ±scale/2,
/// normalized to 1 at the scale boundary. Maps 0 to 0 and amplifies the
/// contrast of values around ±scale. The sharpness is bounded below by 1e-6,
/// the scale has to be positive.
pub fn dialogistic<S, D>(x: &ArrayBase<S, D>, scale: f64, sigma: f64) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_scale(scale)?;
    let sigma = sigma.max(1e-6);
    let norm = (logistic_scalar(sigma * 0.5 * scale) + logistic_scalar(sigma * 1.5 * scale) - 1.0).abs();
    Ok(x.mapv(|v| {
        let ma = logistic_scalar(sigma * (v - 0.5 * scale));
        let mb = logistic_scalar(sigma * (v + 0.5 * scale));
        v.abs() * (ma + mb - 1.0) / norm
    }))
}

/// Softstep function: tanh(dialogistic(x)) / tanh(scale)
pub fn softstep<S, D>(x: &ArrayBase<S, D>, scale: f64, sigma: f64) -> Result<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let norm = scale.tanh();
    Ok(dialogistic(x, scale, sigma)?.mapv_into(|v| v.tanh() / norm))
}

fn check_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(MathError::InvalidParameter(format!(
            "'scale' is required to be a positive real number, not {}",
            scale
        )));
    }
    Ok(())
}

/// Multiple logistic function
///
/// Staircase of logistic steps of width `scale`. Approximates the identity
/// as scale → 0 or sigma → 0; for `scale == 0` or `sigma == 0` it is the
/// identity.
pub fn multi_logistic<S, D>(x: &ArrayBase<S, D>, scale: f64, sigma: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if scale == 0.0 || sigma == 0.0 {
        return x.to_owned();
    }
    let m = 2.0 / logistic_scalar(sigma) - 1.0;
    x.mapv(|v| {
        let y = v / scale;
        let l = y.floor();
        let r = 2.0 * (y - l) - 1.0;
        scale * (l + (logistic_scalar(sigma * r) / m - 0.5) + 0.5)
    })
}

//
// Dispatch
//

/// Sorted names of sigmoids
pub fn sigmoids() -> Result<Vec<String>> {
    registry::list_names(Category::Sigmoid)
}

/// Sorted names of bells
pub fn bells() -> Result<Vec<String>> {
    registry::list_names(Category::Bell)
}

/// Evaluate sigmoid by name
pub fn sigmoid<X>(x: &X, name: &str, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    registry::resolve(Category::Sigmoid, name)?.eval_curve(x.view(), params)
}

/// Evaluate bell by name
pub fn bell<X>(x: &X, name: &str, params: &Params) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    let x = x.to_array()?;
    registry::resolve(Category::Bell, name)?.eval_curve(x.view(), params)
}

/// Evaluate the configured default sigmoid (`NEMOA_DEFAULT_SIGMOID`)
pub fn sigmoid_default<X>(x: &X) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    sigmoid(x, &config::DEFAULT_SIGMOID, &Params::new())
}

/// Evaluate the configured default bell (`NEMOA_DEFAULT_BELL`)
pub fn bell_default<X>(x: &X) -> Result<ArrayD<f64>>
where
    X: ArrayLike + ?Sized,
{
    bell(x, &config::DEFAULT_BELL, &Params::new())
}

//
// Registration
//

fn hill_param(params: &Params) -> Result<u32> {
    let n = params.get_or("n", 2.0);
    if n.fract() != 0.0 || n < 0.0 || n > u32::MAX as f64 {
        return Err(MathError::InvalidParameter(format!(
            "'n' is required to be an even number >= 2, not {}",
            n
        )));
    }
    Ok(n as u32)
}

fn curve_logistic(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(logistic(&x))
}

fn curve_tanh(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(tanh(&x))
}

fn curve_tanh_lecun(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(tanh_lecun(&x))
}

fn curve_elliot(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(elliot(&x))
}

fn curve_hill(x: ArrayViewD<'_, f64>, params: &Params) -> Result<ArrayD<f64>> {
    hill(&x, hill_param(params)?)
}

fn curve_arctan(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(arctan(&x))
}

fn curve_gauss(x: ArrayViewD<'_, f64>, params: &Params) -> Result<ArrayD<f64>> {
    gauss(&x, params.get_or("mu", 0.0), params.get_or("sigma", 1.0))
}

fn curve_d_logistic(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(d_logistic(&x))
}

fn curve_d_elliot(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(d_elliot(&x))
}

fn curve_d_hill(x: ArrayViewD<'_, f64>, params: &Params) -> Result<ArrayD<f64>> {
    d_hill(&x, hill_param(params)?)
}

fn curve_d_tanh_lecun(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(d_tanh_lecun(&x))
}

fn curve_d_tanh(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(d_tanh(&x))
}

fn curve_d_arctan(x: ArrayViewD<'_, f64>, _: &Params) -> Result<ArrayD<f64>> {
    Ok(d_arctan(&x))
}

/// Publish sigmoids and bells
pub fn register_builtins(registry: &mut Registry) -> Result<()> {
    use Callable::Curve;
    use Category::{Bell, Sigmoid};

    registry.register(Sigmoid, "logistic", Curve(curve_logistic), Metadata::new().normalized())?;
    registry.register(Sigmoid, "tanh", Curve(curve_tanh), Metadata::new().signed().normalized())?;
    registry.register(Sigmoid, "tanh_lecun", Curve(curve_tanh_lecun), Metadata::new().signed())?;
    registry.register(Sigmoid, "elliot", Curve(curve_elliot), Metadata::new().signed().normalized())?;
    registry.register(
        Sigmoid,
        "hill",
        Curve(curve_hill),
        Metadata::new().signed().normalized().param("n", 2.0),
    )?;
    registry.register(Sigmoid, "arctan", Curve(curve_arctan), Metadata::new().signed())?;

    registry.register(
        Bell,
        "gauss",
        Curve(curve_gauss),
        Metadata::new().normalized().param("mu", 0.0).param("sigma", 1.0),
    )?;
    registry.register(Bell, "d_logistic", Curve(curve_d_logistic), Metadata::new().normalized())?;
    registry.register(Bell, "d_elliot", Curve(curve_d_elliot), Metadata::new())?;
    registry.register(Bell, "d_hill", Curve(curve_d_hill), Metadata::new().param("n", 2.0))?;
    registry.register(Bell, "d_tanh_lecun", Curve(curve_d_tanh_lecun), Metadata::new())?;
    registry.register(Bell, "d_tanh", Curve(curve_d_tanh), Metadata::new())?;
    registry.register(Bell, "d_arctan", Curve(curve_d_arctan), Metadata::new())?;
    Ok(())
}
