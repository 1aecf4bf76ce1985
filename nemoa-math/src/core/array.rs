//! # Array Utilities
//!
//! Conversion of array-like values into numeric arrays, axis specifications
//! and the axis reductions shared by norms, distances and errors.
//!
//! ## Axis Specification
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `Axes::One(i)` | reduce along axis `i` (default: axis 0) |
//! | `Axes::Many(v)` | reduce along every axis in `v` |
//! | `Axes::All` | reduce along all axes, yielding a 0-d array |
//!
//! The codimension of a reduction is the number of collapsed axes.

use ndarray::{arr0, Array1, Array2, ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension, IxDyn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MathError, Result};

/// Values, that can be interpreted as numeric arrays of arbitrary dimension
///
/// Covers scalars, (nested) sequences, native arrays and JSON documents.
pub trait ArrayLike {
    fn to_array(&self) -> Result<ArrayD<f64>>;
}

impl ArrayLike for f64 {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        Ok(arr0(*self).into_dyn())
    }
}

impl ArrayLike for [f64] {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        Ok(Array1::from(self.to_vec()).into_dyn())
    }
}

impl<const N: usize> ArrayLike for [f64; N] {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        self.as_slice().to_array()
    }
}

impl ArrayLike for Vec<f64> {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        self.as_slice().to_array()
    }
}

impl ArrayLike for Vec<Vec<f64>> {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        let rows = self.len();
        let cols = self.first().map(Vec::len).unwrap_or(0);
        if let Some(row) = self.iter().find(|row| row.len() != cols) {
            return Err(MathError::NotArrayLike(format!(
                "nested sequence is ragged: row of length {} in rows of length {}",
                row.len(),
                cols
            )));
        }
        let flat: Vec<f64> = self.iter().flatten().copied().collect();
        Array2::from_shape_vec((rows, cols), flat)
            .map(|a| a.into_dyn())
            .map_err(|e| MathError::NotArrayLike(e.to_string()))
    }
}

impl<S, D> ArrayLike for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn to_array(&self) -> Result<ArrayD<f64>> {
        Ok(self.to_owned().into_dyn())
    }
}

impl ArrayLike for Value {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        let shape = infer_shape(self);
        let mut data = Vec::new();
        flatten(self, 0, &shape, &mut data)?;
        ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| MathError::NotArrayLike(e.to_string()))
    }
}

impl<T: ArrayLike + ?Sized> ArrayLike for &T {
    fn to_array(&self) -> Result<ArrayD<f64>> {
        (**self).to_array()
    }
}

/// Cast an array-like value to a numeric array
pub fn cast<X: ArrayLike + ?Sized>(x: &X) -> Result<ArrayD<f64>> {
    x.to_array()
}

/// Parse a JSON document into a numeric array
pub fn from_json(text: &str) -> Result<ArrayD<f64>> {
    let value: Value = serde_json::from_str(text)?;
    value.to_array()
}

// Shape as given by the first element on every nesting level
fn infer_shape(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut current = value;
    while let Value::Array(items) = current {
        shape.push(items.len());
        match items.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    shape
}

fn flatten(value: &Value, depth: usize, shape: &[usize], data: &mut Vec<f64>) -> Result<()> {
    match value {
        Value::Array(items) => {
            if depth >= shape.len() || items.len() != shape[depth] {
                return Err(MathError::NotArrayLike(format!(
                    "nested sequence is ragged at depth {}",
                    depth
                )));
            }
            for item in items {
                flatten(item, depth + 1, shape, data)?;
            }
            Ok(())
        }
        Value::Number(n) if depth == shape.len() => {
            let v = n.as_f64().ok_or_else(|| {
                MathError::NotArrayLike(format!("number {} is not representable as f64", n))
            })?;
            data.push(v);
            Ok(())
        }
        Value::Number(_) => Err(MathError::NotArrayLike(format!(
            "nested sequence is ragged at depth {}",
            depth
        ))),
        other => Err(MathError::NotArrayLike(format!(
            "value {} is not numeric",
            other
        ))),
    }
}

/// Array axes, along which a reduction is evaluated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axes {
    /// All axes of the array
    All,
    One(usize),
    Many(Vec<usize>),
}

impl Default for Axes {
    fn default() -> Self {
        Axes::One(0)
    }
}

impl From<usize> for Axes {
    fn from(axis: usize) -> Self {
        Axes::One(axis)
    }
}

impl From<(usize, usize)> for Axes {
    fn from((a, b): (usize, usize)) -> Self {
        Axes::Many(vec![a, b])
    }
}

impl From<Vec<usize>> for Axes {
    fn from(axes: Vec<usize>) -> Self {
        Axes::Many(axes)
    }
}

impl From<&[usize]> for Axes {
    fn from(axes: &[usize]) -> Self {
        Axes::Many(axes.to_vec())
    }
}

impl From<Option<usize>> for Axes {
    fn from(axis: Option<usize>) -> Self {
        axis.map(Axes::One).unwrap_or(Axes::All)
    }
}

impl From<&Axes> for Axes {
    fn from(axes: &Axes) -> Self {
        axes.clone()
    }
}

impl Axes {
    /// Resolve against an array dimension
    ///
    /// Returns the distinct axes in ascending order.
    pub fn resolve(&self, ndim: usize) -> Result<Vec<usize>> {
        let axes: Vec<usize> = match self {
            Axes::All => (0..ndim).collect(),
            Axes::One(axis) => vec![*axis],
            Axes::Many(axes) => axes.clone(),
        };

        if let Some(axis) = axes.iter().find(|&&a| a >= ndim) {
            return Err(MathError::InvalidAxes(format!(
                "axis {} is out of bounds for array of dimension {}",
                axis, ndim
            )));
        }

        let mut sorted = axes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != axes.len() {
            return Err(MathError::InvalidAxes(format!(
                "axes {:?} contain repeated entries",
                axes
            )));
        }
        Ok(sorted)
    }

    /// Ordered pair of distinct axes, as required by matrix functions
    pub fn pair(&self) -> Result<(usize, usize)> {
        match self {
            Axes::Many(axes) if axes.len() == 2 => {
                if axes[0] == axes[1] {
                    Err(MathError::InvalidAxes(
                        "first and second axis have to be different".into(),
                    ))
                } else {
                    Ok((axes[0], axes[1]))
                }
            }
            Axes::Many(axes) => Err(MathError::InvalidAxes(format!(
                "exactly two axes are required but {} were given",
                axes.len()
            ))),
            other => Err(MathError::InvalidAxes(format!(
                "exactly two axes are required, not {:?}",
                other
            ))),
        }
    }
}

/// View of an arbitrary f64 array with dynamic dimension
#[inline]
pub fn dyn_view<S, D>(x: &ArrayBase<S, D>) -> ArrayViewD<'_, f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.view().into_dyn()
}

/// Sum along resolved axes
pub fn sum_axes(x: ArrayD<f64>, axes: &[usize]) -> ArrayD<f64> {
    let mut acc = x;
    // Descending, so the remaining axis ids stay valid
    for &axis in axes.iter().rev() {
        acc = acc.sum_axis(Axis(axis));
    }
    acc
}

/// Arithmetic mean along resolved axes
pub fn mean_axes(x: ArrayD<f64>, axes: &[usize]) -> ArrayD<f64> {
    let count: usize = axes.iter().map(|&a| x.len_of(Axis(a))).product();
    let n = count as f64;
    sum_axes(x, axes).mapv_into(|v| v / n)
}

/// Fold along resolved axes
pub fn fold_axes<F>(x: ArrayD<f64>, axes: &[usize], init: f64, fold: F) -> ArrayD<f64>
where
    F: Fn(f64, f64) -> f64,
{
    let mut acc = x;
    for &axis in axes.iter().rev() {
        acc = acc.fold_axis(Axis(axis), init, |&a, &v| fold(a, v));
    }
    acc
}

/// Fail unless both arrays have identical shapes
pub fn check_shapes(x: &ArrayViewD<'_, f64>, y: &ArrayViewD<'_, f64>) -> Result<()> {
    if x.shape() != y.shape() {
        return Err(MathError::shape_mismatch(x.shape(), y.shape()));
    }
    Ok(())
}

/// Elementwise difference x - y of two same-shaped arrays
pub fn difference(x: &ArrayViewD<'_, f64>, y: &ArrayViewD<'_, f64>) -> Result<ArrayD<f64>> {
    check_shapes(x, y)?;
    Ok(x - y)
}

/// Value of a single element array
pub fn scalar(x: &ArrayD<f64>) -> Option<f64> {
    if x.len() == 1 {
        x.iter().next().copied()
    } else {
        None
    }
}
