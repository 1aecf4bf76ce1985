//! # nemoa-math - Numerical Core of the nemoa Toolkit
//!
//! Norms, metrics, activation curves and regression errors over `ndarray`
//! arrays, published through a catalog of named functions.
//!
//! ## Modules
//!
//! - **core::vector**: vector norms and distances along given axes
//! - **core::matrix**: Frobenius and induced pq matrix norms and distances
//! - **core::curve**: sigmoids, bells and composite curves
//! - **core::regress**: regression errors (SAD, RSS, MSE, MAE, RMSE)
//! - **core::registry**: name based lookup of all of the above
//! - **core::axioms**: property checks for norms, metrics and curves
//! - **config**: environment configuration (`NEMOA_*`)
//!
//! ## Example
//!
//! ```ignore
//! use nemoa_math::prelude::*;
//!
//! let x = vec![vec![3.0, 0.0], vec![4.0, 1.0]];
//! let n = norm(&x, "euclid", 0, &Params::new())?;   // [5.0, 1.0]
//! let p = norm(&x, "p", 0, &Params::new().with("p", 1.0))?;
//! let names = sigmoids()?;  // ["arctan", "elliot", "hill", ...]
//! ```
//!
//! Matrix dispatchers live in [`core::matrix`] under the same names
//! (`matrix::norm`, `matrix::distance`).

pub mod error;
pub use error::{MathError, Result};

pub mod config;

pub mod core;
pub use crate::core::prelude::*;

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::{axioms, curve, matrix, regress, vector};
    pub use crate::error::{MathError, Result};
}
