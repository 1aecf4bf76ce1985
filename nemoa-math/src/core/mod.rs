//! # Numerical Core
//!
//! - Array boundary (array-like inputs, axes, reductions)
//! - Keyword parameters
//! - Function catalog (category → name → function)
//! - Vector norms and distances
//! - Matrix norms and distances
//! - Sigmoid, bell and composite curves
//! - Regression errors
//! - Axiom checks for norms, metrics and curves

pub mod array;
pub mod params;
pub mod registry;

pub mod vector;
pub mod matrix;
pub mod curve;
pub mod regress;

pub mod axioms;

pub use array::{cast, from_json, ArrayLike, Axes};
pub use params::Params;
pub use registry::{catalog, Callable, Category, Entry, Metadata, Registry};

/// Prelude module for core exports
pub mod prelude {
    pub use crate::core::array::{cast, from_json, ArrayLike, Axes};
    pub use crate::core::params::Params;
    pub use crate::core::registry::{catalog, get_metadata, list_names, resolve, Category, Metadata, Registry};
    pub use crate::core::vector::{distance, distances, norm, norms};
    pub use crate::core::curve::{bell, bells, dialogistic, multi_logistic, sigmoid, sigmoids, softstep};
    pub use crate::core::regress::{error, errors};
}
