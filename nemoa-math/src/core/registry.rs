//! # Function Registry
//!
//! Catalog of named functions, grouped by category. Every family module
//! publishes its functions through a `register_builtins` hook; callers
//! resolve them by name.
//!
//! ```text
//! Category ──► name ──► Entry { callable, metadata }
//! ```
//!
//! The process-wide catalog is built once on first access and is read-only
//! afterwards, so concurrent readers need no locking.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::{ArrayD, ArrayViewD};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::array::Axes;
use crate::core::params::Params;
use crate::error::{MathError, Result};

/// Elementwise curve: f(x)
pub type CurveFn = fn(ArrayViewD<'_, f64>, &Params) -> Result<ArrayD<f64>>;

/// Reduction of one array along axes: ‖x‖
pub type ReduceFn = fn(ArrayViewD<'_, f64>, &Axes, &Params) -> Result<ArrayD<f64>>;

/// Reduction of two same-shaped arrays along axes: d(x, y)
pub type CompareFn = fn(ArrayViewD<'_, f64>, ArrayViewD<'_, f64>, &Axes, &Params) -> Result<ArrayD<f64>>;

/// Function category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    VectorNorm,
    VectorDistance,
    MatrixNorm,
    MatrixDistance,
    Sigmoid,
    Bell,
    Error,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::VectorNorm,
        Category::VectorDistance,
        Category::MatrixNorm,
        Category::MatrixDistance,
        Category::Sigmoid,
        Category::Bell,
        Category::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::VectorNorm => "vector.norm",
            Category::VectorDistance => "vector.distance",
            Category::MatrixNorm => "matrix.norm",
            Category::MatrixDistance => "matrix.distance",
            Category::Sigmoid => "curve.sigmoid",
            Category::Bell => "curve.bell",
            Category::Error => "regress.error",
        }
    }

    fn accepts(&self, callable: &Callable) -> bool {
        match self {
            Category::Sigmoid | Category::Bell => matches!(callable, Callable::Curve(_)),
            Category::VectorNorm | Category::MatrixNorm => matches!(callable, Callable::Reduce(_)),
            Category::VectorDistance | Category::MatrixDistance | Category::Error => {
                matches!(callable, Callable::Compare(_))
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive metadata of a registered function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// d(x, y) and d(y, x) may differ
    pub directed: bool,
    /// Codomain contains negative values
    pub signed: bool,
    /// Averaged or bounded output (means, unit range, unit area)
    pub normalized: bool,
    /// Declared keyword parameters with default values
    pub default_params: BTreeMap<String, f64>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    pub fn signed(mut self) -> Self {
        self.signed = true;
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalized = true;
        self
    }

    /// Declare keyword parameter with default value
    pub fn param(mut self, key: &str, default: f64) -> Self {
        self.default_params.insert(key.to_string(), default);
        self
    }
}

/// Function pointer of a registered entry
#[derive(Clone, Copy)]
pub enum Callable {
    Curve(CurveFn),
    Reduce(ReduceFn),
    Compare(CompareFn),
}

impl Callable {
    fn kind(&self) -> &'static str {
        match self {
            Callable::Curve(_) => "curve",
            Callable::Reduce(_) => "reduce",
            Callable::Compare(_) => "compare",
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable::{}", self.kind())
    }
}

/// Registered function
#[derive(Debug, Clone)]
pub struct Entry {
    pub category: Category,
    pub name: String,
    pub callable: Callable,
    pub metadata: Metadata,
}

impl Entry {
    fn kind_error(&self, expected: &str) -> MathError {
        MathError::InvalidParameter(format!(
            "function '{}' in category '{}' is a {} function, not a {} function",
            self.name,
            self.category,
            self.callable.kind(),
            expected
        ))
    }

    /// Evaluate elementwise curve
    pub fn eval_curve(&self, x: ArrayViewD<'_, f64>, params: &Params) -> Result<ArrayD<f64>> {
        let Callable::Curve(f) = self.callable else {
            return Err(self.kind_error("curve"));
        };
        let params = params.merged(&self.metadata.default_params, &self.name)?;
        f(x, &params)
    }

    /// Evaluate reduction of one array
    pub fn eval_reduce(&self, x: ArrayViewD<'_, f64>, axes: &Axes, params: &Params) -> Result<ArrayD<f64>> {
        let Callable::Reduce(f) = self.callable else {
            return Err(self.kind_error("reduce"));
        };
        let params = params.merged(&self.metadata.default_params, &self.name)?;
        f(x, axes, &params)
    }

    /// Evaluate reduction of two arrays
    pub fn eval_compare(
        &self,
        x: ArrayViewD<'_, f64>,
        y: ArrayViewD<'_, f64>,
        axes: &Axes,
        params: &Params,
    ) -> Result<ArrayD<f64>> {
        let Callable::Compare(f) = self.callable else {
            return Err(self.kind_error("compare"));
        };
        let params = params.merged(&self.metadata.default_params, &self.name)?;
        f(x, y, axes, &params)
    }
}

/// Name table: category → name → entry
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<Category, BTreeMap<String, Entry>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry populated with all built-in families
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        crate::core::vector::register_builtins(&mut registry)?;
        crate::core::matrix::register_builtins(&mut registry)?;
        crate::core::curve::register_builtins(&mut registry)?;
        crate::core::regress::register_builtins(&mut registry)?;
        for category in registry.categories() {
            tracing::debug!(
                category = category.as_str(),
                count = registry.list_names(category).len(),
                "populated function catalog"
            );
        }
        Ok(registry)
    }

    /// Register function under (category, name)
    ///
    /// Names are stored lower-case. A second registration of the same pair
    /// fails with [`MathError::DuplicateName`].
    pub fn register(
        &mut self,
        category: Category,
        name: &str,
        callable: Callable,
        metadata: Metadata,
    ) -> Result<()> {
        let name = name.to_lowercase();
        if !category.accepts(&callable) {
            return Err(MathError::InvalidParameter(format!(
                "category '{}' does not accept {} functions",
                category,
                callable.kind()
            )));
        }

        let names = self.entries.entry(category).or_default();
        if names.contains_key(&name) {
            return Err(MathError::DuplicateName { category, name });
        }

        tracing::trace!(category = category.as_str(), name = %name, "registered function");
        names.insert(
            name.clone(),
            Entry {
                category,
                name,
                callable,
                metadata,
            },
        );
        Ok(())
    }

    /// Sorted names of a category
    pub fn list_names(&self, category: Category) -> Vec<String> {
        // BTreeMap keys iterate in lexicographic order
        self.entries
            .get(&category)
            .map(|names| names.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Resolve entry by (category, name)
    pub fn resolve(&self, category: Category, name: &str) -> Result<&Entry> {
        let key = name.to_lowercase();
        match self.entries.get(&category).and_then(|names| names.get(&key)) {
            Some(entry) => {
                tracing::trace!(category = category.as_str(), name = %key, "resolved function");
                Ok(entry)
            }
            None => {
                tracing::debug!(category = category.as_str(), name, "unknown function name");
                Err(MathError::UnknownName {
                    category,
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn get_metadata(&self, category: Category, name: &str) -> Result<&Metadata> {
        self.resolve(category, name).map(|entry| &entry.metadata)
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.resolve(category, name).is_ok()
    }

    /// Categories with at least one entry
    pub fn categories(&self) -> Vec<Category> {
        self.entries
            .iter()
            .filter(|(_, names)| !names.is_empty())
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static CATALOG: Lazy<Result<Registry>> = Lazy::new(Registry::with_builtins);

/// Process-wide catalog of built-in functions
pub fn catalog() -> Result<&'static Registry> {
    match &*CATALOG {
        Ok(registry) => Ok(registry),
        Err(err) => Err(err.clone()),
    }
}

/// Resolve built-in entry by (category, name)
pub fn resolve(category: Category, name: &str) -> Result<&'static Entry> {
    catalog()?.resolve(category, name)
}

/// Sorted names of a built-in category
pub fn list_names(category: Category) -> Result<Vec<String>> {
    Ok(catalog()?.list_names(category))
}

pub fn get_metadata(category: Category, name: &str) -> Result<&'static Metadata> {
    catalog()?.get_metadata(category, name)
}
