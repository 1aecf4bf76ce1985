//! # Keyword Parameters
//!
//! Named numeric parameters forwarded by the dispatchers to the resolved
//! function, e.g. `p` for the p-norm or `n` for the Hill coefficient.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};

/// Ordered map of keyword parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(BTreeMap<String, f64>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder style insertion
    pub fn with(mut self, key: &str, value: f64) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn insert(&mut self, key: &str, value: f64) -> Option<f64> {
        self.0.insert(key.to_string(), value)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Parameter value or fallback
    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge with the declared defaults of function `name`
    ///
    /// Every key has to be declared in `defaults`. Undeclared keys fail with
    /// [`MathError::UnsupportedKeyword`], missing keys take the default value.
    pub fn merged(&self, defaults: &BTreeMap<String, f64>, name: &str) -> Result<Params> {
        if let Some(keyword) = self.keys().find(|k| !defaults.contains_key(*k)) {
            tracing::debug!(function = name, keyword, "rejected unsupported keyword");
            return Err(MathError::UnsupportedKeyword {
                name: name.to_string(),
                keyword: keyword.to_string(),
            });
        }
        let mut merged = defaults.clone();
        merged.extend(self.0.iter().map(|(k, v)| (k.clone(), *v)));
        Ok(Params(merged))
    }
}

impl<const N: usize> From<[(&str, f64); N]> for Params {
    fn from(items: [(&str, f64); N]) -> Self {
        Self(items.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_fills_defaults() {
        let defaults = BTreeMap::from([("p".to_string(), 2.0)]);
        let merged = Params::new().merged(&defaults, "p").unwrap();
        assert_eq!(merged.get("p"), Some(2.0));

        let merged = Params::from([("p", 3.0)]).merged(&defaults, "p").unwrap();
        assert_eq!(merged.get("p"), Some(3.0));
    }

    #[test]
    fn test_insert_replaces_value() {
        let mut params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.insert("p", 1.0), None);
        assert_eq!(params.insert("p", 3.0), Some(1.0));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get_or("q", 2.0), 2.0);
    }

    #[test]
    fn test_merged_rejects_unknown_keyword() {
        let defaults = BTreeMap::new();
        let err = Params::new().with("q", 1.0).merged(&defaults, "euclid").unwrap_err();
        assert_eq!(
            err,
            MathError::UnsupportedKeyword {
                name: "euclid".into(),
                keyword: "q".into()
            }
        );
    }
}
