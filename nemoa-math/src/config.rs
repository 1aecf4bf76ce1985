//! Environment configuration loading from .env files
//!
//! Loads configuration values from .env or environment variables.
//! Used for the default function names of the dispatchers and the
//! parameters of the axiom checks.

use std::env;
use once_cell::sync::Lazy;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn name_var(key: &str, default: &str) -> String {
    ensure_loaded();
    env::var(key)
        .ok()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Load default vector norm name from environment
/// Default: "euclid"
pub fn default_norm() -> String {
    name_var("NEMOA_DEFAULT_NORM", "euclid")
}

/// Load default vector distance name from environment
/// Default: "euclid"
pub fn default_distance() -> String {
    name_var("NEMOA_DEFAULT_DISTANCE", "euclid")
}

/// Load default matrix norm name from environment
/// Default: "frobenius"
pub fn default_matrix_norm() -> String {
    name_var("NEMOA_DEFAULT_MATRIX_NORM", "frobenius")
}

/// Load default matrix distance name from environment
/// Default: "frobenius"
pub fn default_matrix_distance() -> String {
    name_var("NEMOA_DEFAULT_MATRIX_DISTANCE", "frobenius")
}

/// Load default sigmoid name from environment
/// Default: "logistic"
pub fn default_sigmoid() -> String {
    name_var("NEMOA_DEFAULT_SIGMOID", "logistic")
}

/// Load default bell name from environment
/// Default: "gauss"
pub fn default_bell() -> String {
    name_var("NEMOA_DEFAULT_BELL", "gauss")
}

/// Load slack for subadditivity and triangle inequality checks
/// Default: 1e-5
pub fn axiom_tolerance() -> f64 {
    ensure_loaded();
    env::var("NEMOA_AXIOM_TOLERANCE")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v: &f64| v.is_finite() && *v >= 0.0)
        .unwrap_or(1e-5)
}

/// Load number of random trials per axiom check
/// Default: 1
pub fn axiom_trials() -> usize {
    ensure_loaded();
    env::var("NEMOA_AXIOM_TRIALS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v: &usize| *v > 0)
        .unwrap_or(1)
}

/// Load seed of the axiom sampler
/// Default: none (seeded from entropy)
pub fn axiom_seed() -> Option<u64> {
    ensure_loaded();
    env::var("NEMOA_AXIOM_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
}

/// Cached values
pub static DEFAULT_NORM: Lazy<String> = Lazy::new(default_norm);
pub static DEFAULT_DISTANCE: Lazy<String> = Lazy::new(default_distance);
pub static DEFAULT_MATRIX_NORM: Lazy<String> = Lazy::new(default_matrix_norm);
pub static DEFAULT_MATRIX_DISTANCE: Lazy<String> = Lazy::new(default_matrix_distance);
pub static DEFAULT_SIGMOID: Lazy<String> = Lazy::new(default_sigmoid);
pub static DEFAULT_BELL: Lazy<String> = Lazy::new(default_bell);
pub static AXIOM_TOLERANCE: Lazy<f64> = Lazy::new(axiom_tolerance);
pub static AXIOM_TRIALS: Lazy<usize> = Lazy::new(axiom_trials);
pub static AXIOM_SEED: Lazy<Option<u64>> = Lazy::new(axiom_seed);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_non_negative() {
        assert!(*AXIOM_TOLERANCE >= 0.0);
        assert!(*AXIOM_TRIALS >= 1);
    }

    #[test]
    fn test_default_names_are_lowercase() {
        for name in [
            &*DEFAULT_NORM,
            &*DEFAULT_DISTANCE,
            &*DEFAULT_MATRIX_NORM,
            &*DEFAULT_MATRIX_DISTANCE,
            &*DEFAULT_SIGMOID,
            &*DEFAULT_BELL,
        ] {
            assert!(!name.is_empty());
            assert_eq!(name, &name.to_lowercase());
        }
    }
}
