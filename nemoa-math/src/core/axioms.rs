//! # Axiom Checks
//!
//! Reusable property checks for norms, metrics and curves. Every check
//! returns `Ok(())` or a [`MathError::AxiomViolation`] naming the violated
//! property.
//!
//! Random operands are 3×3×3 arrays drawn uniformly from [-5, 5). Curve
//! shapes are sampled on `linspace(-10, 10, 20)`.
//!
//! ```ignore
//! use nemoa_math::core::{axioms, vector};
//!
//! axioms::check_vector_norm(|x| vector::norm_euclid(x, 0))?;
//! ```
//!
//! Tolerance, number of random trials and RNG seed come from the
//! configuration (`NEMOA_AXIOM_TOLERANCE`, `NEMOA_AXIOM_TRIALS`,
//! `NEMOA_AXIOM_SEED`).

use ndarray::{Array1, ArrayD, IxDyn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config;
use crate::error::{MathError, Result};

/// Shape of random operands
pub const SAMPLE_SHAPE: [usize; 3] = [3, 3, 3];

const SAMPLE_LOW: f64 = -5.0;
const SAMPLE_HIGH: f64 = 5.0;

// Tolerances of approximate equality: |a − b| <= ATOL + RTOL · |b|
const RTOL: f64 = 1e-5;
const ATOL: f64 = 1e-8;

/// Evenly spaced samples over [start, stop], both ends included
pub fn linspace(start: f64, stop: f64, num: usize) -> ArrayD<f64> {
    Array1::linspace(start, stop, num).into_dyn()
}

/// Random array source
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// Sampler seeded by `NEMOA_AXIOM_SEED`, or from entropy if unset
    pub fn from_config() -> Self {
        match *config::AXIOM_SEED {
            Some(seed) => Self::seeded(seed),
            None => Self {
                rng: StdRng::from_entropy(),
            },
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Array of given shape, uniform in [-5, 5)
    pub fn sample(&mut self, shape: &[usize]) -> ArrayD<f64> {
        let rng = &mut self.rng;
        ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.gen_range(SAMPLE_LOW..SAMPLE_HIGH))
    }

    fn operand(&mut self) -> ArrayD<f64> {
        self.sample(&SAMPLE_SHAPE)
    }
}

fn violation(axiom: &str, detail: impl Into<String>) -> MathError {
    let detail = detail.into();
    tracing::debug!(axiom, detail = %detail, "axiom check failed");
    MathError::axiom(axiom, detail)
}

fn same_shape(axiom: &str, a: &ArrayD<f64>, b: &ArrayD<f64>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(violation(
            axiom,
            format!("operands have shapes {:?} and {:?}", a.shape(), b.shape()),
        ));
    }
    Ok(())
}

fn all_close(a: &ArrayD<f64>, b: &ArrayD<f64>) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= ATOL + RTOL * y.abs())
}

fn differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Number of sign changes, ignoring zeros
fn sign_changes(values: &[f64]) -> usize {
    let signs: Vec<i8> = values
        .iter()
        .filter_map(|&v| {
            if v > 0.0 {
                Some(1)
            } else if v < 0.0 {
                Some(-1)
            } else {
                None
            }
        })
        .collect();
    signs.windows(2).filter(|w| w[0] != w[1]).count()
}

fn curve_on_grid<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: &F) -> Result<Vec<f64>> {
    Ok(f(&linspace(-10.0, 10.0, 20))?.iter().copied().collect())
}

/// Property checker with explicit sampler, tolerance and trial count
#[derive(Debug, Clone)]
pub struct AxiomCheck {
    sampler: Sampler,
    tolerance: f64,
    trials: usize,
}

impl Default for AxiomCheck {
    fn default() -> Self {
        Self::from_config()
    }
}

impl AxiomCheck {
    pub fn new(sampler: Sampler, tolerance: f64, trials: usize) -> Self {
        Self {
            sampler,
            tolerance,
            trials: trials.max(1),
        }
    }

    /// Checker configured by the `NEMOA_AXIOM_*` variables
    pub fn from_config() -> Self {
        Self::new(Sampler::from_config(), *config::AXIOM_TOLERANCE, *config::AXIOM_TRIALS)
    }

    //
    // Unary functions
    //

    /// dim(x) − dim(f(x)) == codim for x = 0 ∈ ℝ^{3×3×3}
    pub fn codim<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F, codim: usize) -> Result<()> {
        let x: ArrayD<f64> = ArrayD::zeros(IxDyn(&SAMPLE_SHAPE));
        let found = x.ndim() as isize - f(&x)?.ndim() as isize;
        if found != codim as isize {
            return Err(violation("codimension", format!("expected {}, found {}", codim, found)));
        }
        Ok(())
    }

    fn not_negative<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: &F) -> Result<()> {
        for _ in 0..self.trials {
            let x = self.sampler.operand();
            if let Some(v) = f(&x)?.iter().find(|v| !(**v >= 0.0)) {
                return Err(violation("non-negativity", format!("found value {}", v)));
            }
        }
        Ok(())
    }

    fn conserve_zero<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: &F) -> Result<()> {
        let x: ArrayD<f64> = ArrayD::zeros(IxDyn(&SAMPLE_SHAPE));
        let fx = f(&x)?;
        if !all_close(&fx, &ArrayD::zeros(fx.raw_dim())) {
            return Err(violation("zero preservation", "f(0) is not 0"));
        }
        Ok(())
    }

    fn subadditivity<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: &F) -> Result<()> {
        for _ in 0..self.trials {
            let x = self.sampler.operand();
            let y = self.sampler.operand();
            let (fx, fy, fxy) = (f(&x)?, f(&y)?, f(&(&x + &y))?);
            same_shape("subadditivity", &fx, &fxy)?;
            let bound = fx + fy;
            if let Some((a, b)) = fxy.iter().zip(bound.iter()).find(|(a, b)| !(**a < **b + self.tolerance)) {
                return Err(violation("subadditivity", format!("f(x + y) = {} > f(x) + f(y) = {}", a, b)));
            }
        }
        Ok(())
    }

    fn absolute_homogeneity<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: &F) -> Result<()> {
        for _ in 0..self.trials {
            let x = self.sampler.operand();
            let fx = f(&x)?;
            for alpha in linspace(0.0, 10.0, 5).iter().copied() {
                let fax = f(&x.mapv(|v| alpha * v))?;
                same_shape("absolute homogeneity", &fax, &fx)?;
                if !all_close(&fax, &fx.mapv(|v| alpha * v)) {
                    return Err(violation("absolute homogeneity", format!("f({} x) != {} f(x)", alpha, alpha)));
                }
            }
        }
        Ok(())
    }

    /// Non-negativity, zero preservation, subadditivity, absolute homogeneity
    pub fn norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.not_negative(&f)?;
        self.conserve_zero(&f)?;
        self.subadditivity(&f)?;
        self.absolute_homogeneity(&f)
    }

    pub fn vector_norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.codim(&f, 1)?;
        self.norm(f)
    }

    pub fn matrix_norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.codim(&f, 2)?;
        self.norm(f)
    }

    /// Monotonically non-decreasing on linspace(-10, 10, 20)
    pub fn increasing<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        let y = curve_on_grid(&f)?;
        if let Some(d) = differences(&y).into_iter().find(|d| !(*d >= 0.0)) {
            return Err(violation("monotonicity", format!("found decrement {}", d)));
        }
        Ok(())
    }

    /// Increasing with a single inflection point
    pub fn sigmoid<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.increasing(&f)?;
        let y = curve_on_grid(&f)?;
        let count = sign_changes(&differences(&differences(&y)));
        if count != 1 {
            return Err(violation("single inflection point", format!("found {} inflection points", count)));
        }
        Ok(())
    }

    /// Non-negative with a single extremal point
    pub fn bell<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.not_negative(&f)?;
        let y = curve_on_grid(&f)?;
        let count = sign_changes(&differences(&y));
        if count != 1 {
            return Err(violation("single extremal point", format!("found {} extremal points", count)));
        }
        Ok(())
    }

    //
    // Binary functions
    //

    /// dim(x) − dim(f(x, x)) == codim for x = 0 ∈ ℝ^{3×3×3}
    pub fn binary_codim<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F, codim: usize) -> Result<()> {
        let x: ArrayD<f64> = ArrayD::zeros(IxDyn(&SAMPLE_SHAPE));
        let found = x.ndim() as isize - f(&x, &x)?.ndim() as isize;
        if found != codim as isize {
            return Err(violation("codimension", format!("expected {}, found {}", codim, found)));
        }
        Ok(())
    }

    /// Non-negativity, identity of indiscernibles, symmetry
    pub fn semi_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        for _ in 0..self.trials {
            let x = self.sampler.operand();
            let y = self.sampler.operand();

            let fxy = f(&x, &y)?;
            if let Some(v) = fxy.iter().find(|v| !(**v >= 0.0)) {
                return Err(violation("non-negativity", format!("found value {}", v)));
            }

            let fxx = f(&x, &x)?;
            if !all_close(&fxx, &ArrayD::zeros(fxx.raw_dim())) {
                return Err(violation("identity of indiscernibles", "f(x, x) is not 0"));
            }

            let fyx = f(&y, &x)?;
            same_shape("symmetry", &fxy, &fyx)?;
            if !all_close(&fxy, &fyx) {
                return Err(violation("symmetry", "f(x, y) != f(y, x)"));
            }
        }
        Ok(())
    }

    /// Semi-metric satisfying the triangle inequality
    pub fn metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.semi_metric(&f)?;
        for _ in 0..self.trials {
            let x = self.sampler.operand();
            let y = self.sampler.operand();
            let z = self.sampler.operand();
            let (fxy, fyz, fxz) = (f(&x, &y)?, f(&y, &z)?, f(&x, &z)?);
            same_shape("triangle inequality", &fxz, &fxy)?;
            let bound = fxy + fyz;
            if let Some((a, b)) = fxz.iter().zip(bound.iter()).find(|(a, b)| !(**a < **b + self.tolerance)) {
                return Err(violation(
                    "triangle inequality",
                    format!("f(x, z) = {} > f(x, y) + f(y, z) = {}", a, b),
                ));
            }
        }
        Ok(())
    }

    pub fn vector_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.binary_codim(&f, 1)?;
        self.metric(f)
    }

    pub fn matrix_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(&mut self, f: F) -> Result<()> {
        self.binary_codim(&f, 2)?;
        self.metric(f)
    }
}

//
// Configured shortcuts
//

pub fn check_codim<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F, codim: usize) -> Result<()> {
    AxiomCheck::from_config().codim(f, codim)
}

pub fn check_norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().norm(f)
}

pub fn check_vector_norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().vector_norm(f)
}

pub fn check_matrix_norm<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().matrix_norm(f)
}

pub fn check_semi_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().semi_metric(f)
}

pub fn check_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().metric(f)
}

pub fn check_vector_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().vector_metric(f)
}

pub fn check_matrix_metric<F: Fn(&ArrayD<f64>, &ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().matrix_metric(f)
}

pub fn check_increasing<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().increasing(f)
}

pub fn check_sigmoid<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().sigmoid(f)
}

pub fn check_bell<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F) -> Result<()> {
    AxiomCheck::from_config().bell(f)
}

/// |Σf(x) − expected| <= atol
pub fn check_checksum<F: Fn(&ArrayD<f64>) -> Result<ArrayD<f64>>>(f: F, x: &ArrayD<f64>, expected: f64, atol: f64) -> Result<()> {
    let sum = f(x)?.sum();
    if !((sum - expected).abs() <= atol) {
        return Err(violation("checksum", format!("expected {}, found {}", expected, sum)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{curve, matrix, vector};

    fn checker() -> AxiomCheck {
        AxiomCheck::new(Sampler::seeded(42), 1e-5, 3)
    }

    #[test]
    fn test_sampler_range_and_determinism() {
        let a = Sampler::seeded(7).sample(&[4, 5]);
        let b = Sampler::seeded(7).sample(&[4, 5]);
        assert_eq!(a, b);
        assert_eq!(a.shape(), &[4, 5]);
        assert!(a.iter().all(|v| (-5.0..5.0).contains(v)));
    }

    #[test]
    fn test_linspace_includes_endpoints() {
        let x = linspace(-10.0, 10.0, 20);
        assert_eq!(x.len(), 20);
        assert_eq!(x[[0]], -10.0);
        assert!((x[[19]] - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sign_changes_skip_zeros() {
        assert_eq!(sign_changes(&[1.0, 0.0, 2.0, -1.0, 0.0, -3.0]), 1);
        assert_eq!(sign_changes(&[0.0, 0.0]), 0);
        assert_eq!(sign_changes(&[-1.0, 1.0, -1.0]), 2);
    }

    #[test]
    fn test_euclid_is_vector_norm() {
        checker().vector_norm(|x: &ArrayD<f64>| vector::norm_euclid(x, 0)).unwrap();
    }

    #[test]
    fn test_frobenius_is_matrix_metric() {
        checker()
            .matrix_metric(|x: &ArrayD<f64>, y: &ArrayD<f64>| matrix::dist_frobenius(x, y, (0, 1)))
            .unwrap();
    }

    #[test]
    fn test_squared_norm_is_rejected() {
        let err = checker()
            .norm(|x: &ArrayD<f64>| Ok(vector::norm_euclid(x, 0)?.mapv_into(|v| v * v)))
            .unwrap_err();
        assert!(matches!(err, MathError::AxiomViolation { .. }));
    }

    #[test]
    fn test_wrong_codim_is_reported() {
        let err = checker().codim(|x: &ArrayD<f64>| vector::norm_euclid(x, 0), 2).unwrap_err();
        assert!(matches!(err, MathError::AxiomViolation { .. }));
    }

    #[test]
    fn test_curve_shapes() {
        checker().sigmoid(|x: &ArrayD<f64>| Ok(curve::logistic(x))).unwrap();
        checker().bell(|x: &ArrayD<f64>| Ok(curve::d_logistic(x))).unwrap();
        assert!(checker().sigmoid(|x: &ArrayD<f64>| Ok(curve::d_logistic(x))).is_err());
        assert!(checker().bell(|x: &ArrayD<f64>| Ok(curve::logistic(x))).is_err());
    }

    #[test]
    fn test_checksum() {
        let x = ndarray::arr2(&[[0.0, 0.5], [1.0, -1.0]]).into_dyn();
        check_checksum(|x: &ArrayD<f64>| Ok(curve::logistic(x)), &x, 2.122459, 1e-4).unwrap();
        assert!(check_checksum(|x: &ArrayD<f64>| Ok(curve::tanh(x)), &x, 2.122459, 1e-4).is_err());
    }

    #[test]
    fn test_configured_shortcuts() {
        let euclid = |x: &ArrayD<f64>| vector::norm_euclid(x, 0);
        let frobenius = |x: &ArrayD<f64>| matrix::norm_frobenius(x, (0, 1));
        check_codim(euclid, 1).unwrap();
        check_norm(euclid).unwrap();
        check_vector_norm(euclid).unwrap();
        check_matrix_norm(frobenius).unwrap();
        assert!(check_matrix_norm(euclid).is_err());

        let manhattan = |x: &ArrayD<f64>, y: &ArrayD<f64>| vector::dist_manhattan(x, y, 0);
        let frobenius = |x: &ArrayD<f64>, y: &ArrayD<f64>| matrix::dist_frobenius(x, y, (0, 1));
        check_semi_metric(manhattan).unwrap();
        check_metric(manhattan).unwrap();
        check_vector_metric(manhattan).unwrap();
        check_matrix_metric(frobenius).unwrap();
        assert!(check_vector_metric(frobenius).is_err());

        check_increasing(|x: &ArrayD<f64>| Ok(curve::arctan(x))).unwrap();
        check_sigmoid(|x: &ArrayD<f64>| Ok(curve::elliot(x))).unwrap();
        check_bell(|x: &ArrayD<f64>| Ok(curve::d_elliot(x))).unwrap();
        assert!(check_increasing(|x: &ArrayD<f64>| Ok(curve::d_elliot(x))).is_err());
    }
}
