//! Norm and Metric Axiom Properties
//!
//! Property-based tests over random arrays in ℝ^{3×3×3}.

use nemoa_math::prelude::*;
use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;

const SLACK: f64 = 1e-5;

fn cube_strategy() -> impl Strategy<Value = ArrayD<f64>> {
    prop::collection::vec(-5.0f64..5.0, 27)
        .prop_map(|data| ArrayD::from_shape_vec(IxDyn(&[3, 3, 3]), data).expect("27 elements"))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-8 + 1e-5 * b.abs()
}

proptest! {
    #[test]
    fn test_vector_norms_are_subadditive(x in cube_strategy(), y in cube_strategy()) {
        let xy = &x + &y;
        for name in vector::norms().unwrap() {
            let fx = vector::norm(&x, &name, 0, &Params::new()).unwrap();
            let fy = vector::norm(&y, &name, 0, &Params::new()).unwrap();
            let fxy = vector::norm(&xy, &name, 0, &Params::new()).unwrap();
            for ((a, b), c) in fxy.iter().zip(fx.iter()).zip(fy.iter()) {
                prop_assert!(*a < b + c + SLACK, "{}: {} > {} + {}", name, a, b, c);
            }
        }
    }

    #[test]
    fn test_vector_norms_are_homogeneous(x in cube_strategy(), alpha in -10.0f64..10.0) {
        let ax = x.mapv(|v| alpha * v);
        for name in vector::norms().unwrap() {
            let fx = vector::norm(&x, &name, 0, &Params::new()).unwrap();
            let fax = vector::norm(&ax, &name, 0, &Params::new()).unwrap();
            for (a, b) in fax.iter().zip(fx.iter()) {
                prop_assert!(close(*a, alpha.abs() * b), "{}: {} != |{}| {}", name, a, alpha, b);
            }
        }
    }

    #[test]
    fn test_vector_distances_are_metrics(x in cube_strategy(), y in cube_strategy(), z in cube_strategy()) {
        for name in vector::distances().unwrap() {
            let d = |a: &ArrayD<f64>, b: &ArrayD<f64>| vector::distance(a, b, &name, 0, &Params::new()).unwrap();
            let (dxy, dyx, dyz, dxz) = (d(&x, &y), d(&y, &x), d(&y, &z), d(&x, &z));
            prop_assert!(d(&x, &x).iter().all(|v| *v == 0.0));
            for (a, b) in dxy.iter().zip(dyx.iter()) {
                prop_assert!(*a >= 0.0);
                prop_assert!(close(*a, *b), "{} is not symmetric", name);
            }
            for ((xz, xy), yz) in dxz.iter().zip(dxy.iter()).zip(dyz.iter()) {
                prop_assert!(*xz < xy + yz + SLACK, "{}: triangle inequality", name);
            }
        }
    }

    #[test]
    fn test_matrix_norms_are_subadditive(x in cube_strategy(), y in cube_strategy()) {
        let xy = &x + &y;
        for name in matrix::norms().unwrap() {
            let fx = matrix::norm(&x, &name, (0, 1), &Params::new()).unwrap();
            let fy = matrix::norm(&y, &name, (0, 1), &Params::new()).unwrap();
            let fxy = matrix::norm(&xy, &name, (0, 1), &Params::new()).unwrap();
            prop_assert_eq!(fxy.ndim(), 1);
            for ((a, b), c) in fxy.iter().zip(fx.iter()).zip(fy.iter()) {
                prop_assert!(*a < b + c + SLACK, "{}: {} > {} + {}", name, a, b, c);
            }
        }
    }

    #[test]
    fn test_pq_norm_generalizes_frobenius(x in cube_strategy()) {
        let pq = matrix::norm_pq(&x, 2.0, 2.0, (0, 2)).unwrap();
        let fro = matrix::norm_frobenius(&x, (0, 2)).unwrap();
        for (a, b) in pq.iter().zip(fro.iter()) {
            prop_assert!(close(*a, *b));
        }
    }

    #[test]
    fn test_sigmoids_are_monotone(a in -10.0f64..10.0, b in -10.0f64..10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let x = ndarray::arr1(&[lo, hi]);
        for name in sigmoids().unwrap() {
            let y = sigmoid(&x, &name, &Params::new()).unwrap();
            prop_assert!(y[[0]] <= y[[1]] + 1e-12, "{} decreases on [{}, {}]", name, lo, hi);
        }
    }

    #[test]
    fn test_bells_are_not_negative(x in cube_strategy()) {
        for name in bells().unwrap() {
            let y = bell(&x, &name, &Params::new()).unwrap();
            prop_assert!(y.iter().all(|v| *v >= 0.0), "{} is negative", name);
        }
    }
}
