//! Feature tour of nemoa-math
//!
//! Demonstrates:
//! 1. Function catalog enumeration
//! 2. Vector and matrix norms by name
//! 3. Curves and composite contrast amplification
//! 4. Regression errors
//! 5. Axiom checks
//!
//! Run with `RUST_LOG=nemoa_math=debug` to see catalog events.

use nemoa_math::core::axioms;
use nemoa_math::prelude::*;
use ndarray::arr2;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nemoa_math=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("nemoa-math feature tour\n");

    println!("1. Function catalog:");
    for category in Category::ALL {
        println!("   {:<16} {}", category.as_str(), list_names(category)?.join(", "));
    }
    println!();

    println!("2. Norms:");
    let x = arr2(&[[3.0, 0.0, -1.0], [4.0, 1.0, 1.0]]);
    println!("   euclid(axis 0)  = {}", norm(&x, "euclid", 0, &Params::new())?);
    println!("   p=1(axis 1)     = {}", norm(&x, "p", 1, &Params::new().with("p", 1.0))?);
    println!("   frobenius       = {}", matrix::norm(&x, "frobenius", (0, 1), &Params::new())?);
    println!("   pq(p=1, q=2)    = {}", matrix::norm_pq(&x, 1.0, 2.0, (0, 1))?);
    println!();

    println!("3. Curves:");
    let r = arr2(&[[0.0, 0.5], [1.0, -1.0]]);
    println!("   logistic        = {}", sigmoid(&r, "logistic", &Params::new())?);
    println!("   gauss           = {}", bell(&r, "gauss", &Params::new())?);
    println!(
        "   dialogistic     = {}",
        dialogistic(&r, curve::DEFAULT_SCALE, curve::DEFAULT_SHARPNESS)?
    );
    println!();

    println!("4. Regression errors:");
    let prediction = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
    let observation = arr2(&[[0.0, 4.0], [3.0, 1.0]]);
    for name in errors()? {
        let e = error(&prediction, &observation, &name, Axes::All, &Params::new())?;
        println!("   {:<5} = {}", name, e);
    }
    println!();

    println!("5. Axiom checks:");
    for name in vector::norms()? {
        let verdict = axioms::check_vector_norm(|x: &ndarray::ArrayD<f64>| norm(x, &name, 0, &Params::new()));
        println!("   norm {:<8} {}", name, if verdict.is_ok() { "ok" } else { "violated" });
    }
    let quasi = axioms::check_norm(|x: &ndarray::ArrayD<f64>| vector::norm_p(x, 0.5, Axes::All));
    println!("   p=0.5 quasi-norm {}", match quasi {
        Ok(()) => "passed on this sample".to_string(),
        Err(e) => e.to_string(),
    });

    Ok(())
}
