//! Approximates ∫₀^π sin(x) dx = 2 with left Riemann sums.
//!
//! # Usage
//!
//! ```text
//! cargo run --example riemann
//! cargo run --example riemann -- 1000
//! ```

use std::{error::Error, f64::consts::PI};

use tangent_solvers::quadrature::riemann;

fn main() -> Result<(), Box<dyn Error>> {
    let n = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => 100,
    };

    let area = riemann::left_sum(&f64::sin, [0.0, PI], n)?;

    println!();
    println!("=== Riemann sum ===");
    println!("Approximation of ∫_0^π sin(x) dx with n={n}: {area}");
    println!("Error: {:e}", (area - 2.0).abs());
    println!();

    Ok(())
}
