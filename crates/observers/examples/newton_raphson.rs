//! Approximates the real root of x³ - x - 2 by Newton-Raphson from two
//! starting points and prints the iteration table for each.
//!
//! # Usage
//!
//! ```text
//! cargo run --example newton_raphson
//! RUST_LOG=debug cargo run --example newton_raphson
//! ```

use std::error::Error;

use log::LevelFilter;
use tangent_observers::{LogObserver, Report, StderrLogger};
use tangent_solvers::equation::newton_raphson::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    StderrLogger::init(level_from_env())?;

    let cubic = |x: f64| x.powi(3) - x - 2.0;
    let slope = |x: f64| 3.0 * x.powi(2) - 1.0;

    // A starting point close to the root, then one further away.
    for (x0, tol) in [(1.5, 1e-6), (2.0, 1e-8)] {
        let config = Config::new(tol, 50)?;
        let observer = LogObserver::new("newton-raphson");
        let solution = newton_raphson::solve(&cubic, &slope, x0, &config, observer)?;

        println!();
        println!("=== Newton-Raphson (x0 = {x0}, tol = {tol:e}) ===");
        println!("{}", Report::new(&solution));
    }
    println!();

    Ok(())
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}
