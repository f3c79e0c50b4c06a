//! Approximates the real root of x³ - x - 2 on [1, 2] by bisection.
//!
//! # Usage
//!
//! ```text
//! cargo run --example bisection
//! RUST_LOG=debug cargo run --example bisection
//! ```

use std::error::Error;

use log::LevelFilter;
use tangent_observers::{LogObserver, StderrLogger};
use tangent_solvers::equation::bisection::{self, Config};

fn main() -> Result<(), Box<dyn Error>> {
    StderrLogger::init(level_from_env())?;

    let cubic = |x: f64| x.powi(3) - x - 2.0;
    let config = Config::new(50, 1e-3)?;
    let solution = bisection::solve(&cubic, [1.0, 2.0], &config, LogObserver::new("bisection"))?;

    println!();
    println!("=== Bisection ===");
    println!(
        "Approximate root {} with relative error {} after {} iterations",
        solution.x, solution.relative_error, solution.iters
    );
    println!();

    Ok(())
}

fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}
