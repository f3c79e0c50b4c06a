//! Text reports for Newton-Raphson solutions.
//!
//! ```rust
//! use tangent_observers::Report;
//! use tangent_solvers::equation::newton_raphson;
//!
//! let cubic = |x: f64| x.powi(3) - x - 2.0;
//! let slope = |x: f64| 3.0 * x.powi(2) - 1.0;
//! let config = newton_raphson::Config::default();
//! let solution = newton_raphson::solve_unobserved(&cubic, &slope, 1.5, &config).unwrap();
//!
//! println!("{}", Report::new(&solution));
//! ```

use std::fmt;

use tangent_solvers::equation::newton_raphson::{Iteration, Solution};

const HEADERS: [&str; 3] = ["x", "next", "step"];

/// A column-aligned table of Newton-Raphson iterations.
///
/// Estimates are printed in fixed-point notation and steps in scientific
/// notation, both with [`IterationTable::precision`] digits after the point.
#[derive(Debug, Clone, Copy)]
pub struct IterationTable<'a> {
    history: &'a [Iteration],
    precision: usize,
}

impl<'a> IterationTable<'a> {
    /// Creates a table with four digits after the decimal point.
    #[must_use]
    pub fn new(history: &'a [Iteration]) -> Self {
        Self {
            history,
            precision: 4,
        }
    }

    /// Returns a copy of this table with `precision` digits after the point.
    #[must_use]
    pub fn precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    fn rows(&self) -> Vec<[String; 3]> {
        let p = self.precision;
        self.history
            .iter()
            .map(|it| {
                [
                    format!("{:.p$}", it.x),
                    format!("{:.p$}", it.next),
                    format!("{:.p$e}", it.step),
                ]
            })
            .collect()
    }
}

impl fmt::Display for IterationTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows();

        let mut widths = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let [w0, w1, w2] = widths;
        let [h0, h1, h2] = HEADERS;
        writeln!(f, "{h0:>w0$}  {h1:>w1$}  {h2:>w2$}")?;
        for [c0, c1, c2] in &rows {
            writeln!(f, "{c0:>w0$}  {c1:>w1$}  {c2:>w2$}")?;
        }
        Ok(())
    }
}

/// An iteration table followed by the root and the final step.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    solution: &'a Solution,
    precision: usize,
}

impl<'a> Report<'a> {
    /// Creates a report whose table uses four digits after the point.
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self {
            solution,
            precision: 4,
        }
    }

    /// Returns a copy of this report whose table uses `precision` digits.
    #[must_use]
    pub fn precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = IterationTable::new(&self.solution.history).precision(self.precision);
        write!(f, "{table}")?;
        writeln!(f, "root: {}", self.solution.x)?;
        write!(f, "step: {:e}", self.solution.step)
    }
}
