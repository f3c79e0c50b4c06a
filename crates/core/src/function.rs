/// A scalar function that solvers evaluate.
///
/// Functions must be deterministic, always producing the same value for a
/// given `x`. Solvers may evaluate them many times and may reuse a value
/// they have already computed, so evaluation should be free of side effects.
///
/// Closures and function pointers of type `Fn(f64) -> f64` implement this
/// trait automatically:
///
/// ```rust
/// use tangent_core::Function;
///
/// let cubic = |x: f64| x.powi(3) - x - 2.0;
/// assert_eq!(cubic.eval(2.0), 4.0);
///
/// assert_eq!(f64::sin.eval(0.0), 0.0);
/// ```
///
/// Implement it directly when the function carries parameters:
///
/// ```rust
/// use tangent_core::Function;
///
/// struct Line {
///     slope: f64,
///     intercept: f64,
/// }
///
/// impl Function for Line {
///     fn eval(&self, x: f64) -> f64 {
///         self.slope * x + self.intercept
///     }
/// }
///
/// let line = Line { slope: 2.0, intercept: -1.0 };
/// assert_eq!(line.eval(0.5), 0.0);
/// ```
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shifted(f64);

    impl Function for Shifted {
        fn eval(&self, x: f64) -> f64 {
            x - self.0
        }
    }

    fn evaluate_twice(f: &impl Function, x: f64) -> [f64; 2] {
        [f.eval(x), f.eval(x)]
    }

    #[test]
    fn closures_are_functions() {
        let square = |x: f64| x * x;
        assert_eq!(evaluate_twice(&square, 3.0), [9.0, 9.0]);
    }

    #[test]
    fn function_pointers_are_functions() {
        let [a, b] = evaluate_twice(&f64::cos, 0.0);
        assert_eq!(a, 1.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn structs_can_implement_function() {
        assert_eq!(evaluate_twice(&Shifted(1.5), 2.0), [0.5, 0.5]);
    }
}
