use thiserror::Error;

/// Errors that can occur when validating a bisection bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s): [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// Function values at the endpoints have the same sign.
    #[error("no sign change: f({left})={left_value}, f({right})={right_value}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },
}

/// The sign of a function value, used to pick the half that keeps the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of `value`.
    pub(super) fn of(value: f64) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if the product of the two values would be negative.
    pub(super) fn opposes(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive)
        )
    }
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite { left, right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}

/// The working bracket and the sign of `f` at its right end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    right_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from validated bounds and the function values there.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` unless the values have strictly
    /// opposite signs.
    pub(super) fn new(
        bounds: Bounds,
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, BracketError> {
        let right_sign = Sign::of(right_value);
        if !Sign::of(left_value).opposes(right_sign) {
            return Err(BracketError::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                left_value,
                right_value,
            });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            right_sign,
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Halves each end before adding so brackets near `f64::MAX` stay finite.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    /// Keeps the half of the bracket that still encloses a sign change.
    ///
    /// A zero at the midpoint moves the right end, matching the rule that only
    /// a strictly negative product moves the left end.
    pub(super) fn bisect(&mut self, midpoint: f64, sign: Sign) {
        if sign.opposes(self.right_sign) {
            self.left = midpoint;
        } else {
            self.right = midpoint;
            self.right_sign = sign;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bounds_reorders_bracket() {
        let bounds = Bounds::new([3.0, 1.0]).expect("valid bracket");
        assert_eq!(bounds.as_array(), [1.0, 3.0]);
    }

    #[test]
    fn bounds_rejects_non_finite() {
        assert!(matches!(
            Bounds::new([f64::NAN, 1.0]),
            Err(BracketError::NonFinite { .. })
        ));
        assert!(matches!(
            Bounds::new([0.0, f64::INFINITY]),
            Err(BracketError::NonFinite { .. })
        ));
    }

    #[test]
    fn bounds_rejects_zero_width() {
        assert_eq!(
            Bounds::new([2.0, 2.0]),
            Err(BracketError::ZeroWidth { value: 2.0 })
        );
    }

    #[test]
    fn sign_of_handles_zero() {
        assert_eq!(Sign::of(-0.5), Sign::Negative);
        assert_eq!(Sign::of(0.0), Sign::Zero);
        assert_eq!(Sign::of(-0.0), Sign::Zero);
        assert_eq!(Sign::of(2.0), Sign::Positive);
    }

    #[test]
    fn zero_never_opposes() {
        assert!(Sign::Positive.opposes(Sign::Negative));
        assert!(Sign::Negative.opposes(Sign::Positive));
        assert!(!Sign::Zero.opposes(Sign::Positive));
        assert!(!Sign::Negative.opposes(Sign::Zero));
        assert!(!Sign::Positive.opposes(Sign::Positive));
    }

    #[test]
    fn new_bracket_rejects_same_sign() {
        let bounds = Bounds::new([0.0, 1.0]).expect("valid bounds");
        let err = Bracket::new(bounds, 2.0, 3.0);
        assert!(matches!(err, Err(BracketError::NoSignChange { .. })));
    }

    #[test]
    fn bisect_moves_the_matching_end() {
        let bounds = Bounds::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");

        // f(1) < 0 opposes f(2) > 0, so the root is in [1, 2].
        bracket.bisect(1.0, Sign::Negative);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 2.0);

        // f(1.5) > 0 matches f(2), so the root is in [1, 1.5].
        bracket.bisect(1.5, Sign::Positive);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 1.5);
    }

    #[test]
    fn bisect_routes_zero_to_right_end() {
        let bounds = Bounds::new([0.0, 2.0]).expect("valid bounds");
        let mut bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");

        bracket.bisect(1.0, Sign::Zero);
        assert_eq!(bracket.as_array(), [0.0, 1.0]);
    }

    #[test]
    fn midpoint_stays_finite_near_max() {
        let bounds = Bounds::new([1.0e308, 1.7e308]).expect("valid bounds");
        let bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");
        assert_relative_eq!(bracket.midpoint(), 1.35e308);

        let bounds = Bounds::new([-f64::MAX, f64::MAX]).expect("valid bounds");
        let bracket = Bracket::new(bounds, -1.0, 1.0).expect("valid bracket");
        assert_eq!(bracket.midpoint(), 0.0);
    }
}
