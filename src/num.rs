use ordered_float::NotNan;

use crate::{Denominator, Error, Result};

/// A non-NaN, non-negative f64 value. Used as the logit scale parameter of a routing objective.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dispersion(NotNan<f64>);

impl Dispersion {
    pub fn new(value: f64) -> Option<Self> {
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() && *value != 0.0 {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// The logit exponent `1 / theta` of the objective this dispersion belongs to.
    pub fn exponent(&self, objective: usize) -> Result<f64> {
        ratio(1.0, self.as_f64(), Denominator::Dispersion(objective))
    }
}

impl std::fmt::Debug for Dispersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `numerator / denominator`, failing instead of producing an infinity or NaN when the denominator
/// is exactly zero.
pub fn ratio(numerator: f64, denominator: f64, which: Denominator) -> Result<f64> {
    if denominator == 0.0 {
        return Err(Error::DivisionByZero(which));
    }
    Ok(numerator / denominator)
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}

#[cfg(test)]
mod test {
    use super::{ratio, Dispersion};
    use crate::{Denominator, Error};

    #[test]
    fn dispersion_limits() {
        assert!(Dispersion::new(f64::NAN).is_none());
        assert!(Dispersion::new(-1e-12).is_none());
        assert!(Dispersion::new(-0.0).unwrap().is_zero());
        assert!(Dispersion::new(0.0).unwrap().is_zero());
        assert_eq!(Dispersion::new(0.25).unwrap().exponent(0), Ok(4.0));
    }

    #[test]
    fn zero_dispersion_has_no_exponent() {
        assert_eq!(
            Dispersion::new(0.0).unwrap().exponent(3),
            Err(Error::DivisionByZero(Denominator::Dispersion(3)))
        );
    }

    #[test]
    fn ratio_rejects_exact_zero_only() {
        assert_eq!(ratio(1.0, 4.0, Denominator::PathCount(0)), Ok(0.25));
        assert_eq!(
            ratio(0.0, 0.0, Denominator::PathCount(2)),
            Err(Error::DivisionByZero(Denominator::PathCount(2)))
        );
        assert_eq!(
            ratio(1.0, -0.0, Denominator::PathCount(1)),
            Err(Error::DivisionByZero(Denominator::PathCount(1)))
        );
        assert!(ratio(1.0, f64::MIN_POSITIVE, Denominator::PathCount(0))
            .unwrap()
            .is_finite());
    }
}
