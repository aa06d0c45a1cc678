//! Whole-number rates: VAT, ROT/RUT deductions and discounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A rate from 0 to 100 percent. Configuration files hold the bare number,
/// e.g. `rot_rate: 30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);

    /// Saturates at 100, so it can build constants.
    pub const fn new(value: u8) -> Self {
        Self(if value > 100 { 100 } else { value })
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// This share of `amount`.
    pub fn of(&self, amount: f64) -> f64 {
        amount * self.as_fraction()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i32::from(value),
            ));
        }
        Ok(Self(value))
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_saturates() {
        assert_eq!(Percentage::new(130).value(), 100);
        assert_eq!(Percentage::new(30).value(), 30);
    }

    #[test]
    fn try_from_rejects_over_hundred() {
        let err = Percentage::try_from(130).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { actual: 130, .. }));
    }

    #[test]
    fn of_takes_the_share() {
        assert!((Percentage::new(25).of(3375.0) - 843.75).abs() < 1e-9);
        assert_eq!(Percentage::ZERO.of(999.0), 0.0);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(Percentage::new(50).to_string(), "50%");
    }

    #[test]
    fn config_values_outside_range_fail_to_load() {
        assert_eq!(serde_json::from_str::<Percentage>("30").unwrap(), Percentage::new(30));
        assert!(serde_json::from_str::<Percentage>("150").is_err());
    }
}
