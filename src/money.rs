//! Currency amounts with exactly 2 decimal places.
//!
//! Balances are kept in `rust_decimal` rather than binary floating point so
//! repeated monthly charges and payments never drift by fractions of a cent.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A currency value normalized to cents.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use boat_manager::Money;
///
/// let owed = Money::from_str("200").unwrap();
/// assert_eq!(owed.to_string(), "200.00");
/// assert_eq!(format!("{:>8}", owed), "  200.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, rounding half-cents away from zero.
    pub fn new(value: Decimal) -> Self {
        let mut rounded =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(Self::SCALE);
        Money(rounded)
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, or `None` if the sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// Subtracts `rhs`, or `None` if the difference does not fit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so callers can right-align amounts in the inventory listing
        f.pad(&format!("{:.2}", self.0))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money::from_str("1").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money::from_str("1.5").unwrap();
        assert_eq!(m.to_string(), "1.50");

        let m = Money::from_str("  2.25  ").unwrap();
        assert_eq!(m.to_string(), "2.25");
    }

    #[test]
    fn test_half_cents_round_away_from_zero() {
        assert_eq!(Money::from_str("129.125").unwrap().to_string(), "129.13");
        assert_eq!(Money::from_str("-0.005").unwrap().to_string(), "-0.01");
        assert_eq!(Money::from_str("3.004").unwrap().to_string(), "3.00");
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("100.00").unwrap();
        let b = Money::from_str("37.5").unwrap();

        assert_eq!(a.checked_add(b).unwrap().to_string(), "137.50");
        assert_eq!(a.checked_sub(b).unwrap().to_string(), "62.50");

        let c = a.checked_sub(a).unwrap();
        assert!(c.is_zero());
        assert_eq!(c.to_string(), "0.00");
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::from_str("79228162514264337593543950335").unwrap();
        let one = Money::from_str("1").unwrap();
        let negative_max = Money::from_str("-79228162514264337593543950335").unwrap();

        assert_eq!(max.checked_add(one), None);
        assert_eq!(negative_max.checked_sub(one), None);
        assert!(max.checked_sub(one).is_some());
    }

    #[test]
    fn test_display_honors_width() {
        let m = Money::from_str("5").unwrap();
        assert_eq!(format!("{:>7}", m), "   5.00");
        assert_eq!(format!("{:<7}|", m), "5.00   |");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Money::from_str("ten dollars").is_err());
        assert!(Money::from_str("").is_err());
    }
}
