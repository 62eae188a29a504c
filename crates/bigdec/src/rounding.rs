//! Significant-digit rounding of [`BigDecimal`] magnitudes.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::decimal::{BigDecimal, digit_count, pow10};

/// Algorithms for discarding low-order digits.
///
/// Names parse and display in snake_case. The legacy aliases `truncate`, `banker`,
/// `ceil` and `default` are accepted when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round away from zero.
    #[strum(to_string = "up")]
    Up,
    /// Round towards zero.
    #[strum(to_string = "down", serialize = "truncate")]
    Down,
    /// Round to nearest; if equidistant, round away from zero.
    #[default]
    #[strum(to_string = "half_up", serialize = "default")]
    HalfUp,
    /// Round to nearest; if equidistant, round towards zero.
    #[strum(to_string = "half_down")]
    HalfDown,
    /// Round to nearest; if equidistant, round so the last kept digit is even.
    #[strum(to_string = "half_even", serialize = "banker")]
    HalfEven,
    /// Round towards positive infinity.
    #[strum(to_string = "ceiling", serialize = "ceil")]
    Ceiling,
    /// Round towards negative infinity.
    #[strum(to_string = "floor")]
    Floor,
}

impl RoundingMode {
    /// Returns whether the truncated `quotient` should move one unit away from zero.
    ///
    /// `remainder` carries the sign of the number being rounded; `divisor` is the
    /// positive power of ten that was divided out.
    fn should_round_away_from_zero(self, quotient: &BigInt, remainder: &BigInt, divisor: &BigInt) -> bool {
        if remainder.is_zero() {
            return false;
        }

        match self {
            Self::Up => true,
            Self::Down => false,
            Self::Ceiling => remainder.is_positive(),
            Self::Floor => remainder.is_negative(),
            Self::HalfUp => (remainder.abs() * 2) >= *divisor,
            Self::HalfDown => (remainder.abs() * 2) > *divisor,
            Self::HalfEven => {
                let doubled_remainder = remainder.abs() * 2;
                if doubled_remainder > *divisor {
                    true
                } else if doubled_remainder == *divisor {
                    quotient.is_odd()
                } else {
                    false
                }
            }
        }
    }
}

/// A requested significant-digit count.
///
/// `Omitted` and `Digits(0)` round identically (neither bounds the magnitude) but are
/// kept apart because a finite float may only be converted with an explicit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// The caller supplied no digit count.
    #[default]
    Omitted,
    /// The caller asked for this many significant digits. Zero means unbounded.
    Digits(u32),
}

impl Precision {
    #[must_use]
    pub fn is_omitted(self) -> bool {
        matches!(self, Self::Omitted)
    }

    /// Replaces an omitted count with an explicit zero.
    #[must_use]
    pub fn or_explicit_zero(self) -> Self {
        match self {
            Self::Omitted => Self::Digits(0),
            digits => digits,
        }
    }

    /// Returns the digit bound, or `None` when the magnitude is left untouched.
    #[must_use]
    pub fn bound(self) -> Option<u32> {
        match self {
            Self::Digits(digits) if digits > 0 => Some(digits),
            _ => None,
        }
    }
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Self::Digits(digits)
    }
}

impl From<Option<u32>> for Precision {
    fn from(digits: Option<u32>) -> Self {
        digits.map_or(Self::Omitted, Self::Digits)
    }
}

/// A digit count paired with the rounding mode used to reach it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RoundingContext {
    pub precision: Precision,
    pub mode: RoundingMode,
}

impl RoundingContext {
    #[must_use]
    pub fn new(precision: Precision, mode: RoundingMode) -> Self {
        Self { precision, mode }
    }

    /// Bounds `value` to the context's significant-digit count.
    ///
    /// Never fails. The result keeps the exponent implied by the kept digits, so
    /// rounding `123456` to three digits yields `1.23E+5`.
    #[must_use]
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        let Some(digits) = self.precision.bound() else {
            return value.clone();
        };
        let digits = u64::from(digits);
        let precision = value.precision();
        if precision <= digits {
            return value.clone();
        }

        let drop = precision - digits;
        let divisor = pow10(drop);
        let (quotient, remainder) = value.coefficient().div_rem(&divisor);
        let mut coefficient = if self.mode.should_round_away_from_zero(&quotient, &remainder, &divisor) {
            if remainder.is_negative() { quotient - 1 } else { quotient + 1 }
        } else {
            quotient
        };
        let mut exponent = value.exponent().saturating_add(i64::try_from(drop).unwrap_or(i64::MAX));

        // A carry out of the top digit (999 -> 1000) leaves one digit too many; it is a zero.
        if digit_count(&coefficient) > digits {
            coefficient /= 10;
            exponent = exponent.saturating_add(1);
        }

        BigDecimal::new(coefficient, exponent)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn round(text: &str, digits: u32, mode: RoundingMode) -> String {
        let value: BigDecimal = text.parse().unwrap();
        RoundingContext::new(Precision::Digits(digits), mode)
            .round(&value)
            .to_string()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round("123456", 3, RoundingMode::HalfUp), "1.23E+5");
        assert_eq!(round("123556", 3, RoundingMode::HalfUp), "1.24E+5");
        assert_eq!(round("2.5", 1, RoundingMode::HalfUp), "3");
        assert_eq!(round("-2.5", 1, RoundingMode::HalfUp), "-3");
    }

    #[test]
    fn test_round_modes_on_tie() {
        assert_eq!(round("2.5", 1, RoundingMode::HalfDown), "2");
        assert_eq!(round("2.5", 1, RoundingMode::HalfEven), "2");
        assert_eq!(round("3.5", 1, RoundingMode::HalfEven), "4");
        assert_eq!(round("2.1", 1, RoundingMode::Up), "3");
        assert_eq!(round("2.9", 1, RoundingMode::Down), "2");
        assert_eq!(round("-2.1", 1, RoundingMode::Ceiling), "-2");
        assert_eq!(round("-2.1", 1, RoundingMode::Floor), "-3");
        assert_eq!(round("2.1", 1, RoundingMode::Ceiling), "3");
        assert_eq!(round("2.1", 1, RoundingMode::Floor), "2");
    }

    #[test]
    fn test_round_carry() {
        assert_eq!(round("999", 2, RoundingMode::HalfUp), "1.0E+3");
        assert_eq!(round("9.99", 2, RoundingMode::HalfUp), "10");
        assert_eq!(round("-9.96", 2, RoundingMode::HalfUp), "-10");
    }

    #[test]
    fn test_round_short_values_unchanged() {
        assert_eq!(round("1.50", 3, RoundingMode::Down), "1.50");
        assert_eq!(round("0.00", 1, RoundingMode::Up), "0.00");
    }

    #[test]
    fn test_unbounded_precision_is_pass_through() {
        let value: BigDecimal = "3.14159265358979323846".parse().unwrap();
        for precision in [Precision::Omitted, Precision::Digits(0)] {
            let context = RoundingContext::new(precision, RoundingMode::Down);
            assert_eq!(context.round(&value), value);
        }
    }

    #[test]
    fn test_precision_conversions() {
        assert_eq!(Precision::from(None), Precision::Omitted);
        assert_eq!(Precision::from(Some(0)), Precision::Digits(0));
        assert_eq!(Precision::Omitted.or_explicit_zero(), Precision::Digits(0));
        assert_eq!(Precision::Digits(5).or_explicit_zero(), Precision::Digits(5));
        assert_eq!(Precision::Digits(0).bound(), None);
        assert_eq!(Precision::Digits(7).bound(), Some(7));
    }

    #[test]
    fn test_rounding_mode_names() {
        for mode in RoundingMode::iter() {
            assert_eq!(RoundingMode::from_str(&mode.to_string()), Ok(mode));
        }
        assert_eq!(RoundingMode::from_str("truncate"), Ok(RoundingMode::Down));
        assert_eq!(RoundingMode::from_str("banker"), Ok(RoundingMode::HalfEven));
        assert_eq!(RoundingMode::from_str("ceil"), Ok(RoundingMode::Ceiling));
        assert_eq!(RoundingMode::from_str("default"), Ok(RoundingMode::HalfUp));
        assert!(RoundingMode::from_str("sideways").is_err());
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }
}
