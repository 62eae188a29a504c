//! Arbitrary-precision decimal magnitude.
//!
//! A [`BigDecimal`] is stored as a coefficient (`BigInt`) and a power-of-ten
//! exponent: value = coefficient * 10^exponent. Trailing zeros are preserved,
//! so `1.50` and `1.5` are distinct representations of the same number.
//!
//! This type only models finite numbers. NaN, the infinities and negative zero
//! live one level up in [`DecimalValue`](crate::DecimalValue).

use std::{cmp::Ordering, fmt, str::FromStr};

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::error::ParseDecimalError;

/// A finite decimal number with an unbounded coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BigDecimal {
    /// The significand. Carries the sign of the number.
    coefficient: BigInt,
    /// The power of ten the coefficient is scaled by.
    exponent: i64,
}

impl BigDecimal {
    /// Creates a decimal from a coefficient and exponent.
    #[must_use]
    pub fn new(coefficient: BigInt, exponent: i64) -> Self {
        Self { coefficient, exponent }
    }

    /// Exact zero with exponent 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::ZERO, 0)
    }

    #[must_use]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Number of digits in the coefficient. Zero has a precision of 1.
    #[must_use]
    pub fn precision(&self) -> u64 {
        digit_count(&self.coefficient)
    }

    /// Returns the adjusted exponent (`precision - 1 + exponent`).
    ///
    /// This is the exponent the number would have in scientific notation with
    /// a single digit before the decimal point.
    #[must_use]
    pub fn adjusted(&self) -> i64 {
        let precision = i64::try_from(self.precision()).unwrap_or(i64::MAX);
        self.exponent.saturating_add(precision - 1)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Compares two decimals by numeric value, ignoring representation.
    ///
    /// `1.50` and `1.5` compare equal here even though they are not `==`.
    #[must_use]
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        let sign_order = sign_rank(self.coefficient.sign()).cmp(&sign_rank(other.coefficient.sign()));
        if sign_order != Ordering::Equal || self.is_zero() {
            return sign_order;
        }

        // Same non-zero sign: compare magnitudes by adjusted exponent first, and only
        // align coefficients when the leading digits sit at the same power of ten.
        let magnitude = match self.adjusted().cmp(&other.adjusted()) {
            Ordering::Equal => {
                let target = self.exponent.min(other.exponent);
                let lhs = self.scaled_coefficient(target);
                let rhs = other.scaled_coefficient(target);
                lhs.abs().cmp(&rhs.abs())
            }
            order => order,
        };
        if self.is_negative() { magnitude.reverse() } else { magnitude }
    }

    /// Parses a decimal literal, rejecting exponent fields larger than `limit` in magnitude.
    ///
    /// The accepted grammar is `[+-]? digits? ('.' digits?)? ([eE] [+-]? digits)?` with at
    /// least one mantissa digit.
    pub fn parse_bounded(text: &str, limit: u64) -> Result<Self, ParseDecimalError> {
        let bytes = text.as_bytes();
        let mut index = 0usize;

        let negative = match bytes.first() {
            Some(b'-') => {
                index += 1;
                true
            }
            Some(b'+') => {
                index += 1;
                false
            }
            _ => false,
        };

        let int_start = index;
        while index < bytes.len() && bytes[index].is_ascii_digit() {
            index += 1;
        }
        let int_digits = &text[int_start..index];

        let mut frac_digits = "";
        if bytes.get(index) == Some(&b'.') {
            index += 1;
            let frac_start = index;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
            frac_digits = &text[frac_start..index];
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let mut exponent: i64 = 0;
        if matches!(bytes.get(index), Some(b'e' | b'E')) {
            index += 1;
            let exponent_negative = match bytes.get(index) {
                Some(b'-') => {
                    index += 1;
                    true
                }
                Some(b'+') => {
                    index += 1;
                    false
                }
                _ => false,
            };
            let exp_start = index;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
            let exp_digits = &text[exp_start..index];
            if exp_digits.is_empty() {
                return Err(ParseDecimalError::MissingExponentDigits);
            }
            let magnitude = parse_exponent_magnitude(exp_digits, limit)?;
            exponent = if exponent_negative { -magnitude } else { magnitude };
        }

        if index != bytes.len() {
            return Err(ParseDecimalError::InvalidDigit);
        }

        let frac_len = i64::try_from(frac_digits.len()).map_err(|_| ParseDecimalError::ExponentOutOfRange)?;
        let exponent = exponent
            .checked_sub(frac_len)
            .ok_or(ParseDecimalError::ExponentOutOfRange)?;

        let mut digits = String::with_capacity(int_digits.len() + frac_digits.len());
        digits.push_str(int_digits);
        digits.push_str(frac_digits);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::InvalidDigit)?;
        let coefficient = if negative { -magnitude } else { magnitude };

        Ok(Self::new(coefficient, exponent))
    }

    /// Returns the coefficient rescaled to `target` (which must not exceed the current exponent).
    fn scaled_coefficient(&self, target: i64) -> BigInt {
        let shift = self.exponent - target;
        if shift <= 0 {
            return self.coefficient.clone();
        }
        &self.coefficient * pow10(u64::try_from(shift).unwrap_or(0))
    }
}

/// Returns `10^power`.
pub(crate) fn pow10(power: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), usize::try_from(power).unwrap_or(usize::MAX))
}

/// Counts the decimal digits of `|value|`; zero counts as one digit.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the float estimate is corrected against an exact power of ten"
)]
pub(crate) fn digit_count(value: &BigInt) -> u64 {
    if value.is_zero() {
        return 1;
    }
    // `bits * log10(2)` is never more than one digit off, so correct the estimate once.
    let estimate = (value.bits() as f64 * std::f64::consts::LOG10_2) as u64;
    let estimate = estimate.max(1);
    if value.magnitude() >= pow10(estimate).magnitude() {
        estimate + 1
    } else {
        estimate
    }
}

fn sign_rank(sign: Sign) -> i8 {
    match sign {
        Sign::Minus => -1,
        Sign::NoSign => 0,
        Sign::Plus => 1,
    }
}

fn parse_exponent_magnitude(digits: &str, limit: u64) -> Result<i64, ParseDecimalError> {
    let significant = digits.trim_start_matches('0');
    // Anything longer than u64::MAX's 20 digits is out of range regardless of the limit.
    if significant.len() > 20 {
        return Err(ParseDecimalError::ExponentOutOfRange);
    }
    let magnitude = if significant.is_empty() {
        0
    } else {
        significant
            .parse::<u64>()
            .map_err(|_| ParseDecimalError::ExponentOutOfRange)?
    };
    if magnitude > limit {
        return Err(ParseDecimalError::ExponentOutOfRange);
    }
    i64::try_from(magnitude).map_err(|_| ParseDecimalError::ExponentOutOfRange)
}

impl FromStr for BigDecimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bounded(s, i64::MAX.unsigned_abs())
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for BigDecimal {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.magnitude().to_string();
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        let len = i64::try_from(digits.len()).unwrap_or(i64::MAX);
        let adjusted = self.exponent.saturating_add(len - 1);

        if self.exponent <= 0 && adjusted >= -6 {
            let point = len + self.exponent;
            if point > 0 {
                let point = usize::try_from(point).unwrap_or(0);
                let (int_part, frac_part) = digits.split_at(point);
                if frac_part.is_empty() {
                    write!(f, "{sign}{int_part}")
                } else {
                    write!(f, "{sign}{int_part}.{frac_part}")
                }
            } else {
                let zeros = usize::try_from(-point).unwrap_or(0);
                write!(f, "{sign}0.{}{digits}", "0".repeat(zeros))
            }
        } else if digits.len() == 1 {
            write!(f, "{sign}{digits}E{adjusted:+}")
        } else {
            let (first, rest) = digits.split_at(1);
            write!(f, "{sign}{first}.{rest}E{adjusted:+}")
        }
    }
}
