//! Classification of floating-point inputs.

use crate::value::Special;

/// The classes a float falls into before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatClass {
    NaN,
    PositiveInfinity,
    NegativeInfinity,
    /// `-0.0`. Numerically equal to `0.0`, told apart by the sign bit.
    NegativeZero,
    /// Any other value, positive zero included.
    Finite,
}

impl FloatClass {
    /// Returns the sentinel this class maps to, or `None` for finite values.
    #[must_use]
    pub fn special(self) -> Option<Special> {
        match self {
            Self::NaN => Some(Special::NaN),
            Self::PositiveInfinity => Some(Special::PositiveInfinity),
            Self::NegativeInfinity => Some(Special::NegativeInfinity),
            Self::NegativeZero => Some(Special::NegativeZero),
            Self::Finite => None,
        }
    }
}

/// Classifies `value`.
#[must_use]
pub fn classify(value: f64) -> FloatClass {
    if value.is_nan() {
        FloatClass::NaN
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            FloatClass::NegativeInfinity
        } else {
            FloatClass::PositiveInfinity
        }
    } else if value == 0.0 && value.is_sign_negative() {
        FloatClass::NegativeZero
    } else {
        FloatClass::Finite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(f64::NAN), FloatClass::NaN);
        assert_eq!(classify(-f64::NAN), FloatClass::NaN);
        assert_eq!(classify(f64::INFINITY), FloatClass::PositiveInfinity);
        assert_eq!(classify(f64::NEG_INFINITY), FloatClass::NegativeInfinity);
        assert_eq!(classify(-0.0), FloatClass::NegativeZero);
        assert_eq!(classify(0.0), FloatClass::Finite);
        assert_eq!(classify(3.25), FloatClass::Finite);
        assert_eq!(classify(-f64::MIN_POSITIVE), FloatClass::Finite);
        assert_eq!(classify(f64::MAX), FloatClass::Finite);
    }

    #[test]
    fn test_special_mapping() {
        assert_eq!(FloatClass::Finite.special(), None);
        assert_eq!(FloatClass::NegativeZero.special(), Some(Special::NegativeZero));
        assert_eq!(FloatClass::NaN.special(), Some(Special::NaN));
    }
}
