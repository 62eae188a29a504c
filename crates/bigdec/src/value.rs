//! The decimal value produced by the factory.

use std::fmt;

use crate::decimal::BigDecimal;

/// A value with no ordinary magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize)]
pub enum Special {
    #[strum(to_string = "NaN")]
    NaN,
    #[strum(to_string = "Infinity")]
    PositiveInfinity,
    #[strum(to_string = "-Infinity")]
    NegativeInfinity,
    #[strum(to_string = "-0")]
    NegativeZero,
}

/// An immutable arbitrary-precision decimal, or one of the sentinel values.
///
/// Equality is structural: two `Normal` values are equal when coefficient and exponent
/// both match, and each sentinel is equal only to itself (including `NaN`). Use
/// [`BigDecimal::cmp_value`] for numeric comparison of magnitudes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DecimalValue {
    Normal(BigDecimal),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
    NegativeZero,
}

impl DecimalValue {
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::PositiveInfinity | Self::NegativeInfinity)
    }

    /// Returns true for `Normal` values and negative zero.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Normal(_) | Self::NegativeZero)
    }

    /// Returns true for every sentinel, negative zero included.
    #[must_use]
    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Normal(_))
    }

    /// Returns the magnitude of a `Normal` value.
    #[must_use]
    pub fn magnitude(&self) -> Option<&BigDecimal> {
        match self {
            Self::Normal(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the sentinel tag, if this is not a `Normal` value.
    #[must_use]
    pub fn special(&self) -> Option<Special> {
        match self {
            Self::Normal(_) => None,
            Self::NaN => Some(Special::NaN),
            Self::PositiveInfinity => Some(Special::PositiveInfinity),
            Self::NegativeInfinity => Some(Special::NegativeInfinity),
            Self::NegativeZero => Some(Special::NegativeZero),
        }
    }
}

impl From<Special> for DecimalValue {
    fn from(special: Special) -> Self {
        match special {
            Special::NaN => Self::NaN,
            Special::PositiveInfinity => Self::PositiveInfinity,
            Special::NegativeInfinity => Self::NegativeInfinity,
            Special::NegativeZero => Self::NegativeZero,
        }
    }
}

impl From<BigDecimal> for DecimalValue {
    fn from(value: BigDecimal) -> Self {
        Self::Normal(value)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(value) => fmt::Display::fmt(value, f),
            Self::NaN => fmt::Display::fmt(&Special::NaN, f),
            Self::PositiveInfinity => fmt::Display::fmt(&Special::PositiveInfinity, f),
            Self::NegativeInfinity => fmt::Display::fmt(&Special::NegativeInfinity, f),
            Self::NegativeZero => fmt::Display::fmt(&Special::NegativeZero, f),
        }
    }
}
