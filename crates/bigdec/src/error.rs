//! Errors returned by decimal creation and parsing.

use std::fmt;

use crate::gate::DomainKind;

/// Error returned by [`create`](crate::create) when no decimal value can be produced.
///
/// Every variant is terminal for the call: no partial value is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// The text is not a decimal literal. Carries the original, untrimmed input.
    InvalidLiteral(String),
    /// A finite float was given without a digit count.
    PrecisionOmitted,
    /// The coercion collaborator produced something that is not a decimal.
    /// Carries the input's type name.
    UnsupportedType(String),
    /// The ambient exception mode asked for an error instead of a sentinel.
    Domain(DomainKind),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLiteral(text) => write!(f, "invalid value for BigDecimal(): {text:?}"),
            Self::PrecisionOmitted => write!(f, "can't omit precision for a Float."),
            Self::UnsupportedType(type_name) => write!(f, "{type_name} can't be coerced into BigDecimal"),
            Self::Domain(kind) => write!(f, "Computation results in '{kind}'"),
        }
    }
}

impl std::error::Error for CreateError {}

/// Error returned when parsing a [`BigDecimal`](crate::BigDecimal) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// The mantissa has no digits.
    Empty,
    /// A character outside the decimal grammar was found.
    InvalidDigit,
    /// An exponent marker was not followed by any digits.
    MissingExponentDigits,
    /// The exponent does not fit the allowed range.
    ExponentOutOfRange,
}

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("decimal literal has no digits"),
            Self::InvalidDigit => f.write_str("invalid character in decimal literal"),
            Self::MissingExponentDigits => f.write_str("exponent marker without digits"),
            Self::ExponentOutOfRange => f.write_str("decimal exponent out of range"),
        }
    }
}

impl std::error::Error for ParseDecimalError {}
