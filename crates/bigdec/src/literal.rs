//! Normalization of textual decimal literals.
//!
//! The accepted syntax is the legacy one:
//! - surrounding whitespace is ignored, and the exact keywords `NaN`, `Infinity`,
//!   `+Infinity`, `-Infinity` and `-0` map straight to sentinels;
//! - the first `d` or `D` is read as the exponent marker;
//! - underscores are dropped, but only before the first decimal point;
//! - strict mode requires the whole string to be a number, non-strict mode takes
//!   the longest numeric prefix and ignores the rest.
//!
//! Exponents beyond the configured limit are not errors: a positive one overflows to
//! `+Infinity`, a negative one underflows to zero.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{decimal::BigDecimal, error::ParseDecimalError, value::Special};

static NUMBER_STRICT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?[0-9]*\.?[0-9]*([eE][+-]?)?([0-9]*))$").expect("valid literal pattern"));
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?[0-9]*\.?[0-9]*([eE][+-]?)?([0-9]*))").expect("valid literal pattern"));
static ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?0*\.?0*([eE][+-]?)?([0-9]*)$").expect("valid zero pattern"));

/// Result of normalizing a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A finite number, not yet bounded to any digit count.
    Literal(BigDecimal),
    /// A sentinel, either spelled out or reached through overflow or a signed zero.
    Special(Special),
    /// Not a decimal literal.
    Failure,
}

/// Classification of the numeric part once the grammar has matched.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NumberParse {
    Value(BigDecimal),
    /// Unparseable, but syntactically all zeros. The sign is not kept.
    Zero,
    Overflow,
    Underflow,
    Invalid,
}

/// Normalizes `text` into a decimal, a sentinel, or a failure.
///
/// `exponent_limit` bounds the magnitude of the exponent field; see the module docs.
#[must_use]
pub fn normalize(text: &str, strict: bool, exponent_limit: u32) -> ParseOutcome {
    let trimmed = text.trim_matches(is_literal_whitespace);

    if let Some(special) = special_keyword(trimmed) {
        return ParseOutcome::Special(special);
    }

    let cleaned = strip_separators(&trimmed.replacen(['d', 'D'], "E", 1));

    let pattern = if strict { &NUMBER_STRICT } else { &NUMBER_PREFIX };
    let Some(captures) = pattern.captures(&cleaned) else {
        return ParseOutcome::Failure;
    };
    let literal = captures.get(1).map_or("", |m| m.as_str());

    match parse_number(literal, &captures, exponent_limit) {
        NumberParse::Value(value) => {
            if value.is_zero() && literal.starts_with('-') {
                ParseOutcome::Special(Special::NegativeZero)
            } else {
                ParseOutcome::Literal(value)
            }
        }
        NumberParse::Zero => ParseOutcome::Literal(BigDecimal::zero()),
        NumberParse::Overflow => {
            tracing::debug!(literal, "literal exponent overflows, returning +Infinity");
            ParseOutcome::Special(Special::PositiveInfinity)
        }
        NumberParse::Underflow => {
            tracing::debug!(literal, "literal exponent underflows, returning zero");
            ParseOutcome::Literal(BigDecimal::zero())
        }
        NumberParse::Invalid => ParseOutcome::Failure,
    }
}

/// Parses the matched literal, classifying failures by the exponent they carry.
fn parse_number(literal: &str, captures: &Captures<'_>, exponent_limit: u32) -> NumberParse {
    let error = match BigDecimal::parse_bounded(literal, u64::from(exponent_limit)) {
        Ok(value) => return NumberParse::Value(value),
        Err(error) => error,
    };

    if ZERO.is_match(literal) {
        return NumberParse::Zero;
    }

    if error != ParseDecimalError::ExponentOutOfRange {
        return NumberParse::Invalid;
    }
    let marker = captures.get(2).map_or("", |m| m.as_str());
    let digits = captures.get(3).map_or("", |m| m.as_str());
    if digits.bytes().all(|b| b == b'0') {
        NumberParse::Invalid
    } else if marker.ends_with('-') {
        NumberParse::Underflow
    } else {
        NumberParse::Overflow
    }
}

fn special_keyword(text: &str) -> Option<Special> {
    match text {
        "NaN" => Some(Special::NaN),
        "Infinity" | "+Infinity" => Some(Special::PositiveInfinity),
        "-Infinity" => Some(Special::NegativeInfinity),
        "-0" => Some(Special::NegativeZero),
        _ => None,
    }
}

/// Drops `_` separators up to the first `.`; the rest is copied verbatim.
fn strip_separators(text: &str) -> String {
    let (head, tail) = match text.find('.') {
        Some(point) => text.split_at(point),
        None => (text, ""),
    };
    let mut out = String::with_capacity(text.len());
    out.extend(head.chars().filter(|&c| c != '_'));
    out.push_str(tail);
    out
}

/// ASCII whitespace plus vertical tab.
fn is_literal_whitespace(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}
