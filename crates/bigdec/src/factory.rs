//! The decimal factory: one entry point, dispatched over a closed set of inputs.

use num_bigint::BigInt;

use crate::{
    classify::classify,
    config::Config,
    decimal::BigDecimal,
    error::CreateError,
    gate::{DomainKind, Gate, gate},
    literal::{ParseOutcome, normalize},
    rounding::{Precision, RoundingContext, RoundingMode},
    value::{DecimalValue, Special},
};

/// Everything [`create`] knows how to turn into a decimal.
#[derive(Clone, Copy)]
pub enum Input<'a> {
    /// A machine integer.
    Int(i64),
    /// A binary floating-point number.
    Float(f64),
    /// An arbitrary-precision integer.
    BigInt(&'a BigInt),
    /// An existing arbitrary-precision decimal magnitude.
    BigDecimal(&'a BigDecimal),
    /// An existing decimal value, sentinel or not.
    Decimal(&'a DecimalValue),
    /// An explicit special constant.
    Special(Special),
    /// A textual literal.
    Str(&'a str),
    /// Anything else numeric-like, converted through [`Coerce`].
    Other(&'a dyn Coerce),
}

impl std::fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Self::Float(value) => f.debug_tuple("Float").field(value).finish(),
            Self::BigInt(value) => f.debug_tuple("BigInt").field(value).finish(),
            Self::BigDecimal(value) => f.debug_tuple("BigDecimal").field(value).finish(),
            Self::Decimal(value) => f.debug_tuple("Decimal").field(value).finish(),
            Self::Special(value) => f.debug_tuple("Special").field(value).finish(),
            Self::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Self::Other(value) => f.debug_tuple("Other").field(&value.type_name()).finish(),
        }
    }
}

/// What a [`Coerce`] implementation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced {
    Decimal(BigDecimal),
    Special(Special),
    /// The value has no numeric interpretation.
    NotNumeric,
}

/// Generic numeric coercion for inputs outside the closed [`Input`] set.
pub trait Coerce {
    /// Name reported in [`CreateError::UnsupportedType`].
    fn type_name(&self) -> &str;

    /// Converts the value under `context`. Errors are returned to the caller unchanged.
    fn coerce(&self, context: &RoundingContext) -> Result<Coerced, CreateError>;
}

/// Creates a decimal value from `input`.
///
/// `config` is read once and used for the whole call. Textual literals and integers
/// default to an explicit zero precision; a finite float requires an explicit one.
///
/// # Examples
///
/// ```
/// use bigdec::{Config, DecimalValue, Precision, create};
///
/// let config = Config::default();
/// let value = create("1_234.5", Precision::Omitted, true, &config)?;
/// assert_eq!(value.to_string(), "1234.5");
///
/// let value = create("1e400", Precision::Omitted, true, &config)?;
/// assert_eq!(value, DecimalValue::PositiveInfinity);
/// # Ok::<_, bigdec::CreateError>(())
/// ```
pub fn create<'a>(
    input: impl Into<Input<'a>>,
    precision: Precision,
    strict: bool,
    config: &Config,
) -> Result<DecimalValue, CreateError> {
    let input = input.into();
    tracing::trace!(?input, ?precision, strict, "creating decimal");
    let mode = config.rounding;

    match input {
        Input::Int(value) => Ok(normal(&BigDecimal::from(value), precision, mode)),
        Input::Float(value) => create_from_float(value, precision, config),
        Input::BigInt(value) => Ok(normal(&BigDecimal::from(value.clone()), precision, mode)),
        Input::BigDecimal(value) => Ok(normal(value, precision, mode)),
        Input::Decimal(DecimalValue::Normal(value)) => Ok(normal(value, precision, mode)),
        Input::Decimal(special) => Ok(special.clone()),
        Input::Special(special) => create_special(special, config),
        Input::Str(text) => create_from_str(text, precision, strict, config),
        Input::Other(value) => create_from_other(value, precision, mode),
    }
}

fn normal(value: &BigDecimal, precision: Precision, mode: RoundingMode) -> DecimalValue {
    DecimalValue::Normal(RoundingContext::new(precision.or_explicit_zero(), mode).round(value))
}

fn create_from_float(value: f64, precision: Precision, config: &Config) -> Result<DecimalValue, CreateError> {
    match classify(value).special() {
        Some(special) => create_special(special, config),
        None if precision.is_omitted() => Err(CreateError::PrecisionOmitted),
        None => Ok(normal(&shortest_decimal(value), precision, config.rounding)),
    }
}

/// Returns the shortest decimal that reads back as `value`, which must be finite.
fn shortest_decimal(value: f64) -> BigDecimal {
    let mut buffer = ryu::Buffer::new();
    buffer
        .format_finite(value)
        .parse()
        .expect("ryu output is a valid decimal literal")
}

/// Returns `special`, unless the exception mode turns it into an error.
fn create_special(special: Special, config: &Config) -> Result<DecimalValue, CreateError> {
    if let Some(kind) = DomainKind::of(special)
        && gate(kind, config) == Gate::Raise
    {
        tracing::debug!(%kind, "exception mode raises instead of returning a sentinel");
        return Err(CreateError::Domain(kind));
    }
    Ok(special.into())
}

fn create_from_str(text: &str, precision: Precision, strict: bool, config: &Config) -> Result<DecimalValue, CreateError> {
    match normalize(text, strict, config.exponent_limit) {
        ParseOutcome::Literal(value) => {
            // literals are bounded half-up at parse time, whatever the configured mode
            let bounded = RoundingContext::new(precision.or_explicit_zero(), RoundingMode::HalfUp).round(&value);
            Ok(normal(&bounded, precision, config.rounding))
        }
        ParseOutcome::Special(special) => Ok(special.into()),
        ParseOutcome::Failure => Err(CreateError::InvalidLiteral(text.to_owned())),
    }
}

fn create_from_other(value: &dyn Coerce, precision: Precision, mode: RoundingMode) -> Result<DecimalValue, CreateError> {
    let context = RoundingContext::new(precision.or_explicit_zero(), mode);
    match value.coerce(&context)? {
        Coerced::Decimal(decimal) => Ok(DecimalValue::Normal(context.round(&decimal))),
        Coerced::Special(_) | Coerced::NotNumeric => Err(CreateError::UnsupportedType(value.type_name().to_owned())),
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Input<'_> {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a BigInt> for Input<'a> {
    fn from(value: &'a BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl<'a> From<&'a BigDecimal> for Input<'a> {
    fn from(value: &'a BigDecimal) -> Self {
        Self::BigDecimal(value)
    }
}

impl<'a> From<&'a DecimalValue> for Input<'a> {
    fn from(value: &'a DecimalValue) -> Self {
        Self::Decimal(value)
    }
}

impl From<Special> for Input<'_> {
    fn from(value: Special) -> Self {
        Self::Special(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a dyn Coerce> for Input<'a> {
    fn from(value: &'a dyn Coerce) -> Self {
        Self::Other(value)
    }
}
