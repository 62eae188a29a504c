#![doc = include_str!("../../../README.md")]

mod classify;
mod config;
mod decimal;
mod error;
mod factory;
mod gate;
mod literal;
pub mod mime;
mod rounding;
mod value;

pub use crate::{
    classify::{FloatClass, classify},
    config::{Config, DEFAULT_EXPONENT_LIMIT, SharedConfig},
    decimal::BigDecimal,
    error::{CreateError, ParseDecimalError},
    factory::{Coerce, Coerced, Input, create},
    gate::{DomainKind, Gate, gate},
    literal::{ParseOutcome, normalize},
    rounding::{Precision, RoundingContext, RoundingMode},
    value::{DecimalValue, Special},
};
