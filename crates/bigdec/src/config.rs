//! Ambient decimal configuration.
//!
//! [`Config`] is a plain snapshot passed into every [`create`](crate::create) call.
//! [`SharedConfig`] is the process-wide holder a host mutates; its
//! [`create`](SharedConfig::create) copies the configuration once at entry so a
//! concurrent update can never be observed halfway through a call.

use std::sync::{PoisonError, RwLock};

use crate::{
    error::CreateError,
    factory::{Input, create},
    rounding::{Precision, RoundingMode},
    value::DecimalValue,
};

/// Largest exponent field a textual literal may carry by default (that of `f64::MAX`).
pub const DEFAULT_EXPONENT_LIMIT: u32 = f64::MAX_10_EXP.unsigned_abs();

/// Decimal policy consumed by the factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mode used whenever a value is bounded to a digit count.
    pub rounding: RoundingMode,
    /// Raise instead of returning an infinity from the float and special-constant paths.
    pub raise_on_infinity: bool,
    /// Raise instead of returning NaN from the float and special-constant paths.
    pub raise_on_nan: bool,
    /// Largest exponent field, in magnitude, a textual literal may carry before it is
    /// classified as an overflow (positive exponent) or underflow (negative exponent).
    pub exponent_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfUp,
            raise_on_infinity: false,
            raise_on_nan: false,
            exponent_limit: DEFAULT_EXPONENT_LIMIT,
        }
    }
}

/// Externally owned configuration shared across threads.
#[derive(Debug, Default)]
pub struct SharedConfig {
    inner: RwLock<Config>,
}

impl SharedConfig {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> Config {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the current configuration.
    pub fn set(&self, config: Config) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Mutates the current configuration in place under the write lock.
    pub fn update(&self, f: impl FnOnce(&mut Config)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }

    /// Runs [`create`] against a single snapshot of the configuration.
    pub fn create<'a>(
        &self,
        input: impl Into<Input<'a>>,
        precision: Precision,
        strict: bool,
    ) -> Result<DecimalValue, CreateError> {
        let config = self.snapshot();
        create(input, precision, strict, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rounding, RoundingMode::HalfUp);
        assert!(!config.raise_on_infinity);
        assert!(!config.raise_on_nan);
        assert_eq!(config.exponent_limit, 308);
    }

    #[test]
    fn test_shared_config_update_and_snapshot() {
        let shared = SharedConfig::default();
        let before = shared.snapshot();
        shared.update(|config| config.raise_on_nan = true);
        assert!(!before.raise_on_nan);
        assert!(shared.snapshot().raise_on_nan);

        shared.set(Config::default());
        assert_eq!(shared.snapshot(), Config::default());
    }

    #[test]
    fn test_shared_config_create_uses_current_flags() {
        let shared = SharedConfig::default();
        assert_eq!(
            shared.create(f64::INFINITY, Precision::Omitted, false),
            Ok(DecimalValue::PositiveInfinity)
        );
        shared.update(|config| config.raise_on_infinity = true);
        assert!(shared.create(f64::INFINITY, Precision::Omitted, false).is_err());
    }

    #[test]
    fn test_config_deserialize_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"rounding": "half_even", "raise_on_nan": true}"#).unwrap();
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert!(config.raise_on_nan);
        assert!(!config.raise_on_infinity);
        assert_eq!(config.exponent_limit, DEFAULT_EXPONENT_LIMIT);
    }
}
