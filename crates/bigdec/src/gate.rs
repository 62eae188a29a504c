//! Exception-mode gate for sentinel results.
//!
//! Only the float path and the explicit special-constant path consult the gate.
//! Sentinels produced by the literal path are always returned as-is.

use crate::{config::Config, value::Special};

/// The kinds of result the exception mode can turn into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum DomainKind {
    Infinity,
    NaN,
}

impl DomainKind {
    /// Returns the gated kind of `special`; negative zero is never gated.
    #[must_use]
    pub fn of(special: Special) -> Option<Self> {
        match special {
            Special::PositiveInfinity | Special::NegativeInfinity => Some(Self::Infinity),
            Special::NaN => Some(Self::NaN),
            Special::NegativeZero => None,
        }
    }
}

/// Decision returned by [`gate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Proceed,
    Raise,
}

/// Reads the flag matching `kind` from the snapshot.
#[must_use]
pub fn gate(kind: DomainKind, config: &Config) -> Gate {
    let raise = match kind {
        DomainKind::Infinity => config.raise_on_infinity,
        DomainKind::NaN => config.raise_on_nan,
    };
    if raise { Gate::Raise } else { Gate::Proceed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_reads_matching_flag() {
        let config = Config {
            raise_on_infinity: true,
            ..Config::default()
        };
        assert_eq!(gate(DomainKind::Infinity, &config), Gate::Raise);
        assert_eq!(gate(DomainKind::NaN, &config), Gate::Proceed);

        let config = Config {
            raise_on_nan: true,
            ..Config::default()
        };
        assert_eq!(gate(DomainKind::Infinity, &config), Gate::Proceed);
        assert_eq!(gate(DomainKind::NaN, &config), Gate::Raise);
    }

    #[test]
    fn test_domain_kind_of_special() {
        assert_eq!(DomainKind::of(Special::NegativeInfinity), Some(DomainKind::Infinity));
        assert_eq!(DomainKind::of(Special::NaN), Some(DomainKind::NaN));
        assert_eq!(DomainKind::of(Special::NegativeZero), None);
    }
}
