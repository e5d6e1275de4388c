//! Error types for rate configuration and money operations.
//!
//! Three kinds of failure exist: a configuration that cannot be built, a
//! currency the active rates do not know, and an operand that cannot be turned
//! into an amount. All of them are returned synchronously to the caller.

use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Broad classification of a [`MoneyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The rate configuration itself is invalid.
    Configuration,
    /// A currency code is not known to the active configuration.
    UnknownCurrency,
    /// A value could not be converted into an amount.
    TypeConversion,
}

/// Errors that can occur while configuring rates or operating on money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Configuration Errors ==========
    /// No base currency was given.
    #[error("Should provide base currency")]
    MissingBaseCurrency,

    /// A configured rate could not be converted to a floating-point value.
    #[error("Invalid rate for {currency}: {reason}")]
    InvalidRate {
        /// Currency code the rate was given for.
        currency: String,
        /// Why the value was rejected.
        reason: String,
    },

    // ========== Currency Errors ==========
    /// Currency is neither the base currency nor listed in the rates.
    #[error("Unknown currency {0}. Please configure rates first.")]
    UnknownCurrency(String),

    // ========== Operand Errors ==========
    /// Operand is neither money nor convertible to a float.
    #[error(
        "Can't convert {value:?} to Float. Please provide either Money or a float-convertible value."
    )]
    TypeConversion {
        /// Textual form of the rejected value.
        value: String,
    },
}

impl MoneyError {
    /// Builds an unknown-currency error for the given code.
    pub fn unknown_currency(currency: impl Into<String>) -> Self {
        Self::UnknownCurrency(currency.into())
    }

    /// Builds a type-conversion error for the given value.
    pub fn type_conversion(value: impl Into<String>) -> Self {
        Self::TypeConversion {
            value: value.into(),
        }
    }

    /// Returns the broad kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingBaseCurrency | Self::InvalidRate { .. } => ErrorKind::Configuration,
            Self::UnknownCurrency(_) => ErrorKind::UnknownCurrency,
            Self::TypeConversion { .. } => ErrorKind::TypeConversion,
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBaseCurrency => "MISSING_BASE_CURRENCY",
            Self::InvalidRate { .. } => "INVALID_RATE",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::TypeConversion { .. } => "TYPE_CONVERSION",
        }
    }
}
