//! Money type: an amount rounded to cents in a known currency.
//!
//! Every operation resolves currencies against the rate table that is active
//! when the operation runs, not the one active when the value was created.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::amount::ToAmount;
use crate::error::{MoneyError, MoneyResult};
use crate::rates::registry;

use super::operand::{IntoOperand, Operand};
use super::service::MoneyService;

/// Represents a monetary amount with currency.
///
/// Immutable: arithmetic and conversion return new values. Equality and
/// ordering convert the right operand into the left currency first, so
/// `100.00 USD == 90.00 EUR` under a USD-to-EUR rate of 0.9.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: f64,
    currency: String,
}

/// Unvalidated serialized form of [`Money`].
#[derive(Deserialize)]
struct MoneyRecord {
    amount: f64,
    currency: String,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, record.currency)
    }
}

impl Money {
    /// Replaces the active conversion rates and returns a service over them.
    ///
    /// ```
    /// use converter_core::Money;
    ///
    /// let service = Money::configure("USD", [("EUR", 0.9)]).unwrap();
    /// let euros = service.money(100, "USD").unwrap().convert_to("EUR").unwrap();
    /// assert_eq!(euros.to_string(), "90.00 EUR");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base currency is empty or a rate
    /// is not numeric.
    pub fn configure<B, I, K, V>(base_currency: B, rates: I) -> MoneyResult<MoneyService>
    where
        B: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToAmount,
    {
        registry::configure(base_currency, rates).map(MoneyService::from)
    }

    /// Creates money in a currency known to the active rates.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` for an unknown currency (always the case
    /// before any configuration) and `TypeConversion` for a non-numeric
    /// amount.
    pub fn new(amount: impl ToAmount, currency: impl AsRef<str>) -> MoneyResult<Self> {
        MoneyService::current().money(amount, currency)
    }

    /// Creates a zero amount in the specified currency.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` for an unknown currency.
    pub fn zero(currency: impl AsRef<str>) -> MoneyResult<Self> {
        Self::new(0.0, currency)
    }

    pub(crate) fn from_parts(amount: f64, currency: String) -> Self {
        Self { amount, currency }
    }

    /// Amount, rounded to two decimal places.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Currency code, as given at construction.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns the amount as a two-decimal `Decimal`, or `None` when it is
    /// not finite.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_f64(self.amount).map(|amount| amount.round_dp(2))
    }

    /// Converts into `currency` using the active rates.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the target is unknown.
    pub fn convert_to(&self, currency: impl AsRef<str>) -> MoneyResult<Self> {
        MoneyService::current().convert(self, currency)
    }

    /// Adds money (converted into this currency) or a plain amount.
    ///
    /// # Errors
    ///
    /// Returns `TypeConversion` for an unusable operand and
    /// `UnknownCurrency` if a conversion fails.
    pub fn add(&self, other: impl IntoOperand) -> MoneyResult<Self> {
        MoneyService::current().add(self, other)
    }

    /// Subtracts money (converted into this currency) or a plain amount.
    ///
    /// # Errors
    ///
    /// See [`Money::add`].
    pub fn subtract(&self, other: impl IntoOperand) -> MoneyResult<Self> {
        MoneyService::current().subtract(self, other)
    }

    /// Multiplies by money (converted into this currency) or a plain amount.
    ///
    /// # Errors
    ///
    /// See [`Money::add`].
    pub fn multiply(&self, other: impl IntoOperand) -> MoneyResult<Self> {
        MoneyService::current().multiply(self, other)
    }

    /// Divides by money (converted into this currency) or a plain amount.
    ///
    /// # Errors
    ///
    /// See [`Money::add`].
    pub fn divide(&self, other: impl IntoOperand) -> MoneyResult<Self> {
        MoneyService::current().divide(self, other)
    }

    /// Three-way comparison against another money value.
    ///
    /// Anything that is not money, or money that cannot be converted into
    /// this currency, is incomparable.
    pub fn compare_to(&self, other: impl IntoOperand) -> Option<Ordering> {
        match other.into_operand() {
            Ok(Operand::Money(other)) => MoneyService::current().compare(self, &other),
            Ok(Operand::Amount(_)) | Err(_) => None,
        }
    }

    /// Text form, same as `Display`.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.compare_to(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other)
    }
}

impl PartialEq<f64> for Money {
    fn eq(&self, _other: &f64) -> bool {
        false
    }
}

impl PartialOrd<f64> for Money {
    fn partial_cmp(&self, _other: &f64) -> Option<Ordering> {
        None
    }
}
