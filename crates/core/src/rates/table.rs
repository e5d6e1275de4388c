//! Rate table: a base currency plus the rates of every other known currency.

use std::collections::HashMap;

use converter_shared::config::RatesConfig;

use crate::amount::ToAmount;
use crate::error::{MoneyError, MoneyResult};

/// Exchange rates expressed against a single base currency.
///
/// A rate is the value of one unit of the base currency in the keyed
/// currency (base `USD`, `EUR = 0.9` means 1 USD = 0.9 EUR).
///
/// The unconfigured table has no base currency and knows no currency at all;
/// it is what the process starts with before any configuration call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    base_currency: Option<String>,
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Builds a table from a base currency and `(currency, rate)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::MissingBaseCurrency`] when the base currency is
    /// empty, and [`MoneyError::InvalidRate`] when a rate has no
    /// floating-point reading.
    pub fn new<B, I, K, V>(base_currency: B, rates: I) -> MoneyResult<Self>
    where
        B: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToAmount,
    {
        let base_currency = base_currency.into();
        if base_currency.is_empty() {
            return Err(MoneyError::MissingBaseCurrency);
        }

        let rates = rates
            .into_iter()
            .map(|(currency, rate)| {
                let currency = currency.into();
                match rate.to_amount() {
                    Ok(rate) => Ok((currency, rate)),
                    Err(err) => Err(MoneyError::InvalidRate {
                        currency,
                        reason: err.to_string(),
                    }),
                }
            })
            .collect::<MoneyResult<HashMap<_, _>>>()?;

        Ok(Self {
            base_currency: Some(base_currency),
            rates,
        })
    }

    /// Returns the table that knows no currency.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Returns true once a base currency has been set.
    pub fn is_configured(&self) -> bool {
        self.base_currency.is_some()
    }

    /// Returns the base currency, if configured.
    pub fn base_currency(&self) -> Option<&str> {
        self.base_currency.as_deref()
    }

    /// Returns the rate listed for `currency`.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Returns the raw rate mapping.
    pub fn rates(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    /// Returns true if `currency` is the base currency or has a rate.
    pub fn is_known(&self, currency: &str) -> bool {
        self.base_currency() == Some(currency) || self.rates.contains_key(currency)
    }

    /// Lists every known currency: the base first, then the rated currencies
    /// in lexical order.
    pub fn currencies(&self) -> Vec<&str> {
        let mut rated: Vec<&str> = self
            .rates
            .keys()
            .map(String::as_str)
            .filter(|code| self.base_currency() != Some(*code))
            .collect();
        rated.sort_unstable();

        self.base_currency().into_iter().chain(rated).collect()
    }

    /// Ensures `currency` is known.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] otherwise.
    pub fn ensure_known(&self, currency: &str) -> MoneyResult<()> {
        if self.is_known(currency) {
            Ok(())
        } else {
            Err(MoneyError::unknown_currency(currency))
        }
    }

    /// Converts a raw amount from one currency to another, unrounded.
    ///
    /// Conversions between two non-base currencies go through the base
    /// currency and divide before multiplying; that order is kept so results
    /// stay bit-for-bit stable.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::UnknownCurrency`] if a rate needed for the
    /// conversion is missing.
    pub fn convert_amount(&self, amount: f64, from: &str, to: &str) -> MoneyResult<f64> {
        let base = self
            .base_currency()
            .ok_or_else(|| MoneyError::unknown_currency(from))?;

        let converted = if from == base {
            amount * self.rate_of(to)?
        } else if to == base {
            amount / self.rate_of(from)?
        } else {
            amount / self.rate_of(from)? * self.rate_of(to)?
        };
        Ok(converted)
    }

    fn rate_of(&self, currency: &str) -> MoneyResult<f64> {
        self.rate(currency)
            .ok_or_else(|| MoneyError::unknown_currency(currency))
    }
}

impl TryFrom<&RatesConfig> for RateTable {
    type Error = MoneyError;

    fn try_from(config: &RatesConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.base_currency.to_uppercase(),
            config
                .rates
                .iter()
                .map(|(currency, rate)| (currency.to_uppercase(), *rate)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn usd_table() -> RateTable {
        RateTable::new("USD", [("EUR", 0.9), ("GBP", 0.8)]).unwrap()
    }

    #[test]
    fn test_new_normalizes_values() {
        let table = RateTable::new(String::from("USD"), [("EUR", "0.9"), ("GBP", "0.8")]).unwrap();
        assert_eq!(table.base_currency(), Some("USD"));
        assert_float_absolute_eq!(table.rate("EUR").unwrap(), 0.9, 1e-12);
        assert_float_absolute_eq!(table.rate("GBP").unwrap(), 0.8, 1e-12);
    }

    #[test]
    fn test_new_accepts_integer_rates() {
        let table = RateTable::new("USD", [("JPY", 150_i32)]).unwrap();
        assert_float_absolute_eq!(table.rate("JPY").unwrap(), 150.0, 1e-12);
    }

    #[test]
    fn test_new_rejects_missing_base() {
        let err = RateTable::new("", [("EUR", 0.9)]).unwrap_err();
        assert_eq!(err, MoneyError::MissingBaseCurrency);

    }

    #[test]
    fn test_new_keeps_blank_base_verbatim() {
        let table = RateTable::new("   ", [("EUR", 0.9)]).unwrap();
        assert_eq!(table.base_currency(), Some("   "));
        assert!(table.is_known("   "));
        assert!(!table.is_known(""));
    }

    #[test]
    fn test_new_rejects_unparsable_rate() {
        let err = RateTable::new("USD", [("EUR", "abc")]).unwrap_err();
        assert!(matches!(err, MoneyError::InvalidRate { ref currency, .. } if currency == "EUR"));
    }

    #[test]
    fn test_empty_rates_know_only_base() {
        let table = RateTable::new("USD", Vec::<(String, f64)>::new()).unwrap();
        assert!(table.is_known("USD"));
        assert!(!table.is_known("EUR"));
        assert_eq!(table.currencies(), vec!["USD"]);
    }

    #[test]
    fn test_unconfigured_knows_nothing() {
        let table = RateTable::unconfigured();
        assert!(!table.is_configured());
        assert!(!table.is_known("USD"));
        assert!(!table.is_known(""));
        assert!(table.currencies().is_empty());
        assert_eq!(
            table.ensure_known("USD").unwrap_err(),
            MoneyError::unknown_currency("USD")
        );
    }

    #[test]
    fn test_known_currencies_are_case_sensitive() {
        let table = usd_table();
        assert!(table.is_known("USD"));
        assert!(table.is_known("EUR"));
        assert!(!table.is_known("usd"));
        assert!(!table.is_known("JPY"));
    }

    #[test]
    fn test_currencies_lists_base_first() {
        let table = RateTable::new("USD", [("GBP", 0.8), ("EUR", 0.9), ("CHF", 0.88)]).unwrap();
        assert_eq!(table.currencies(), vec!["USD", "CHF", "EUR", "GBP"]);
    }

    #[test]
    fn test_convert_amount_from_base() {
        let table = usd_table();
        let converted = table.convert_amount(100.0, "USD", "EUR").unwrap();
        assert_float_absolute_eq!(converted, 90.0, 1e-9);
    }

    #[test]
    fn test_convert_amount_to_base() {
        let table = usd_table();
        let converted = table.convert_amount(5.0, "EUR", "USD").unwrap();
        assert_float_absolute_eq!(converted, 5.0 / 0.9, 1e-12);
    }

    #[test]
    fn test_convert_amount_cross_divides_first() {
        let table = RateTable::new("USD", [("EUR", 0.3), ("GBP", 0.7)]).unwrap();
        let converted = table.convert_amount(10.0, "EUR", "GBP").unwrap();
        let expected: f64 = 10.0 / 0.3 * 0.7;
        assert_ne!(expected.to_bits(), (10.0_f64 * 0.7 / 0.3).to_bits());
        assert_eq!(converted.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_convert_amount_missing_rate() {
        let table = usd_table();
        assert_eq!(
            table.convert_amount(1.0, "USD", "JPY").unwrap_err(),
            MoneyError::unknown_currency("JPY")
        );
        assert_eq!(
            table.convert_amount(1.0, "CHF", "EUR").unwrap_err(),
            MoneyError::unknown_currency("CHF")
        );
        assert!(RateTable::unconfigured()
            .convert_amount(1.0, "USD", "EUR")
            .is_err());
    }

    #[test]
    fn test_try_from_config_uppercases_codes() {
        let config = RatesConfig {
            base_currency: "usd".into(),
            rates: HashMap::from([("eur".to_string(), 0.9)]),
        };
        let table = RateTable::try_from(&config).unwrap();
        assert_eq!(table.base_currency(), Some("USD"));
        assert!(table.is_known("EUR"));
    }

    #[test]
    fn test_try_from_config_rejects_blank_base() {
        let config = RatesConfig {
            base_currency: String::new(),
            rates: HashMap::new(),
        };
        assert_eq!(
            RateTable::try_from(&config).unwrap_err(),
            MoneyError::MissingBaseCurrency
        );
    }
}
