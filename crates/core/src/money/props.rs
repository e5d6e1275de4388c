//! Property-based tests for money operations.
//!
//! All properties run against explicit services, never the process-wide
//! table, so they can run alongside the other tests.

use std::collections::HashMap;

use proptest::prelude::*;

use crate::error::MoneyError;
use crate::rates::RateTable;

use super::service::{MoneyService, Operation};

/// Strategy to generate amounts in whole cents (-1,000,000.00 to 1,000,000.00).
#[allow(clippy::cast_precision_loss)]
fn cent_amount() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy to generate arbitrary amounts with more than two decimals.
fn raw_amount() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0f64
}

/// Strategy to generate rates of at least one (1.0000 to 100.0000).
#[allow(clippy::cast_precision_loss)]
fn rate_above_one() -> impl Strategy<Value = f64> {
    (10_000i64..1_000_000i64).prop_map(|v| v as f64 / 10_000.0)
}

fn service_with(rate: f64) -> MoneyService {
    MoneyService::new(RateTable::new("USD", [("EUR", rate)]).unwrap())
}

/// Strategy to generate a rate table: an upper-case base code plus up to
/// eight upper-case rated codes.
fn rate_table() -> impl Strategy<Value = (String, HashMap<String, f64>)> {
    (
        "[A-Z]{3}",
        prop::collection::hash_map("[A-Z]{3}", rate_above_one(), 0..8),
    )
}

fn has_two_decimals(value: f64) -> bool {
    let scaled = value * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Constructed amounts never carry more than two decimals.
    #[test]
    fn prop_money_rounds_to_cents(amount in raw_amount()) {
        let service = service_with(0.9);
        let money = service.money(amount, "USD").unwrap();
        prop_assert!(has_two_decimals(money.amount()), "{} has more than two decimals", money);
        prop_assert!((money.amount() - amount).abs() <= 0.005 + 1e-9);
    }

    /// Amounts already in cents are stored unchanged.
    #[test]
    fn prop_cent_amounts_are_stable(amount in cent_amount()) {
        let service = service_with(0.9);
        let money = service.money(amount, "USD").unwrap();
        prop_assert_eq!(money.amount().to_bits(), amount.to_bits());
    }

    /// Converting into the own currency returns the same amount.
    #[test]
    fn prop_convert_identity(amount in cent_amount(), rate in rate_above_one()) {
        let service = service_with(rate);
        let money = service.money(amount, "EUR").unwrap();
        let same = service.convert(&money, "EUR").unwrap();
        prop_assert_eq!(same.amount().to_bits(), money.amount().to_bits());
        prop_assert_eq!(same.currency(), "EUR");
    }

    /// Base -> other -> base lands within a cent of the start.
    #[test]
    fn prop_convert_round_trip(amount in cent_amount(), rate in rate_above_one()) {
        let service = service_with(rate);
        let money = service.money(amount, "USD").unwrap();
        let there = service.convert(&money, "EUR").unwrap();
        let back = service.convert(&there, "USD").unwrap();
        prop_assert!(
            (back.amount() - money.amount()).abs() <= 0.01 + 1e-9,
            "{} -> {} -> {}", money, there, back
        );
    }

    /// Non-base -> non-base -> back lands within a cent of the start when
    /// the outbound leg does not shrink the amount.
    #[test]
    fn prop_cross_convert_round_trip(
        amount in cent_amount(),
        eur in rate_above_one(),
        factor in 1u32..=10,
    ) {
        let gbp = eur * f64::from(factor);
        let service = MoneyService::new(RateTable::new("USD", [("EUR", eur), ("GBP", gbp)]).unwrap());
        let money = service.money(amount, "EUR").unwrap();
        let there = service.convert(&money, "GBP").unwrap();
        let back = service.convert(&there, "EUR").unwrap();
        prop_assert_eq!(there.currency(), "GBP");
        prop_assert!(
            (back.amount() - money.amount()).abs() <= 0.01 + 1e-6,
            "{} -> {} -> {}", money, there, back
        );
    }

    /// A table knows exactly its base and its rated codes.
    #[test]
    fn prop_table_knows_listed_codes((base, rates) in rate_table(), outsider in "[a-z]{3}") {
        let table = RateTable::new(base.clone(), rates.clone()).unwrap();
        prop_assert!(table.is_known(&base));
        prop_assert_eq!(table.currencies()[0], base.as_str());
        for code in rates.keys() {
            prop_assert!(table.is_known(code));
        }

        let service = MoneyService::new(table);
        for code in service.table().currencies() {
            prop_assert!(service.money(1, code).is_ok());
        }
        prop_assert_eq!(
            service.money(1, &outsider).unwrap_err(),
            MoneyError::unknown_currency(outsider.as_str())
        );
    }

    /// Plain-number arithmetic keeps the left currency and matches the
    /// rounded float result.
    #[test]
    fn prop_plain_arithmetic(left in cent_amount(), right in cent_amount()) {
        let service = service_with(0.9);
        let money = service.money(left, "EUR").unwrap();
        for operation in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            let result = service.apply(&money, operation, right).unwrap();
            let expected = service.money(operation.apply(left, right), "EUR").unwrap();
            prop_assert_eq!(result.currency(), "EUR");
            prop_assert_eq!(result.amount().to_bits(), expected.amount().to_bits());
        }
    }

    /// Ordering agrees with amounts within one currency.
    #[test]
    fn prop_compare_matches_amounts(left in cent_amount(), right in cent_amount()) {
        let service = service_with(0.9);
        let a = service.money(left, "USD").unwrap();
        let b = service.money(right, "USD").unwrap();
        prop_assert_eq!(service.compare(&a, &b), left.partial_cmp(&right));
    }
}
