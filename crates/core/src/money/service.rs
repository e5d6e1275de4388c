//! Money service: every money operation, resolved against one rate table.
//!
//! `Money`'s own methods build a service over the active table and delegate
//! here. Callers that want an explicit configuration, independent of the
//! process-wide one, hold a service of their own.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use crate::amount::{ToAmount, round_to_cents};
use crate::error::MoneyResult;
use crate::rates::{RateTable, registry};

use super::operand::{IntoOperand, Operand};
use super::value::Money;

/// Arithmetic operation applied to two amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `left + right`
    Add,
    /// `left - right`
    Subtract,
    /// `left * right`
    Multiply,
    /// `left / right`
    Divide,
}

impl Operation {
    /// Applies the operation with plain floating-point semantics.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }

    /// Returns the operator symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

/// Performs money operations against a fixed rate table.
#[derive(Debug, Clone)]
pub struct MoneyService {
    table: Arc<RateTable>,
}

impl MoneyService {
    /// Creates a service over its own table.
    #[must_use]
    pub fn new(table: RateTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Creates a service over a snapshot of the active table.
    #[must_use]
    pub fn current() -> Self {
        Self {
            table: registry::active(),
        }
    }

    /// Returns the table this service converts with.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Creates money in a known currency, rounding the amount to cents.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the table does not know `currency`, or
    /// `TypeConversion` if `amount` has no floating-point reading.
    pub fn money(&self, amount: impl ToAmount, currency: impl AsRef<str>) -> MoneyResult<Money> {
        let currency = currency.as_ref();
        self.table.ensure_known(currency)?;
        let amount = amount.to_amount()?;
        Ok(Money::from_parts(round_to_cents(amount), currency.to_owned()))
    }

    /// Converts `money` into `target`.
    ///
    /// Converting into the money's own currency returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if `target`, or a rate the conversion needs,
    /// is missing from the table.
    pub fn convert(&self, money: &Money, target: impl AsRef<str>) -> MoneyResult<Money> {
        let target = target.as_ref();
        self.table.ensure_known(target)?;

        if target == money.currency() {
            return Ok(money.clone());
        }

        let converted = self
            .table
            .convert_amount(money.amount(), money.currency(), target)?;
        debug!(
            from = money.currency(),
            to = target,
            amount = money.amount(),
            converted,
            "Converted money"
        );
        self.money(converted, target)
    }

    /// Applies `operation` to `left` and `right`.
    ///
    /// Money on the right is first converted into the left currency; the
    /// result is always in the left currency.
    ///
    /// # Errors
    ///
    /// Returns `TypeConversion` for an unusable right operand and
    /// `UnknownCurrency` if a conversion fails.
    pub fn apply(
        &self,
        left: &Money,
        operation: Operation,
        right: impl IntoOperand,
    ) -> MoneyResult<Money> {
        let right = match right.into_operand()? {
            Operand::Money(other) => self.convert(&other, left.currency())?.amount(),
            Operand::Amount(amount) => amount,
        };
        self.money(operation.apply(left.amount(), right), left.currency())
    }

    /// Adds `right` to `left`.
    ///
    /// # Errors
    ///
    /// See [`MoneyService::apply`].
    pub fn add(&self, left: &Money, right: impl IntoOperand) -> MoneyResult<Money> {
        self.apply(left, Operation::Add, right)
    }

    /// Subtracts `right` from `left`.
    ///
    /// # Errors
    ///
    /// See [`MoneyService::apply`].
    pub fn subtract(&self, left: &Money, right: impl IntoOperand) -> MoneyResult<Money> {
        self.apply(left, Operation::Subtract, right)
    }

    /// Multiplies `left` by `right`.
    ///
    /// # Errors
    ///
    /// See [`MoneyService::apply`].
    pub fn multiply(&self, left: &Money, right: impl IntoOperand) -> MoneyResult<Money> {
        self.apply(left, Operation::Multiply, right)
    }

    /// Divides `left` by `right`.
    ///
    /// # Errors
    ///
    /// See [`MoneyService::apply`].
    pub fn divide(&self, left: &Money, right: impl IntoOperand) -> MoneyResult<Money> {
        self.apply(left, Operation::Divide, right)
    }

    /// Orders `left` against `right` converted into the left currency.
    ///
    /// Returns `None` when the conversion fails or an amount is NaN.
    pub fn compare(&self, left: &Money, right: &Money) -> Option<Ordering> {
        let right = self.convert(right, left.currency()).ok()?;
        left.amount().partial_cmp(&right.amount())
    }
}

impl From<Arc<RateTable>> for MoneyService {
    fn from(table: Arc<RateTable>) -> Self {
        Self { table }
    }
}
