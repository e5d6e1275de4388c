//! Right-hand operands of money arithmetic and comparison.

use rust_decimal::Decimal;

use crate::amount::ToAmount;
use crate::error::MoneyResult;

use super::value::Money;

/// Right-hand side of an arithmetic or comparison operation.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Another money value; converted into the left operand's currency.
    Money(Money),
    /// A plain amount, used as is.
    Amount(f64),
}

/// A value usable as the right-hand side of money arithmetic.
///
/// Implemented for `Money` (owned or borrowed) and for every [`ToAmount`]
/// type.
pub trait IntoOperand {
    /// Converts the value into an operand.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MoneyError::TypeConversion`] when the value is not
    /// money and has no floating-point reading.
    fn into_operand(self) -> MoneyResult<Operand>;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(self)
    }
}

impl IntoOperand for Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self))
    }
}

impl IntoOperand for &Money {
    fn into_operand(self) -> MoneyResult<Operand> {
        Ok(Operand::Money(self.clone()))
    }
}

macro_rules! amount_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> MoneyResult<Operand> {
                    self.to_amount().map(Operand::Amount)
                }
            }
        )*
    };
}

amount_operand!(
    f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, Decimal, String,
    &str, &String, &Decimal,
);
