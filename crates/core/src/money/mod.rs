//! Money values and the operations that convert between currencies.
//!
//! - `value` - the `Money` type itself
//! - `operand` - right-hand operands accepted by arithmetic
//! - `service` - conversion, arithmetic and comparison against a rate table

pub mod operand;
pub mod service;
pub mod value;

#[cfg(test)]
mod props;

pub use operand::{IntoOperand, Operand};
pub use service::{MoneyService, Operation};
pub use value::Money;
