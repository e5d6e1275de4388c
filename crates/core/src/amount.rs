//! Amount coercion and two-decimal rounding.
//!
//! Anything that can stand in for an amount implements [`ToAmount`]: the
//! primitive numbers, `Decimal`, and strings holding a float literal. Strings
//! are the only inputs that can fail at runtime.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{MoneyError, MoneyResult};

/// Scale factor for two decimal places.
const CENTS: f64 = 100.0;

/// Magnitude (2^59) from which a float has no fractional digits left to
/// round at two decimals.
const ROUNDING_LIMIT: f64 = 576_460_752_303_423_488.0;

/// A value that can be converted into a floating-point amount.
///
/// Strings are parsed strictly: the whole trimmed text must be a float
/// literal, so `"12abc"` and `"abc"` fail instead of reading as a prefix or
/// as zero the way lenient float coercion would.
pub trait ToAmount {
    /// Converts the value, failing with [`MoneyError::TypeConversion`] when it
    /// has no floating-point reading.
    fn to_amount(&self) -> MoneyResult<f64>;
}

macro_rules! lossless_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToAmount for $ty {
                fn to_amount(&self) -> MoneyResult<f64> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

macro_rules! widening_amount {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToAmount for $ty {
                #[allow(clippy::cast_precision_loss)]
                fn to_amount(&self) -> MoneyResult<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

lossless_amount!(f64, f32, i8, i16, i32, u8, u16, u32);
widening_amount!(i64, u64, i128, u128, isize, usize);

impl ToAmount for str {
    fn to_amount(&self) -> MoneyResult<f64> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| MoneyError::type_conversion(self))
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> MoneyResult<f64> {
        self.as_str().to_amount()
    }
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> MoneyResult<f64> {
        self.to_f64()
            .ok_or_else(|| MoneyError::type_conversion(self.to_string()))
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> MoneyResult<f64> {
        (**self).to_amount()
    }
}

/// Rounds a value to two decimal places, ties away from zero.
///
/// The product `value * 100` can land just below a midpoint even though the
/// decimal literal sits exactly on it (`10.005` is stored as
/// `10.00499999...`). The result is nudged one cent outward whenever the
/// midpoint above the rounded value, scaled back, does not exceed `value`, so
/// `10.005` rounds to `10.01` and `-10.005` to `-10.01`.
///
/// Non-finite values and magnitudes beyond [`ROUNDING_LIMIT`] are returned as
/// they are.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }

    let mut rounded = (value * CENTS).round();
    if value > 0.0 {
        if (rounded + 0.5) / CENTS <= value {
            rounded += 1.0;
        }
    } else if (rounded - 0.5) / CENTS >= value {
        rounded -= 1.0;
    }
    rounded / CENTS
}
