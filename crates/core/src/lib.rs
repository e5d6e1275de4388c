//! Money values with implicit currency conversion.
//!
//! Configure the exchange rates once, then create and combine money values;
//! every operation converts through the rates that are active when it runs.
//!
//! ```
//! use converter_core::Money;
//!
//! Money::configure("USD", [("EUR", 0.9), ("GBP", 0.8)]).unwrap();
//!
//! let dollars = Money::new(10, "USD").unwrap();
//! let euros = Money::new(5, "EUR").unwrap();
//! assert_eq!(dollars.add(&euros).unwrap().to_string(), "15.56 USD");
//! assert_eq!(dollars.add(5).unwrap().to_string(), "15.00 USD");
//! assert!(Money::new(10, "JPY").is_err());
//! ```
//!
//! # Modules
//!
//! - `rates` - Rate tables and the process-wide active table
//! - `money` - The `Money` type and the service behind its operations
//! - `amount` - Numeric coercion and two-decimal rounding
//! - `error` - Error types

pub mod amount;
pub mod error;
pub mod money;
pub mod rates;

pub use amount::{ToAmount, round_to_cents};
pub use error::{ErrorKind, MoneyError, MoneyResult};
pub use money::{IntoOperand, Money, MoneyService, Operand, Operation};
pub use rates::RateTable;
