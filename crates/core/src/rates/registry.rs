//! Process-wide active rate table.
//!
//! The process starts unconfigured. Every configuration call replaces the
//! active table; the last call wins for all later operations, including those
//! on money values created before it. Readers take an `Arc` snapshot so one
//! operation always sees a single table.

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::info;

use crate::amount::ToAmount;
use crate::error::MoneyResult;

use super::table::RateTable;

static ACTIVE: Lazy<RwLock<Arc<RateTable>>> =
    Lazy::new(|| RwLock::new(Arc::new(RateTable::unconfigured())));

/// Builds a table from `base_currency` and `rates` and makes it active.
///
/// # Errors
///
/// Returns the table construction error; the active table is left untouched
/// in that case.
pub fn configure<B, I, K, V>(base_currency: B, rates: I) -> MoneyResult<Arc<RateTable>>
where
    B: Into<String>,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: ToAmount,
{
    let table = RateTable::new(base_currency, rates)?;
    Ok(install(table))
}

/// Makes `table` the active table and returns the shared handle to it.
pub fn install(table: RateTable) -> Arc<RateTable> {
    let table = Arc::new(table);
    info!(
        base_currency = table.base_currency().unwrap_or("-"),
        currencies = table.rates().len(),
        "Conversion rates configured"
    );
    *ACTIVE.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&table);
    table
}

/// Returns a snapshot of the active table.
pub fn active() -> Arc<RateTable> {
    Arc::clone(&*ACTIVE.read().unwrap_or_else(PoisonError::into_inner))
}

/// Restores the unconfigured table.
pub fn reset() {
    install(RateTable::unconfigured());
}
