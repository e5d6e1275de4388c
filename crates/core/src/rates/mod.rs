//! Exchange rate configuration.

pub mod registry;
pub mod table;

pub use registry::{active, configure, install, reset};
pub use table::RateTable;
