//! Shared configuration and logging setup for the converter workspace.
//!
//! - Configuration loading (files, `RUN_MODE`, environment overrides)
//! - Tracing subscriber initialisation for binaries

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoggingConfig, RatesConfig};
