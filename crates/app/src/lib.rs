//! `stockroom` entry-point support: configuration and catalog reports.
//!
//! The binary owns the one [`stockroom_inventory::Inventory`] for the process
//! and hands it by reference to everything else.

pub mod config;
pub mod report;

pub use config::{AppConfig, ConfigError, OutputFormat};
