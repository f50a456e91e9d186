//! `shopdb` - shared MongoDB connection for the shop backend
//!
//! Lazily establishes one connection handle and hands it out to the rest of
//! the application. Access before initialisation is an error value, never a
//! panic.

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

/// Command-line interface
pub mod cli;
/// CLI command handlers
pub mod commands;
/// Configuration management for shopdb
pub mod config;
pub mod connector;
/// Error types
pub mod error;
pub mod global;
pub mod manager;

pub use config::{Config, DatabaseConfig};
pub use connector::{Connector, MongoConnector};
pub use error::DbError;
pub use global::{configure_db, get_db, init_db, init_db_with};
pub use manager::ConnectionManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
