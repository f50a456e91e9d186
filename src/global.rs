//! Process-wide database connection
//!
//! One [`ConnectionManager`] per process, bound to the MongoDB driver. Its
//! configuration is fixed by [`configure_db`] or, failing that, by the first
//! [`init_db`], which falls back to the defaults with `SHOPDB_URL` applied.
//! [`get_db`] never installs a manager.

use crate::config::DatabaseConfig;
use crate::connector::MongoConnector;
use crate::error::{DbError, Result};
use crate::manager::ConnectionManager;
use mongodb::Client;
use std::sync::{Arc, OnceLock};
use tracing::debug;

static DATABASE: OnceLock<ConnectionManager<MongoConnector>> = OnceLock::new();

fn database() -> &'static ConnectionManager<MongoConnector> {
    DATABASE.get_or_init(|| ConnectionManager::from_config(DatabaseConfig::from_env()))
}

/// Set the configuration of the process-wide connection.
///
/// Must run before the first [`init_db`]; [`get_db`] does not fix the
/// configuration.
pub fn configure_db(config: DatabaseConfig) -> Result<()> {
    let mut installed = false;
    DATABASE.get_or_init(|| {
        installed = true;
        ConnectionManager::from_config(config)
    });

    if installed {
        debug!("Process-wide database configured");
        Ok(())
    } else {
        Err(DbError::AlreadyConfigured)
    }
}

/// Connect the process-wide database, or return the existing client
pub async fn init_db() -> Result<Arc<Client>> {
    database().initialize().await
}

/// Callback form of [`init_db`]; `on_complete` runs exactly once
pub async fn init_db_with<F, R>(on_complete: F) -> R
where
    F: FnOnce(Result<Arc<Client>>) -> R,
{
    database().initialize_with(on_complete).await
}

/// The process-wide client, or [`DbError::Uninitialized`]
///
/// Read-only: an unconfigured process stays unconfigured.
pub fn get_db() -> Result<Arc<Client>> {
    DATABASE.get().ok_or(DbError::Uninitialized)?.get()
}
