//! # Connection Manager
//!
//! Holds at most one connection handle. The handle is created by the first
//! successful [`ConnectionManager::initialize`] and is never replaced.
//!
//! First-time initialisation is serialised: callers that arrive while an
//! attempt is in flight wait for it and share its handle. A failed attempt
//! leaves the manager uninitialised, and the next waiting (or later) caller
//! makes its own attempt.
//!
//! ```rust,no_run
//! use shopdb::{config::DatabaseConfig, ConnectionManager};
//!
//! # async fn example() -> Result<(), shopdb::DbError> {
//! let manager = ConnectionManager::from_config(DatabaseConfig::default());
//! let client = manager.initialize().await?;
//! assert!(std::sync::Arc::ptr_eq(&client, &manager.get()?));
//! # Ok(())
//! # }
//! ```

use crate::config::{redact_url, DatabaseConfig};
use crate::connector::{Connector, MongoConnector};
use crate::error::{DbError, Result};
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

/// Lazily established, shared connection to a single database address
pub struct ConnectionManager<C: Connector> {
    connector: C,
    url: String,
    handle: OnceCell<Arc<C::Handle>>,
}

impl ConnectionManager<MongoConnector> {
    /// Manager for the MongoDB driver using `config`
    #[must_use]
    pub fn from_config(config: DatabaseConfig) -> Self {
        let url = config.url.clone();
        Self::new(MongoConnector::new(config), url)
    }
}

impl<C: Connector> ConnectionManager<C> {
    /// Create an uninitialised manager that will connect to `url`
    pub fn new(connector: C, url: impl Into<String>) -> Self {
        Self {
            connector,
            url: url.into(),
            handle: OnceCell::new(),
        }
    }

    /// Database address this manager connects to
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connector used for connection attempts
    #[must_use]
    pub const fn connector(&self) -> &C {
        &self.connector
    }

    /// Whether a handle has been stored
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.handle.initialized()
    }

    /// Establish the connection, or return the existing one.
    ///
    /// Idempotent after the first success: no further connection attempts
    /// are made and the same handle is returned every time.
    pub async fn initialize(&self) -> Result<Arc<C::Handle>> {
        if let Some(handle) = self.handle.get() {
            info!("Database is already initialised!");
            return Ok(Arc::clone(handle));
        }

        let handle = self
            .handle
            .get_or_try_init(|| async {
                info!("Connecting to database at {}", redact_url(&self.url));
                match self.connector.connect(&self.url).await {
                    Ok(handle) => Ok(Arc::new(handle)),
                    Err(e) => {
                        error!("Database connection failed: {}", e);
                        Err(e)
                    }
                }
            })
            .await?;

        debug!("Database handle ready");
        Ok(Arc::clone(handle))
    }

    /// Callback form of [`initialize`](Self::initialize).
    ///
    /// `on_complete` is invoked exactly once, after the attempt resolves.
    pub async fn initialize_with<F, R>(&self, on_complete: F) -> R
    where
        F: FnOnce(Result<Arc<C::Handle>>) -> R,
    {
        on_complete(self.initialize().await)
    }

    /// The stored handle, or [`DbError::Uninitialized`]
    pub fn get(&self) -> Result<Arc<C::Handle>> {
        self.handle.get().cloned().ok_or(DbError::Uninitialized)
    }
}

impl<C: Connector> fmt::Debug for ConnectionManager<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("url", &redact_url(&self.url))
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
