//! Establishing a link to the document database
//!
//! The [`Connector`] trait is the seam between the connection manager and the
//! client library. [`MongoConnector`] is the production implementation.

use crate::config::{redact_url, DatabaseConfig};
use crate::error::{DbError, Result};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::future::Future;
use tracing::{debug, error, info};

/// Database that answers the connectivity probe when the URL names none
const ADMIN_DATABASE: &str = "admin";

/// Something that can open a connection handle for a database address
pub trait Connector: Send + Sync {
    /// Handle produced by a successful connection
    type Handle: Send + Sync;

    /// Attempt a connection to `url`
    fn connect(&self, url: &str) -> impl Future<Output = Result<Self::Handle>> + Send;
}

/// Connector backed by the official MongoDB driver
#[derive(Debug, Clone, Default)]
pub struct MongoConnector {
    config: DatabaseConfig,
}

impl MongoConnector {
    /// Create a connector applying the driver options from `config`
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Driver options in use
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    async fn client_options(&self, url: &str) -> Result<ClientOptions> {
        let mut options = ClientOptions::parse(url).await.map_err(|e| {
            error!("Failed to parse database URL {}: {}", redact_url(url), e);
            DbError::InvalidUrl {
                url: redact_url(url),
                message: e.to_string(),
            }
        })?;

        if let Some(app_name) = &self.config.app_name {
            options.app_name = Some(app_name.clone());
        }
        if let Some(timeout) = self.config.server_selection_timeout() {
            options.server_selection_timeout = Some(timeout);
        }
        if let Some(timeout) = self.config.connect_timeout() {
            options.connect_timeout = Some(timeout);
        }
        Ok(options)
    }
}

impl Connector for MongoConnector {
    type Handle = Client;

    async fn connect(&self, url: &str) -> Result<Client> {
        let options = self.client_options(url).await?;
        let probe_database = options
            .default_database
            .clone()
            .unwrap_or_else(|| ADMIN_DATABASE.to_string());

        let connection_failed = |e: mongodb::error::Error| DbError::ConnectionFailed {
            url: redact_url(url),
            message: e.to_string(),
        };

        let client = Client::with_options(options).map_err(connection_failed)?;

        // The driver connects lazily; ping so an unreachable server fails here
        debug!("Pinging database {}", probe_database);
        client
            .database(&probe_database)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(connection_failed)?;

        info!("Connected to {}", redact_url(url));
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected_before_connecting() {
        let connector = MongoConnector::default();
        let result = connector.connect("postgres://localhost:5432/shop").await;
        assert!(matches!(result, Err(DbError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_options_carry_configured_timeouts() {
        let connector = MongoConnector::new(DatabaseConfig {
            app_name: Some("shop-backend".to_string()),
            server_selection_timeout_ms: Some(250),
            ..DatabaseConfig::default()
        });

        let options = connector
            .client_options("mongodb://127.0.0.1:27017/shop")
            .await
            .unwrap();

        assert_eq!(options.app_name.as_deref(), Some("shop-backend"));
        assert_eq!(
            options.server_selection_timeout,
            Some(std::time::Duration::from_millis(250))
        );
        assert_eq!(options.default_database.as_deref(), Some("shop"));
    }
}
