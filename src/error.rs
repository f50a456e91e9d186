use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised while establishing or accessing the shared database connection
#[derive(Error, Debug)]
pub enum DbError {
    /// The driver could not reach the database
    #[error("Failed to connect to {url}: {message}")]
    ConnectionFailed {
        /// Database address, credentials redacted
        url: String,
        /// Driver error message
        message: String,
    },

    /// `get` was called before a successful `initialize`
    #[error("Database not initialised!")]
    Uninitialized,

    /// The database address could not be parsed
    #[error("Invalid database URL {url}: {message}")]
    InvalidUrl {
        /// Database address, credentials redacted
        url: String,
        /// Parser error message
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The process-wide connection was configured after it was first used
    #[error("Database is already configured")]
    AlreadyConfigured,
}

impl DbError {
    /// Whether calling `initialize` again may succeed
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }
}

/// Result type alias for shopdb operations
pub type Result<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_connection_failures_are_recoverable() {
        let failed = DbError::ConnectionFailed {
            url: "mongodb://127.0.0.1:27017/shop".to_string(),
            message: "connection refused".to_string(),
        };
        assert!(failed.is_recoverable());
        assert!(!DbError::Uninitialized.is_recoverable());
        assert!(!DbError::AlreadyConfigured.is_recoverable());
    }

    #[test]
    fn test_uninitialized_message() {
        assert_eq!(
            DbError::Uninitialized.to_string(),
            "Database not initialised!"
        );
    }
}
