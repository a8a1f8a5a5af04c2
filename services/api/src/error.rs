//! services/api/src/error.rs
//!
//! Startup failures of the catalog server. Request-level failures never get
//! here: handlers turn them into status codes.

use crate::config::ConfigError;
use catalog_core::ports::PortError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A missing or malformed environment variable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The admin session could not be built, e.g. `ADMIN_PASSWORD_HASH` is not a PHC string.
    #[error("Catalog setup error: {0}")]
    Port(#[from] PortError),

    /// The key-value table's database is unreachable.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Binding the listener or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else that stops the server from starting, such as a bad CORS origin.
    #[error("Startup failed: {0}")]
    Internal(String),
}
