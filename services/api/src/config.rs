//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use catalog_core::FavoriteKeying;
use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub database_url: String,
    pub log_level: Level,
    pub openai_api_key: Option<String>,
    pub content_model: String,
    pub advice_model: String,
    pub admin_email: String,
    pub admin_password_hash: String,
    pub simulate_latency: bool,
    pub favorites_keying: FavoriteKeying,
    pub cors_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).ok_or_else(|| ConfigError::MissingVar(name.to_string()));

        // --- Server and Database Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let database_url = required("DATABASE_URL")?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Text Generation ---
        let openai_api_key = lookup("OPENAI_API_KEY").filter(|key| !key.trim().is_empty());
        let content_model = lookup("CONTENT_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());
        let advice_model = lookup("ADVICE_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());

        // --- Admin Account ---
        let admin_email = required("ADMIN_EMAIL")?;
        let admin_password_hash = required("ADMIN_PASSWORD_HASH")?;

        // --- Catalog Behavior ---
        let simulate_latency = match lookup("SIMULATE_LATENCY") {
            None => true,
            Some(value) => parse_bool(&value).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SIMULATE_LATENCY".to_string(),
                    format!("'{}' is not a boolean", value),
                )
            })?,
        };

        let favorites_keying = match lookup("FAVORITES_KEY") {
            None => FavoriteKeying::default(),
            Some(value) => value.parse::<FavoriteKeying>().map_err(|e| {
                ConfigError::InvalidValue("FAVORITES_KEY".to_string(), e.to_string())
            })?,
        };

        let cors_origin =
            lookup("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());

        Ok(Self {
            bind_address,
            database_url,
            log_level,
            openai_api_key,
            content_model,
            advice_model,
            admin_email,
            admin_password_hash,
            simulate_latency,
            favorites_keying,
            cors_origin,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
