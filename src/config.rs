//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.
//! The resulting [`Config`] is built once in `main` and handed to constructors;
//! nothing reads the environment after startup.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `API_KEY` (required): shared secret expected in the `X-API-KEY` header
/// - `SERVER_HOST` (optional): bind address, defaults to `0.0.0.0`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8080
/// - `DB_EXEC_TIMEOUT_SECS` (optional): per-query timeout, defaults to 5
/// - `DB_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    pub api_key: String,

    #[serde(default = "default_host")]
    pub server_host: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_exec_timeout_secs")]
    pub db_exec_timeout_secs: u64,

    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}

/// Errors raised while building a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] envy::Error),

    #[error("API_KEY must not be empty")]
    EmptyApiKey,

    #[error("DB_EXEC_TIMEOUT_SECS must be greater than zero")]
    ZeroTimeout,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_exec_timeout_secs() -> u64 {
    5
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads an optional `.env` file first, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (`DATABASE_URL`, `API_KEY`)
    /// - Values cannot be parsed into expected types
    /// - `API_KEY` is empty or the timeout is zero
    pub fn from_env() -> Result<Self, ConfigError> {
        // Does nothing if no .env file exists
        dotenvy::dotenv().ok();

        // Field names are converted automatically: database_url -> DATABASE_URL
        envy::from_env::<Config>()?.validated()
    }

    /// Build configuration from explicit key/value pairs.
    ///
    /// Keys use the same upper-case names as the environment.
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if self.db_exec_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }

    /// Timeout applied independently to every repository call.
    pub fn exec_timeout(&self) -> Duration {
        Duration::from_secs(self.db_exec_timeout_secs)
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
