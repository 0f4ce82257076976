//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database location
//!
//! ```bash
//! # Either a full SQLx URL
//! export DATABASE_URL="sqlite://data/urls.db"
//!
//! # or a plain file path
//! export DATABASE_FILE_PATH="data/urls.db"
//! ```
//!
//! `DATABASE_URL` takes priority. The file is created on first start.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6, range: 4-32)
//! - `ALIAS_MAX_ATTEMPTS` - Candidate limit per creation (default: unbounded)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`,
//!   `DB_MAX_LIFETIME`, `DB_BUSY_TIMEOUT` - Pool settings

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::AliasPolicy;
use crate::infrastructure::persistence::StoreOptions;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

const MIN_ALIAS_LENGTH: usize = 4;
const MAX_ALIAS_LENGTH: usize = 32;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub alias_length: usize,
    /// `None` means creation retries until an unused alias is found.
    pub alias_max_attempts: Option<u32>,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
    /// Wait on a locked database in seconds (`DB_BUSY_TIMEOUT`, default: 5).
    pub db_busy_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the database location is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url = load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let alias_length = parse_var("ALIAS_LENGTH")?.unwrap_or(DEFAULT_ALIAS_LENGTH);
        let alias_max_attempts = parse_var("ALIAS_MAX_ATTEMPTS")?;

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(10);
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT")?.unwrap_or(30);
        let db_idle_timeout = parse_var("DB_IDLE_TIMEOUT")?.unwrap_or(600);
        let db_max_lifetime = parse_var("DB_MAX_LIFETIME")?.unwrap_or(1800);
        let db_busy_timeout = parse_var("DB_BUSY_TIMEOUT")?.unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            alias_length,
            alias_max_attempts,
            db_max_connections,
            db_connect_timeout,
            db_idle_timeout,
            db_max_lifetime,
            db_busy_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not an SQLite URL
    /// - `alias_length` is outside 4-32
    /// - `alias_max_attempts` is zero
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !(MIN_ALIAS_LENGTH..=MAX_ALIAS_LENGTH).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between {} and {}, got {}",
                MIN_ALIAS_LENGTH,
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_max_attempts == Some(0) {
            anyhow::bail!("ALIAS_MAX_ATTEMPTS must be at least 1 when set");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Returns the alias policy for [`crate::application::services::AliasService`].
    pub fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy {
            length: self.alias_length,
            max_attempts: self.alias_max_attempts,
        }
    }

    /// Returns the pool settings for the record store.
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
            idle_timeout: Duration::from_secs(self.db_idle_timeout),
            max_lifetime: Duration::from_secs(self.db_max_lifetime),
            busy_timeout: Duration::from_secs(self.db_busy_timeout),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Alias length: {}", self.alias_length);
        match self.alias_max_attempts {
            Some(max) => tracing::info!("  Alias attempts: at most {}", max),
            None => tracing::info!("  Alias attempts: unbounded"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Resolves the database location.
///
/// Priority:
/// 1. `DATABASE_URL` environment variable
/// 2. `sqlite://` + `DATABASE_FILE_PATH`
///
/// # Errors
///
/// Returns an error if neither variable is set.
pub fn load_database_url() -> Result<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let path = env::var("DATABASE_FILE_PATH")
        .context("DATABASE_URL or DATABASE_FILE_PATH must be set")?;

    Ok(format!("sqlite://{}", path))
}

/// Parses an optional numeric variable; unset means `None`, garbage is an error.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value '{}'", name, raw)),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
