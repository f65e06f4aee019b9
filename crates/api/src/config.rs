//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Rollcall API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 5000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `TIMEZONE`: IANA zone that decides what "today" is (default: "Asia/Kolkata")
//! - `ADMIN_PASSWORD_HASH`: Argon2 PHC hash of the admin password
//! - `ADMIN_PASSWORD`: Plaintext admin password, used only when no hash is set
//! - `SESSION_TTL_HOURS`: Lifetime of an admin login (default: 12)
//! - `HEARTBEAT_URL`: URL pinged by the liveness task (default: this server's `/health`)
//! - `HEARTBEAT_INTERVAL_SECONDS`: Ping interval, `0` disables it (default: 300)

use eyre::{Result, WrapErr, eyre};
use rollcall_core::date::{DEFAULT_TIMEZONE, DateKeyResolver};
use std::env;
use tracing::Level;

use crate::middleware::auth::AdminSecret;

/// Longest admin session accepted from `SESSION_TTL_HOURS`, one year.
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 366;

/// Configuration for the Rollcall API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use rollcall_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// IANA timezone name used for date keys
    pub timezone: String,

    /// Argon2 hash of the admin password (preferred when present)
    pub admin_password_hash: Option<String>,

    /// Plaintext admin password
    pub admin_password: Option<String>,

    /// Admin session lifetime in hours
    pub session_ttl_hours: i64,

    /// Liveness ping target, defaults to this server's health endpoint
    pub heartbeat_url: Option<String>,

    /// Seconds between liveness pings, 0 disables them
    pub heartbeat_interval: u64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The SESSION_TTL_HOURS value is not between 1 and [`MAX_SESSION_TTL_HOURS`]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url =
            var("DATABASE_URL").ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Attendance settings
        let timezone = var("TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

        // Security settings
        let admin_password_hash = var("ADMIN_PASSWORD_HASH").map(|s| s.trim().to_string());
        let admin_password = var("ADMIN_PASSWORD");
        let session_ttl_hours = match var("SESSION_TTL_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| (1..=MAX_SESSION_TTL_HOURS).contains(hours))
                .ok_or_else(|| eyre!("Invalid SESSION_TTL_HOURS value: {}", value))?,
            None => 12,
        };

        // Heartbeat settings
        let heartbeat_url = var("HEARTBEAT_URL");
        let heartbeat_interval = var("HEARTBEAT_INTERVAL_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(300);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            timezone,
            admin_password_hash,
            admin_password,
            session_ttl_hours,
            heartbeat_url,
            heartbeat_interval,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The heartbeat target, falling back to the local health endpoint.
    pub fn heartbeat_url(&self) -> String {
        self.heartbeat_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}/health", self.port))
    }

    /// Admin session lifetime.
    pub fn session_ttl(&self) -> Result<chrono::Duration> {
        chrono::Duration::try_hours(self.session_ttl_hours)
            .ok_or_else(|| eyre!("Invalid SESSION_TTL_HOURS value: {}", self.session_ttl_hours))
    }

    /// Resolves the configured timezone; an unknown zone is a startup error.
    pub fn date_resolver(&self) -> Result<DateKeyResolver> {
        DateKeyResolver::from_name(&self.timezone).map_err(|e| eyre!("Invalid TIMEZONE: {}", e))
    }

    /// Picks the admin credential strategy once, at startup.
    pub fn admin_secret(&self) -> Result<Option<AdminSecret>> {
        AdminSecret::resolve(
            self.admin_password_hash.as_deref(),
            self.admin_password.as_deref(),
        )
    }
}
