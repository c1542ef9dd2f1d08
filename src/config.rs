//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://posts.db3"
//! export POSTS_BASE_PATH="/posts"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DB_PATH`
//! (default: `posts.db3`).
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `POSTS_BASE_PATH` - Mount path of the posts resource (default: `/posts`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RUN_MIGRATIONS` - Apply bundled migrations at startup (default: `true`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Leading `/`, no trailing `/` (except for the root itself).
    pub posts_base_path: String,
    pub log_level: String,
    pub log_format: String,
    pub run_migrations: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the database configuration cannot be assembled.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let posts_base_path = normalize_base_path(
            &env::var("POSTS_BASE_PATH").unwrap_or_else(|_| "/posts".to_string()),
        );
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        Ok(Self {
            database_url,
            listen_addr,
            posts_base_path,
            log_level,
            log_format,
            run_migrations,
        })
    }

    /// Loads database URL with fallback to a file path.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `DB_PATH` (default `posts.db3`)
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| "posts.db3".to_string());
        if path.trim().is_empty() {
            anyhow::bail!("DB_PATH must not be empty when DATABASE_URL is not provided");
        }

        Ok(format!("sqlite://{}", path))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `posts_base_path` does not start with `/` or contains route syntax
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

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

        if !self.posts_base_path.starts_with('/') {
            anyhow::bail!(
                "POSTS_BASE_PATH must start with '/', got '{}'",
                self.posts_base_path
            );
        }

        if self.posts_base_path.contains(['{', '}', '*']) {
            anyhow::bail!(
                "POSTS_BASE_PATH must be a literal path, got '{}'",
                self.posts_base_path
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Posts mounted at: {}", self.posts_base_path);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Run migrations: {}", self.run_migrations);
    }
}

/// Trims surrounding whitespace and trailing slashes, keeping `/` for the root.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
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
