//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `KARMIC_MATRIX` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use karmic_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod database;
mod error;
mod server;
mod yampi;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use yampi::YampiConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Karmic Matrix application.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Session token configuration
    pub auth: AuthConfig,

    /// Yampi webhook configuration
    pub yampi: YampiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KARMIC_MATRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `KARMIC_MATRIX__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `KARMIC_MATRIX__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KARMIC_MATRIX")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.yampi.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var(
            "KARMIC_MATRIX__DATABASE__URL",
            "postgresql://test@localhost/karmic_matrix_test",
        );
        env::set_var(
            "KARMIC_MATRIX__AUTH__JWT_SECRET",
            "0123456789abcdef0123456789abcdef",
        );
        env::set_var("KARMIC_MATRIX__YAMPI__WEBHOOK_SECRET", "whsec_test");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("KARMIC_MATRIX__DATABASE__URL");
        env::remove_var("KARMIC_MATRIX__AUTH__JWT_SECRET");
        env::remove_var("KARMIC_MATRIX__YAMPI__WEBHOOK_SECRET");
        env::remove_var("KARMIC_MATRIX__SERVER__PORT");
        env::remove_var("KARMIC_MATRIX__SERVER__ENVIRONMENT");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(
            config.database.url,
            "postgresql://test@localhost/karmic_matrix_test"
        );
    }

    #[test]
    fn validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn server_defaults_apply() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
    }

    #[test]
    fn is_production_reads_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("KARMIC_MATRIX__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn custom_server_port_overrides_default() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("KARMIC_MATRIX__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
