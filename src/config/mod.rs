//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ASSISTANT_RELAY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use assistant_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod assistant;
mod error;
mod server;

pub use assistant::AssistantConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Plain variable names accepted for the assistant credentials when the
/// prefixed form is not set.
const FALLBACK_API_KEY_VAR: &str = "OPENAI_API_KEY";
const FALLBACK_ASSISTANT_ID_VAR: &str = "OPENAI_ASSISTANT_ID";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Assistant service configuration (credentials, endpoint)
    #[serde(default)]
    pub assistant: AssistantConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Seeds the assistant credentials from `OPENAI_API_KEY` / `OPENAI_ASSISTANT_ID`
    /// 3. Reads environment variables with `ASSISTANT_RELAY` prefix, which win over step 2
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ASSISTANT_RELAY__SERVER__PORT=8000` -> `server.port = 8000`
    /// - `ASSISTANT_RELAY__ASSISTANT__ASSISTANT_ID=...` -> `assistant.assistant_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Ok(api_key) = std::env::var(FALLBACK_API_KEY_VAR) {
            builder = builder.set_default("assistant.api_key", api_key)?;
        }
        if let Ok(assistant_id) = std::env::var(FALLBACK_ASSISTANT_ID_VAR) {
            builder = builder.set_default("assistant.assistant_id", assistant_id)?;
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("ASSISTANT_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Missing assistant credentials are not a validation failure; see
    /// [`AssistantConfig::missing_credentials`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.assistant.validate()?;
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

    const VARS: &[&str] = &[
        "ASSISTANT_RELAY__SERVER__PORT",
        "ASSISTANT_RELAY__SERVER__ENVIRONMENT",
        "ASSISTANT_RELAY__SERVER__CORS_ORIGINS",
        "ASSISTANT_RELAY__ASSISTANT__API_KEY",
        "ASSISTANT_RELAY__ASSISTANT__ASSISTANT_ID",
        "OPENAI_API_KEY",
        "OPENAI_ASSISTANT_ID",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_variables_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.assistant.api_key.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_prefixed_credentials() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ASSISTANT_RELAY__ASSISTANT__API_KEY", "sk-prefixed");
        env::set_var("ASSISTANT_RELAY__ASSISTANT__ASSISTANT_ID", "asst_prefixed");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.assistant.api_key, "sk-prefixed");
        assert_eq!(config.assistant.assistant_id, "asst_prefixed");
    }

    #[test]
    fn test_load_fallback_credentials() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-plain");
        env::set_var("OPENAI_ASSISTANT_ID", "asst_plain");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.assistant.api_key, "sk-plain");
        assert_eq!(config.assistant.assistant_id, "asst_plain");
    }

    #[test]
    fn test_prefixed_credentials_win_over_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-plain");
        env::set_var("ASSISTANT_RELAY__ASSISTANT__API_KEY", "sk-prefixed");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.assistant.api_key, "sk-prefixed");
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ASSISTANT_RELAY__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_custom_server_port_and_origins() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ASSISTANT_RELAY__SERVER__PORT", "3001");
        env::set_var(
            "ASSISTANT_RELAY__SERVER__CORS_ORIGINS",
            "https://chat.example.com",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3001);
        assert_eq!(
            config.server.cors_origins_list(),
            vec!["https://chat.example.com"]
        );
    }
}
