//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `LEARNER_PROFILE`
//! prefix and `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use learner_profile::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod registration;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use registration::RegistrationConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub registration: RegistrationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present
    /// 2. Reads variables prefixed with `LEARNER_PROFILE`
    /// 3. Splits nested keys on `__`
    ///
    /// - `LEARNER_PROFILE__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `LEARNER_PROFILE__REGISTRATION__DEFAULT_ROLES=User` -> `registration.default_roles`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LEARNER_PROFILE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.registration.validate()?;
        Ok(())
    }
}
