//! Logging configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Output format for log lines
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG` when set
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == LogFormat::Json
    }

    /// Validate that `level` parses as a filter directive
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info,learner_profile=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LoggingConfig::default();

        assert_eq!(config.level, "info,learner_profile=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.is_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_directive() {
        let config = LoggingConfig {
            level: "learner_profile=loud".to_string(),
            format: LogFormat::Json,
        };

        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel("learner_profile=loud".to_string()))
        );
    }
}
