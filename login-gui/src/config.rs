use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::filter;

use crate::{
    login::DEFAULT_SUBMIT_LATENCY,
    notification::DEFAULT_TOAST_DURATION,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// log level, can be "error", "warn", "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Simulated duration of a login request, in milliseconds. Never shorter
    /// than 1500.
    pub submit_latency_ms: u64,
    /// How long a toast stays on screen, in milliseconds.
    pub toast_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY.as_millis() as u64,
            toast_duration_ms: DEFAULT_TOAST_DURATION.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
        })?;
        let config = Self::from_toml(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Config>(content).map_err(|e| {
            ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
        })?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if self.submit_latency() < DEFAULT_SUBMIT_LATENCY {
            return Err(ConfigError::InvalidField(
                "submit_latency_ms",
                format!(
                    "must be at least {}",
                    DEFAULT_SUBMIT_LATENCY.as_millis()
                ),
            ));
        }
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::InvalidField(
                "toast_duration_ms",
                "must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "error" => Ok(filter::LevelFilter::ERROR),
                "warn" => Ok(filter::LevelFilter::WARN),
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
}
