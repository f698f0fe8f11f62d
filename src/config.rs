//! # Configuration Management
//!
//! Centralized configuration for the integration link.
//!
//! This module provides structured configuration for the link core: the
//! integration credentials the handshake derives its keys from, and the
//! logging setup.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-variable overrides
//!
//! ## Security Considerations
//! - Access codes and identification numbers are credentials; validation
//!   reports their *lengths*, never their contents

use crate::error::{LinkError, Result};
use crate::handshake::{MIN_SECRET_DIGITS, TYPE2_SECRET_DIGITS};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Main link configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LinkConfig {
    /// Integration credentials shared out-of-band with the panel
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LinkConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| LinkError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| LinkError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| LinkError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(code) = std::env::var("PANEL_LINK_ACCESS_CODE") {
            config.integration.access_code = code;
        }

        if let Ok(id) = std::env::var("PANEL_LINK_IDENTIFICATION_NUMBER") {
            config.integration.identification_number = id;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.integration.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(LinkError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Integration credentials for the panel link
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntegrationConfig {
    /// Integration access code: at least 8 digits for Type-1 sessions,
    /// exactly 32 for Type-2 sessions
    pub access_code: String,

    /// Integration identification number, 12 digits as programmed into the
    /// panel (only the first 8 feed key derivation)
    pub identification_number: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            access_code: String::from("12345678"),
            identification_number: String::from("123456789012"),
        }
    }
}

impl IntegrationConfig {
    /// Validate the integration credentials
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.access_code.is_empty() {
            errors.push("Access code cannot be empty".to_string());
        } else {
            if !self.access_code.bytes().all(|b| b.is_ascii_hexdigit()) {
                errors.push("Access code must contain only hexadecimal digits".to_string());
            }
            if self.access_code.len() < MIN_SECRET_DIGITS {
                errors.push(format!(
                    "Access code too short: {} digits (minimum: {MIN_SECRET_DIGITS})",
                    self.access_code.len()
                ));
            } else if self.access_code.len() > TYPE2_SECRET_DIGITS {
                errors.push(format!(
                    "Access code too long: {} digits (maximum: {TYPE2_SECRET_DIGITS})",
                    self.access_code.len()
                ));
            }
        }

        if self.identification_number.is_empty() {
            errors.push("Identification number cannot be empty".to_string());
        } else {
            if !self
                .identification_number
                .bytes()
                .all(|b| b.is_ascii_hexdigit())
            {
                errors.push(
                    "Identification number must contain only hexadecimal digits".to_string(),
                );
            }
            if self.identification_number.len() < MIN_SECRET_DIGITS {
                errors.push(format!(
                    "Identification number too short: {} digits (minimum: {MIN_SECRET_DIGITS}, panels program 12)",
                    self.identification_number.len()
                ));
            }
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("panel-link"),
            log_level: Level::INFO,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
