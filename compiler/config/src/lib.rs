#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Zap Configuration
//!
//! This crate provides configuration management for `protoc-gen-zap`.
//! Settings arrive through the plugin parameter string (`--zap_opt=Key=Value,...`) and may
//! additionally be loaded from a TOML file named by the `ConfigFile` key. They cover:
//! - Output file naming (policy and component marker)
//! - Optional generated helper section
//! - Logging level
//!
//! Parameter keys always override values read from the file.

use std::path::{Path, PathBuf};

pub use path::FileNaming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default component marker placed between base name and extension.
pub const DEFAULT_COMPONENT: &str = "zap";

/// Errors that can occur when loading or parsing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A parameter entry is not of the form `Key=Value`
    #[error("Malformed plugin parameter '{0}', expected Key=Value")]
    MalformedParameter(String),
    /// A parameter key is not recognized
    #[error("Unknown plugin option '{0}'. Supported: FileNaming, Component, Helpers, LogLevel, ConfigFile")]
    UnknownOption(String),
    /// A parameter value is not valid for its key
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Option key
        key: String,
        /// Rejected value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Code generation settings
    pub codegen: CodegenConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// How output file names are derived from proto paths
    pub file_naming: FileNaming,
    /// Component marker in output names (`lightning.<component>.swift`)
    pub component: String,
    /// Emit the private helper section at the top of every file
    pub helpers: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter directive (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            file_naming: FileNaming::default(),
            component: DEFAULT_COMPONENT.to_string(),
            helpers: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string() } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Build the configuration from the plugin parameter string.
    ///
    /// The string is a comma-separated list of `Key=Value` entries. A `ConfigFile` entry is
    /// loaded first wherever it appears; the remaining entries are applied in order on top.
    pub fn from_parameter(parameter: Option<&str>) -> Result<Self, ConfigError> {
        let entries = parse_entries(parameter.unwrap_or_default())?;

        let mut config = match entries.iter().rev().find(|(key, _)| *key == "ConfigFile") {
            Some((_, file)) => Self::from_file(PathBuf::from(*file))?,
            None => Self::default(),
        };

        for (key, value) in entries {
            config.apply(key, value)?;
        }

        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "FileNaming" => {
                self.codegen.file_naming = value.parse().map_err(|e: path::UnknownFileNaming| {
                    invalid(key, value, &e.to_string())
                })?;
            }
            "Component" => self.codegen.component = value.to_string(),
            "Helpers" => {
                self.codegen.helpers =
                    value.parse().map_err(|_| invalid(key, value, "expected true or false"))?;
            }
            "LogLevel" => self.logging.level = value.to_string(),
            "ConfigFile" => {}
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        Ok(())
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let component = &self.codegen.component;
        if component.is_empty()
            || !component.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(invalid(
                "Component",
                component,
                "must be a non-empty identifier of ASCII letters, digits and '_'",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(invalid("LogLevel", &self.logging.level, "must not be empty"));
        }
        logging::validate_level(&self.logging.level)
            .map_err(|e| invalid("LogLevel", &self.logging.level, &e.to_string()))?;
        Ok(())
    }
}

fn parse_entries(parameter: &str) -> Result<Vec<(&str, &str)>, ConfigError> {
    parameter
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| ConfigError::MalformedParameter(part.to_string()))
        })
        .collect()
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
