//! Configuration management for regboost.
//!
//! Hyper-parameters for each learner live in a plain serde struct with a
//! `Default`, a `validate` method and a fluent builder that collects every
//! validation error before failing. Configurations can be stored as JSON or
//! TOML, selected by file extension.

pub mod boost;
pub mod tree;

pub use boost::{GradientBoostConfig, GradientBoostConfigBuilder};
pub use tree::{RegressionTreeConfig, RegressionTreeConfigBuilder};

use crate::core::error::{RegBoostError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigFormat {
    /// TOML configuration format
    Toml,
    /// JSON configuration format
    Json,
}

impl ConfigFormat {
    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            _ => Err(RegBoostError::config(
                "Unsupported config file format. Use .json or .toml",
            )),
        }
    }
}

pub(crate) fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        ConfigFormat::Json => serde_json::from_str(&content)
            .map_err(|e| RegBoostError::config(format!("Failed to parse JSON config: {}", e))),
        ConfigFormat::Toml => toml::from_str(&content)
            .map_err(|e| RegBoostError::config(format!("Failed to parse TOML config: {}", e))),
    }
}

pub(crate) fn save_config<T: Serialize>(config: &T, path: &Path) -> Result<()> {
    let content = match ConfigFormat::from_path(path)? {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| RegBoostError::config(format!("Failed to serialize to JSON: {}", e)))?,
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| RegBoostError::config(format!("Failed to serialize to TOML: {}", e)))?,
    };

    std::fs::write(path, content)?;
    Ok(())
}

/// Turn the errors collected by a builder into a single config error.
pub(crate) fn collected_errors(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RegBoostError::config(format!(
            "Configuration validation failed: {}",
            errors.join(", ")
        )))
    }
}
