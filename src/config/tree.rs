//! Hyper-parameters of the CART regression tree.

use crate::config::{collected_errors, load_config, save_config};
use crate::core::constants::*;
use crate::core::error::{RegBoostError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of a [`RegressionTree`](crate::regressors::RegressionTree).
///
/// | Parameter             | Default   |
/// |-----------------------|-----------|
/// | `max_depth`           | unlimited |
/// | `max_leaf_size`       | 3         |
/// | `min_purity_increase` | 0.0       |
/// | `max_features`        | all       |
/// | `tolerance`           | 1e-4      |
/// | `seed`                | entropy   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionTreeConfig {
    /// Maximum number of split levels below the root (None for unlimited)
    pub max_depth: Option<usize>,
    /// Nodes with at most this many samples become leaves
    pub max_leaf_size: usize,
    /// Minimum variance reduction a split must achieve
    pub min_purity_increase: f64,
    /// Number of randomly chosen columns examined per split (None for all)
    pub max_features: Option<usize>,
    /// Label variance at or below which a node is considered pure
    pub tolerance: f64,
    /// Seed for feature sampling
    pub seed: Option<u64>,
}

impl Default for RegressionTreeConfig {
    fn default() -> Self {
        RegressionTreeConfig {
            max_depth: None,
            max_leaf_size: DEFAULT_MAX_LEAF_SIZE,
            min_purity_increase: DEFAULT_MIN_PURITY_INCREASE,
            max_features: None,
            tolerance: DEFAULT_TREE_TOLERANCE,
            seed: None,
        }
    }
}

impl RegressionTreeConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder
    pub fn builder() -> RegressionTreeConfigBuilder {
        RegressionTreeConfigBuilder::new()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(RegBoostError::invalid_parameter(
                "max_depth",
                "0",
                "must be at least 1",
            ));
        }
        if self.max_leaf_size < 1 {
            return Err(RegBoostError::invalid_parameter(
                "max_leaf_size",
                self.max_leaf_size.to_string(),
                "must be at least 1",
            ));
        }
        if !(self.min_purity_increase >= 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "min_purity_increase",
                self.min_purity_increase.to_string(),
                "must be non-negative",
            ));
        }
        if self.max_features == Some(0) {
            return Err(RegBoostError::invalid_parameter(
                "max_features",
                "0",
                "must be at least 1",
            ));
        }
        if !(self.tolerance >= 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "tolerance",
                self.tolerance.to_string(),
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON or TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = load_config(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON or TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_config(self, path.as_ref())
    }
}

/// Fluent builder for [`RegressionTreeConfig`]
#[derive(Debug, Clone, Default)]
pub struct RegressionTreeConfigBuilder {
    config: RegressionTreeConfig,
    validation_errors: Vec<String>,
}

impl RegressionTreeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        if depth < 1 {
            self.validation_errors
                .push("max_depth must be at least 1".to_string());
        }
        self.config.max_depth = Some(depth);
        self
    }

    /// Set the maximum leaf size
    pub fn max_leaf_size(mut self, size: usize) -> Self {
        if size < 1 {
            self.validation_errors
                .push("max_leaf_size must be at least 1".to_string());
        }
        self.config.max_leaf_size = size;
        self
    }

    /// Set the minimum purity increase
    pub fn min_purity_increase(mut self, increase: f64) -> Self {
        if !(increase >= 0.0) {
            self.validation_errors
                .push("min_purity_increase must be non-negative".to_string());
        }
        self.config.min_purity_increase = increase;
        self
    }

    /// Set the number of features examined per split
    pub fn max_features(mut self, features: usize) -> Self {
        if features < 1 {
            self.validation_errors
                .push("max_features must be at least 1".to_string());
        }
        self.config.max_features = Some(features);
        self
    }

    /// Set the purity tolerance
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        if !(tolerance >= 0.0) {
            self.validation_errors
                .push("tolerance must be non-negative".to_string());
        }
        self.config.tolerance = tolerance;
        self
    }

    /// Set the random seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RegressionTreeConfig> {
        collected_errors(self.validation_errors)?;
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RegressionTreeConfig::default();
        assert_eq!(config.max_depth, None);
        assert_eq!(config.max_leaf_size, 3);
        assert_eq!(config.tolerance, 1e-4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = RegressionTreeConfig::builder()
            .max_depth(40)
            .max_leaf_size(2)
            .min_purity_increase(0.0)
            .tolerance(1e-4)
            .seed(1)
            .build()
            .unwrap();
        assert_eq!(config.max_depth, Some(40));
        assert_eq!(config.max_leaf_size, 2);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_builder_collects_errors() {
        let err = RegressionTreeConfig::builder()
            .max_depth(0)
            .max_leaf_size(0)
            .build()
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("max_depth"));
        assert!(message.contains("max_leaf_size"));
    }

    #[test]
    fn test_validate_rejects() {
        let config = RegressionTreeConfig {
            tolerance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RegBoostError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = RegressionTreeConfig::builder().max_depth(5).seed(3).build().unwrap();

        for name in ["tree.toml", "tree.json"] {
            let path = dir.path().join(name);
            config.save_to_file(&path).unwrap();
            assert_eq!(RegressionTreeConfig::load_from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "max_leaf_size = 5\n").unwrap();

        let config = RegressionTreeConfig::load_from_file(&path).unwrap();
        assert_eq!(config.max_leaf_size, 5);
        assert_eq!(config.tolerance, DEFAULT_TREE_TOLERANCE);
    }
}
