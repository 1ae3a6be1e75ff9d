//! Hyper-parameters of the gradient boosting ensemble.

use crate::config::{collected_errors, load_config, save_config};
use crate::core::constants::*;
use crate::core::error::{RegBoostError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration of a [`GradientBoost`](crate::regressors::GradientBoost) ensemble.
///
/// The base learner and the initial booster are passed separately; this
/// struct only holds the scalar knobs of the boosting loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientBoostConfig {
    /// Shrinkage applied to every stage's predictions
    pub rate: f64,
    /// Maximum number of boosting stages
    pub estimators: usize,
    /// Fraction of the training rows sampled for each stage
    pub ratio: f64,
    /// Minimum change in training loss between stages to keep going
    pub min_change: f64,
    /// Training loss under which boosting stops
    pub tolerance: f64,
    /// Seed for row subsampling
    pub seed: Option<u64>,
}

impl Default for GradientBoostConfig {
    fn default() -> Self {
        GradientBoostConfig {
            rate: DEFAULT_LEARNING_RATE,
            estimators: DEFAULT_ESTIMATORS,
            ratio: DEFAULT_SUBSAMPLE_RATIO,
            min_change: DEFAULT_MIN_CHANGE,
            tolerance: DEFAULT_BOOST_TOLERANCE,
            seed: None,
        }
    }
}

impl GradientBoostConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder
    pub fn builder() -> GradientBoostConfigBuilder {
        GradientBoostConfigBuilder::new()
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.rate > 0.0 && self.rate <= 1.0) {
            return Err(RegBoostError::invalid_parameter(
                "rate",
                self.rate.to_string(),
                "must be in (0, 1]",
            ));
        }
        if self.estimators < 1 {
            return Err(RegBoostError::invalid_parameter(
                "estimators",
                self.estimators.to_string(),
                "must be at least 1",
            ));
        }
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(RegBoostError::invalid_parameter(
                "ratio",
                self.ratio.to_string(),
                "must be in (0, 1]",
            ));
        }
        if !(self.min_change >= 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "min_change",
                self.min_change.to_string(),
                "must be non-negative",
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

/// Fluent builder for [`GradientBoostConfig`]
#[derive(Debug, Clone, Default)]
pub struct GradientBoostConfigBuilder {
    config: GradientBoostConfig,
    validation_errors: Vec<String>,
}

impl GradientBoostConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the learning rate
    pub fn rate(mut self, rate: f64) -> Self {
        if !(rate > 0.0 && rate <= 1.0) {
            self.validation_errors
                .push("rate must be in (0, 1]".to_string());
        }
        self.config.rate = rate;
        self
    }

    /// Set the number of boosting stages
    pub fn estimators(mut self, estimators: usize) -> Self {
        if estimators < 1 {
            self.validation_errors
                .push("estimators must be at least 1".to_string());
        }
        self.config.estimators = estimators;
        self
    }

    /// Set the subsample ratio
    pub fn ratio(mut self, ratio: f64) -> Self {
        if !(ratio > 0.0 && ratio <= 1.0) {
            self.validation_errors
                .push("ratio must be in (0, 1]".to_string());
        }
        self.config.ratio = ratio;
        self
    }

    /// Set the minimum loss change
    pub fn min_change(mut self, min_change: f64) -> Self {
        if !(min_change >= 0.0) {
            self.validation_errors
                .push("min_change must be non-negative".to_string());
        }
        self.config.min_change = min_change;
        self
    }

    /// Set the loss tolerance
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
    pub fn build(self) -> Result<GradientBoostConfig> {
        collected_errors(self.validation_errors)?;
        self.config.validate()?;
        Ok(self.config)
    }
}
