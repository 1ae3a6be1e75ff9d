//! # regboost
//!
//! Regression trees and gradient boosting in pure Rust.
//!
//! ## Features
//!
//! - **CART regression trees** grown greedily by variance reduction over
//!   continuous and categorical columns, with parallel split search.
//! - **Gradient boosting** of any regressor on the residuals of an initial
//!   guess, with subsampling, shrinkage and early stopping on the training loss.
//! - **Baselines** via [`DummyRegressor`] and guessing [`Strategy`].
//! - **Synthetic data** generators, metrics and cross validation to evaluate
//!   models end to end.
//! - **Persistence** of trained models as bincode or JSON, and of
//!   hyper-parameters as JSON or TOML.
//!
//! ## Quick Start
//!
//! ```rust
//! use regboost::prelude::*;
//!
//! # fn main() -> regboost::Result<()> {
//! let generator = SwissRoll::new(4.0, -7.0, 0.0, 1.0, 21.0, 0.3)?;
//! let training = generator.generate_seeded(300, 0)?;
//! let testing = generator.generate_seeded(20, 1)?;
//!
//! let base = RegressionTree::new(RegressionTreeConfig::builder().max_depth(3).build()?)?;
//! let config = GradientBoostConfig::builder().estimators(50).ratio(0.5).build()?;
//!
//! let mut estimator = GradientBoost::new(base, config, DummyRegressor::default())?;
//! estimator.train(&training)?;
//!
//! let predictions = estimator.predict(&testing)?;
//! let score = RSquared.score(predictions.view(), testing.label_array().view())?;
//! println!("R^2 = {:.3}", score);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: error type, shared types, constants and the estimator traits
//! - [`config`]: hyper-parameter structs, builders and config files
//! - [`dataset`]: labeled and unlabeled datasets, generators and loaders
//! - [`tree`]: tree nodes, split search and tree growth
//! - [`regressors`]: the estimators themselves
//! - [`strategies`]: guessing strategies used by baselines
//! - [`metrics`]: regression scores
//! - [`cross_validation`]: hold-out and k-fold validators
//! - [`io`]: model persistence

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Hyper-parameter configuration
pub mod config;

// Dataset management module
pub mod dataset;

// Model persistence
pub mod io;

// Evaluation metrics
pub mod metrics;

// Guessing strategies
pub mod strategies;

// Tree building blocks
pub mod tree;

// Estimators
pub mod regressors;

// Validation
pub mod cross_validation;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{RegBoostError, Result},
    traits::*,
    types::*,
};

pub use config::{GradientBoostConfig, RegressionTreeConfig};
pub use cross_validation::{HoldOut, KFold, Validator};
pub use dataset::{Dataset, Generator, Hyperplane, Labeled, SwissRoll, Unlabeled};
pub use metrics::{MeanAbsoluteError, MeanSquaredError, Metric, RSquared, RootMeanSquaredError};
pub use regressors::{DummyRegressor, GradientBoost, RegressionTree};
pub use strategies::Strategy;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install an `env_logger` logger for the library's `log` output.
///
/// The filter is read from `RUST_LOG` and defaults to `info`. Calling this
/// more than once, or after another logger has been installed, is a no-op.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Everything needed to train and evaluate models.
pub mod prelude {
    pub use crate::config::{GradientBoostConfig, RegressionTreeConfig};
    pub use crate::core::error::{RegBoostError, Result};
    pub use crate::core::traits::{Estimator, Learner, Persistable, RanksFeatures};
    pub use crate::core::types::{DataType, DataValue, EstimatorType, Label};
    pub use crate::cross_validation::{HoldOut, KFold, Validator};
    pub use crate::dataset::{Dataset, Generator, Hyperplane, Labeled, SwissRoll, Unlabeled};
    pub use crate::metrics::{
        MeanAbsoluteError, MeanSquaredError, Metric, RSquared, RootMeanSquaredError,
    };
    pub use crate::regressors::{DummyRegressor, GradientBoost, RegressionTree};
    pub use crate::strategies::Strategy;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::info!("logging initialized");
    }
}
