//! Regression estimators.
//!
//! - [`RegressionTree`]: a CART tree grown by variance reduction
//! - [`GradientBoost`]: a stage-wise ensemble of weak regressors fit to residuals
//! - [`DummyRegressor`]: a constant baseline driven by a [`Strategy`](crate::strategies::Strategy)

pub mod dummy;
pub mod gradient_boost;
pub mod regression_tree;

pub use dummy::DummyRegressor;
pub use gradient_boost::GradientBoost;
pub use regression_tree::RegressionTree;
