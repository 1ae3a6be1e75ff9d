//! Default hyper-parameters and numeric constants.

/// Smallest meaningful difference between impurities.
pub const EPSILON: f64 = 1e-8;

/// Default number of samples at or below which a node becomes a leaf.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 3;

/// Default minimum purity increase a split must achieve.
pub const DEFAULT_MIN_PURITY_INCREASE: f64 = 0.0;

/// Default label variance at or below which a node is considered pure.
pub const DEFAULT_TREE_TOLERANCE: f64 = 1e-4;

/// Default depth of the weak learners grown by gradient boosting.
pub const DEFAULT_BASE_MAX_DEPTH: usize = 3;

/// Default shrinkage applied to every boosting stage.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Default number of boosting stages.
pub const DEFAULT_ESTIMATORS: usize = 100;

/// Default fraction of rows sampled for each boosting stage.
pub const DEFAULT_SUBSAMPLE_RATIO: f64 = 0.8;

/// Default minimum change in training loss to keep boosting.
pub const DEFAULT_MIN_CHANGE: f64 = 1e-4;

/// Default training loss under which boosting stops early.
pub const DEFAULT_BOOST_TOLERANCE: f64 = 1e-3;
