//! Evaluation metrics for regression models.
//!
//! Every metric follows the "greater is better" convention so that
//! validators can compare scores without knowing which metric produced
//! them: error metrics report their negated value.
//!
//! ```rust
//! use regboost::metrics::{Metric, RSquared};
//! use ndarray::array;
//!
//! # fn example() -> regboost::Result<()> {
//! let score = RSquared.score(array![1.0, 2.0, 3.0].view(), array![1.0, 2.0, 3.0].view())?;
//! assert_eq!(score, 1.0);
//! # Ok(())
//! # }
//! ```

pub mod regression;

pub use regression::{MeanAbsoluteError, MeanSquaredError, RSquared, RootMeanSquaredError};

use crate::core::error::{RegBoostError, Result};
use crate::core::types::Label;
use ndarray::ArrayView1;

/// Scores a set of predictions against their ground-truth labels.
pub trait Metric: Send + Sync {
    /// Compute the score. Greater is always better.
    fn score(&self, predictions: ArrayView1<'_, Label>, labels: ArrayView1<'_, Label>)
        -> Result<f64>;

    /// Lowest and highest score this metric can produce.
    fn range(&self) -> (f64, f64);

    /// Short metric name for logs.
    fn name(&self) -> &'static str;
}

/// Ensure predictions and labels line up and are non-empty.
pub(crate) fn validate_inputs(
    predictions: &ArrayView1<'_, Label>,
    labels: &ArrayView1<'_, Label>,
) -> Result<()> {
    if predictions.len() != labels.len() {
        return Err(RegBoostError::dimension_mismatch(
            format!("{} predictions (one per label)", labels.len()),
            format!("{} predictions", predictions.len()),
        ));
    }
    if predictions.is_empty() {
        return Err(RegBoostError::invalid_argument(
            "cannot score an empty set of predictions",
        ));
    }
    Ok(())
}
