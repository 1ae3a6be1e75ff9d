//! Regression metrics: R², MSE, RMSE and MAE.

use crate::core::error::Result;
use crate::core::types::Label;
use crate::metrics::{validate_inputs, Metric};
use ndarray::{ArrayView1, Zip};
use serde::{Deserialize, Serialize};

/// Coefficient of determination.
///
/// `1 - SS_res / SS_tot`. When the labels are constant, a perfect fit scores
/// 1 and anything else scores 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RSquared;

impl Metric for RSquared {
    fn score(
        &self,
        predictions: ArrayView1<'_, Label>,
        labels: ArrayView1<'_, Label>,
    ) -> Result<f64> {
        validate_inputs(&predictions, &labels)?;

        let mean = labels.mean().unwrap_or(0.0);
        let ss_tot: f64 = labels.iter().map(|y| (y - mean).powi(2)).sum();
        let ss_res = sum_of_squared_errors(&predictions, &labels);

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }

        Ok(1.0 - ss_res / ss_tot)
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, 1.0)
    }

    fn name(&self) -> &'static str {
        "r_squared"
    }
}

/// Negated mean squared error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    /// The raw (non-negated) mean squared error.
    pub fn compute(predictions: ArrayView1<'_, Label>, labels: ArrayView1<'_, Label>) -> Result<f64> {
        validate_inputs(&predictions, &labels)?;
        Ok(sum_of_squared_errors(&predictions, &labels) / labels.len() as f64)
    }
}

impl Metric for MeanSquaredError {
    fn score(
        &self,
        predictions: ArrayView1<'_, Label>,
        labels: ArrayView1<'_, Label>,
    ) -> Result<f64> {
        Ok(-Self::compute(predictions, labels)?)
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, 0.0)
    }

    fn name(&self) -> &'static str {
        "mse"
    }
}

/// Negated root mean squared error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RootMeanSquaredError;

impl Metric for RootMeanSquaredError {
    fn score(
        &self,
        predictions: ArrayView1<'_, Label>,
        labels: ArrayView1<'_, Label>,
    ) -> Result<f64> {
        Ok(-MeanSquaredError::compute(predictions, labels)?.sqrt())
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, 0.0)
    }

    fn name(&self) -> &'static str {
        "rmse"
    }
}

/// Negated mean absolute error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeanAbsoluteError;

impl Metric for MeanAbsoluteError {
    fn score(
        &self,
        predictions: ArrayView1<'_, Label>,
        labels: ArrayView1<'_, Label>,
    ) -> Result<f64> {
        validate_inputs(&predictions, &labels)?;

        let total = Zip::from(&predictions)
            .and(&labels)
            .fold(0.0, |acc, p, y| acc + (p - y).abs());

        Ok(-total / labels.len() as f64)
    }

    fn range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, 0.0)
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}

fn sum_of_squared_errors(predictions: &ArrayView1<'_, Label>, labels: &ArrayView1<'_, Label>) -> f64 {
    Zip::from(predictions)
        .and(labels)
        .fold(0.0, |acc, p, y| acc + (p - y).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RegBoostError;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_r_squared() {
        let labels = array![3.0, -0.5, 2.0, 7.0];
        let predictions = array![2.5, 0.0, 2.0, 8.0];

        let score = RSquared.score(predictions.view(), labels.view()).unwrap();
        assert_abs_diff_eq!(score, 0.948_608_137, epsilon = 1e-6);
    }

    #[test]
    fn test_r_squared_constant_labels() {
        let labels = array![2.0, 2.0];
        assert_eq!(RSquared.score(array![2.0, 2.0].view(), labels.view()).unwrap(), 1.0);
        assert_eq!(RSquared.score(array![1.0, 2.0].view(), labels.view()).unwrap(), 0.0);
    }

    #[test]
    fn test_error_metrics() {
        let labels = array![1.0, 2.0, 3.0];
        let predictions = array![2.0, 2.0, 5.0];

        assert_abs_diff_eq!(
            MeanSquaredError.score(predictions.view(), labels.view()).unwrap(),
            -5.0 / 3.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            RootMeanSquaredError.score(predictions.view(), labels.view()).unwrap(),
            -(5.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            MeanAbsoluteError.score(predictions.view(), labels.view()).unwrap(),
            -1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let result = RSquared.score(array![1.0].view(), array![1.0, 2.0].view());
        assert!(matches!(result, Err(RegBoostError::DimensionMismatch { .. })));

        let empty = ndarray::Array1::<f64>::zeros(0);
        let result = MeanAbsoluteError.score(empty.view(), empty.view());
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_ranges() {
        assert_eq!(RSquared.range().1, 1.0);
        assert_eq!(MeanSquaredError.range().1, 0.0);
        assert_eq!(MeanAbsoluteError.name(), "mae");
    }
}
