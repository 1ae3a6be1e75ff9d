//! Guessing strategies for continuous values.
//!
//! A strategy learns a single representative value from a set of labels and
//! hands it back on request. [`DummyRegressor`](crate::regressors::DummyRegressor)
//! uses one to produce a constant prediction.

use crate::core::error::{RegBoostError, Result};
use crate::core::types::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a continuous guess is derived from training values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Arithmetic mean of the values
    Mean,
    /// Middle value (average of the two middle values for even counts)
    Median,
    /// The p-th percentile, `p` in [0, 100], linearly interpolated
    Percentile(f64),
    /// Always the given value, no fitting required
    Constant(f64),
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Mean
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Mean => write!(f, "Mean"),
            Strategy::Median => write!(f, "Median"),
            Strategy::Percentile(p) => write!(f, "Percentile({})", p),
            Strategy::Constant(v) => write!(f, "Constant({})", v),
        }
    }
}

impl Strategy {
    /// Check the strategy's own parameter.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Strategy::Percentile(p) if !(0.0..=100.0).contains(&p) => {
                Err(RegBoostError::invalid_parameter(
                    "percentile",
                    p.to_string(),
                    "must be in [0, 100]",
                ))
            }
            Strategy::Constant(v) if !v.is_finite() => Err(RegBoostError::invalid_parameter(
                "constant",
                v.to_string(),
                "must be finite",
            )),
            _ => Ok(()),
        }
    }

    /// Whether the strategy needs to see data before guessing.
    pub fn needs_fitting(&self) -> bool {
        !matches!(self, Strategy::Constant(_))
    }

    /// Learn the guess from a set of values.
    pub fn fit(&self, values: &[Label]) -> Result<Label> {
        self.validate()?;

        if let Strategy::Constant(value) = *self {
            return Ok(value);
        }

        if values.is_empty() {
            return Err(RegBoostError::invalid_argument(
                "strategy must be fitted to at least one value",
            ));
        }

        let guess = match *self {
            Strategy::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Strategy::Median => percentile(values, 50.0),
            Strategy::Percentile(p) => percentile(values, p),
            Strategy::Constant(value) => value,
        };

        Ok(guess)
    }
}

/// Linearly interpolated percentile of unsorted, non-empty values.
fn percentile(values: &[Label], p: f64) -> Label {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let position = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;

    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}
