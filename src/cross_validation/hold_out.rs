//! Single train/test split validation.

use crate::core::error::{RegBoostError, Result};
use crate::core::traits::Learner;
use crate::cross_validation::{rng_from, train_and_score, Validator};
use crate::dataset::{Dataset, Labeled};
use crate::metrics::Metric;
use crate::{ensure, invalid_argument};
use serde::{Deserialize, Serialize};

/// Holds out a random fraction of the samples for testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoldOut {
    ratio: f64,
    seed: Option<u64>,
}

impl HoldOut {
    /// `ratio` is the fraction of samples used for testing, in (0, 1).
    pub fn new(ratio: f64) -> Result<Self> {
        ensure!(
            ratio > 0.0 && ratio < 1.0,
            invalid_argument!("hold out ratio must be in (0, 1), {} given", ratio)
        );
        Ok(HoldOut { ratio, seed: None })
    }

    /// Use a fixed seed for the shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

impl Default for HoldOut {
    fn default() -> Self {
        HoldOut {
            ratio: 0.2,
            seed: None,
        }
    }
}

impl Validator for HoldOut {
    fn test(
        &self,
        learner: &mut dyn Learner,
        dataset: &Labeled,
        metric: &dyn Metric,
    ) -> Result<f64> {
        let mut rng = rng_from(self.seed);
        let (testing, training) = dataset.randomize(&mut rng).split(self.ratio)?;

        if training.is_empty() || testing.is_empty() {
            return Err(RegBoostError::invalid_argument(format!(
                "{} samples are too few to hold out {}",
                dataset.num_rows(),
                self.ratio
            )));
        }

        let score = train_and_score(learner, &training, &testing, metric)?;
        log::info!(
            "Hold out {}: {} on {} test samples",
            metric.name(),
            score,
            testing.num_rows()
        );
        Ok(score)
    }
}
