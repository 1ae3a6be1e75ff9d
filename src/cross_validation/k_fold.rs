//! K-fold cross validation.

use crate::core::error::Result;
use crate::core::traits::Learner;
use crate::cross_validation::{rng_from, train_and_score, Validator};
use crate::dataset::Labeled;
use crate::metrics::Metric;
use crate::{ensure, invalid_argument};
use serde::{Deserialize, Serialize};

/// Splits the shuffled samples into `k` folds and averages the score of
/// training on `k - 1` folds and testing on the remaining one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KFold {
    k: usize,
    seed: Option<u64>,
}

impl KFold {
    pub fn new(k: usize) -> Result<Self> {
        ensure!(k >= 2, invalid_argument!("k must be at least 2, {} given", k));
        Ok(KFold { k, seed: None })
    }

    /// Use a fixed seed for the shuffle.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl Default for KFold {
    fn default() -> Self {
        KFold { k: 5, seed: None }
    }
}

impl Validator for KFold {
    fn test(
        &self,
        learner: &mut dyn Learner,
        dataset: &Labeled,
        metric: &dyn Metric,
    ) -> Result<f64> {
        let mut rng = rng_from(self.seed);
        let folds = dataset.randomize(&mut rng).fold(self.k)?;

        let mut total = 0.0;
        for (i, testing) in folds.iter().enumerate() {
            let mut training = Labeled::empty();
            for (j, fold) in folds.iter().enumerate() {
                if i != j {
                    training = training.merge(fold)?;
                }
            }

            let score = train_and_score(learner, &training, testing, metric)?;
            log::debug!("Fold {} of {}: {} = {}", i + 1, self.k, metric.name(), score);
            total += score;
        }

        let score = total / self.k as f64;
        log::info!("{}-fold {}: {}", self.k, metric.name(), score);
        Ok(score)
    }
}
