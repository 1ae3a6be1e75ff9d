//! Model validation by scoring on held-out data.
//!
//! A [`Validator`] partitions a labeled dataset into training and testing
//! parts, trains a learner on the former and scores its predictions on the
//! latter with a [`Metric`].

pub mod hold_out;
pub mod k_fold;

pub use hold_out::HoldOut;
pub use k_fold::KFold;

use crate::core::error::Result;
use crate::core::traits::Learner;
use crate::dataset::Labeled;
use crate::metrics::Metric;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Estimates the generalization score of a learner.
pub trait Validator {
    /// Train and score the learner, returning the validation score.
    ///
    /// The learner is left trained on the last training partition.
    fn test(&self, learner: &mut dyn Learner, dataset: &Labeled, metric: &dyn Metric)
        -> Result<f64>;
}

/// Train on one partition and score on another.
pub(crate) fn train_and_score(
    learner: &mut dyn Learner,
    training: &Labeled,
    testing: &Labeled,
    metric: &dyn Metric,
) -> Result<f64> {
    learner.train(training)?;
    let predictions = learner.predict(testing)?;
    metric.score(predictions.view(), testing.label_array().view())
}

pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
