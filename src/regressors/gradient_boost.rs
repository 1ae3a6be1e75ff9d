//! Gradient boosted regression ensemble.
//!
//! Starting from the predictions of an initial booster, every stage fits a
//! weak regressor to the residuals of a random subsample of the training set
//! and adds its shrunken predictions to the running estimate. Training stops
//! after the configured number of stages, when the loss drops under the
//! tolerance, or when it stops changing.

use crate::config::GradientBoostConfig;
use crate::core::error::{RegBoostError, Result};
use crate::core::traits::{Estimator, Learner, Persistable, RanksFeatures};
use crate::core::types::*;
use crate::dataset::validation::{check_prediction_shape, training_labels};
use crate::dataset::{Dataset, Labeled};
use crate::metrics::MeanSquaredError;
use crate::regressors::{DummyRegressor, RegressionTree};
use crate::{ensure, invalid_argument};
use ndarray::{Array1, Axis};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Stage-wise additive ensemble of weak regressors trained on residuals.
///
/// `B` is the weak learner cloned for every stage and `I` the estimator that
/// produces the initial guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoost<B = RegressionTree, I = DummyRegressor> {
    base: B,
    booster: I,
    config: GradientBoostConfig,
    ensemble: Vec<B>,
    steps: Vec<f64>,
    types: Vec<DataType>,
}

impl<B: Estimator, I: Estimator> GradientBoost<B, I> {
    /// Create an untrained ensemble.
    ///
    /// Fails with an invalid argument error unless both the base learner and
    /// the booster are regressors.
    pub fn new(base: B, config: GradientBoostConfig, booster: I) -> Result<Self> {
        ensure!(
            base.estimator_type() == EstimatorType::Regressor,
            invalid_argument!(
                "base learner must be a regressor, {} given",
                base.estimator_type()
            )
        );
        ensure!(
            booster.estimator_type() == EstimatorType::Regressor,
            invalid_argument!("booster must be a regressor, {} given", booster.estimator_type())
        );
        config.validate()?;

        Ok(GradientBoost {
            base,
            booster,
            config,
            ensemble: Vec::new(),
            steps: Vec::new(),
            types: Vec::new(),
        })
    }
}

impl<B, I> GradientBoost<B, I> {
    pub fn config(&self) -> &GradientBoostConfig {
        &self.config
    }

    /// The untrained base learner template.
    pub fn base(&self) -> &B {
        &self.base
    }

    pub fn booster(&self) -> &I {
        &self.booster
    }

    /// The trained stages, in order.
    pub fn estimators(&self) -> &[B] {
        &self.ensemble
    }

    pub fn num_estimators(&self) -> usize {
        self.ensemble.len()
    }

    /// Training loss (mean squared error) after each stage.
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    fn ensure_trained(&self) -> Result<()> {
        if self.ensemble.is_empty() {
            return Err(RegBoostError::not_trained("GradientBoost"));
        }
        Ok(())
    }
}

impl Default for GradientBoost {
    fn default() -> Self {
        GradientBoost {
            base: RegressionTree::weak_learner(),
            booster: DummyRegressor::default(),
            config: GradientBoostConfig::default(),
            ensemble: Vec::new(),
            steps: Vec::new(),
            types: Vec::new(),
        }
    }
}

impl<B: Estimator, I: Estimator> Estimator for GradientBoost<B, I> {
    fn estimator_type(&self) -> EstimatorType {
        EstimatorType::Regressor
    }

    fn compatibility(&self) -> Vec<DataType> {
        let booster = self.booster.compatibility();
        self.base
            .compatibility()
            .into_iter()
            .filter(|data_type| booster.contains(data_type))
            .collect()
    }

    fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
        self.ensure_trained()?;
        check_prediction_shape(&self.types, dataset)?;

        let mut predictions = self.booster.predict(dataset)?;
        for estimator in &self.ensemble {
            predictions.scaled_add(self.config.rate, &estimator.predict(dataset)?);
        }

        Ok(predictions)
    }
}

impl<B, I> Learner for GradientBoost<B, I>
where
    B: Learner + Clone,
    I: Learner,
{
    fn train(&mut self, dataset: &dyn Dataset) -> Result<()> {
        let labels = training_labels(&*self, dataset)?.to_owned();
        let samples = dataset.samples();
        let types = dataset.column_types().to_vec();

        let n = dataset.num_rows();
        let k = ((n as f64 * self.config.ratio).round() as usize).clamp(1, n);

        log::info!(
            "Training gradient boost on {} samples, {} per stage",
            n,
            k
        );

        // Stages are committed only once the whole loop has succeeded.
        self.ensemble.clear();
        self.steps.clear();
        self.types.clear();

        self.booster.train(dataset)?;
        let mut y_hat = self.booster.predict(dataset)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut ensemble = Vec::with_capacity(self.config.estimators);
        let mut steps = Vec::with_capacity(self.config.estimators);
        let mut previous = f64::INFINITY;

        for epoch in 1..=self.config.estimators {
            let residuals = &labels - &y_hat;

            let indices = sample(&mut rng, n, k).into_vec();
            let subset = Labeled::from_parts(
                samples.select(Axis(0), &indices),
                residuals.select(Axis(0), &indices),
                types.clone(),
            );

            let mut estimator = self.base.clone();
            estimator.train(&subset)?;

            let predictions = estimator.predict(dataset)?;
            y_hat.scaled_add(self.config.rate, &predictions);

            let loss = MeanSquaredError::compute(y_hat.view(), labels.view())?;

            ensemble.push(estimator);
            steps.push(loss);

            log::info!("Epoch {} - loss: {:.6}", epoch, loss);

            if !loss.is_finite() {
                log::warn!("Numerical instability detected at epoch {}", epoch);
                break;
            }
            if loss < self.config.tolerance {
                log::info!("Loss below tolerance, stopping at epoch {}", epoch);
                break;
            }
            if (previous - loss).abs() < self.config.min_change {
                log::info!("Loss converged, stopping at epoch {}", epoch);
                break;
            }

            previous = loss;
        }

        self.ensemble = ensemble;
        self.steps = steps;
        self.types = types;

        log::info!("Training complete with {} stages", self.ensemble.len());
        Ok(())
    }

    fn trained(&self) -> bool {
        self.booster.trained() && !self.ensemble.is_empty()
    }
}

impl<B: RanksFeatures, I> RanksFeatures for GradientBoost<B, I> {
    /// Average of the stage importances, normalized to sum to one.
    fn feature_importances(&self) -> Result<Array1<f64>> {
        let mut stages = self.ensemble.iter();
        let first = stages
            .next()
            .ok_or_else(|| RegBoostError::not_trained("GradientBoost"))?;

        let mut importances = first.feature_importances()?;
        for estimator in stages {
            importances += &estimator.feature_importances()?;
        }

        let total = importances.sum();
        if total > 0.0 {
            importances /= total;
        }
        Ok(importances)
    }
}

impl<B, I> Persistable for GradientBoost<B, I>
where
    B: Serialize + DeserializeOwned,
    I: Serialize + DeserializeOwned,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegressionTreeConfig;
    use crate::dataset::{Generator, Hyperplane, Unlabeled};
    use crate::metrics::{Metric, RSquared};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A stand-in estimator that claims to solve a different kind of problem.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Clusterer;

    impl Estimator for Clusterer {
        fn estimator_type(&self) -> EstimatorType {
            EstimatorType::Clusterer
        }

        fn compatibility(&self) -> Vec<DataType> {
            vec![DataType::Continuous]
        }

        fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
            Ok(Array1::zeros(dataset.num_rows()))
        }
    }

    /// Predicts NaN for every sample once trained.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Diverging {
        trained: bool,
    }

    impl Estimator for Diverging {
        fn estimator_type(&self) -> EstimatorType {
            EstimatorType::Regressor
        }

        fn compatibility(&self) -> Vec<DataType> {
            vec![DataType::Continuous]
        }

        fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
            Ok(Array1::from_elem(dataset.num_rows(), f64::NAN))
        }
    }

    impl Learner for Diverging {
        fn train(&mut self, _dataset: &dyn Dataset) -> Result<()> {
            self.trained = true;
            Ok(())
        }

        fn trained(&self) -> bool {
            self.trained
        }
    }

    static FLAKY_TRAINS: AtomicUsize = AtomicUsize::new(0);

    /// Predicts zero, but fails from its second training run onwards.
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    struct Flaky;

    impl Estimator for Flaky {
        fn estimator_type(&self) -> EstimatorType {
            EstimatorType::Regressor
        }

        fn compatibility(&self) -> Vec<DataType> {
            vec![DataType::Continuous]
        }

        fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
            Ok(Array1::zeros(dataset.num_rows()))
        }
    }

    impl Learner for Flaky {
        fn train(&mut self, _dataset: &dyn Dataset) -> Result<()> {
            if FLAKY_TRAINS.fetch_add(1, Ordering::SeqCst) >= 1 {
                return Err(RegBoostError::internal("stage failed to train"));
            }
            Ok(())
        }

        fn trained(&self) -> bool {
            true
        }
    }

    fn ensemble(estimators: usize) -> GradientBoost {
        let base = RegressionTree::new(
            RegressionTreeConfig::builder().max_depth(3).seed(0).build().unwrap(),
        )
        .unwrap();
        let config = GradientBoostConfig::builder()
            .estimators(estimators)
            .seed(0)
            .build()
            .unwrap();
        GradientBoost::new(base, config, DummyRegressor::default()).unwrap()
    }

    #[test]
    fn test_rejects_non_regressors() {
        let result = GradientBoost::new(
            Clusterer,
            GradientBoostConfig::default(),
            DummyRegressor::default(),
        );
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));

        let result = GradientBoost::new(
            RegressionTree::default(),
            GradientBoostConfig::default(),
            Clusterer,
        );
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_compatibility_is_intersection() {
        let estimator = GradientBoost {
            base: RegressionTree::default(),
            booster: Clusterer,
            config: GradientBoostConfig::default(),
            ensemble: Vec::new(),
            steps: Vec::new(),
            types: Vec::new(),
        };
        assert_eq!(estimator.compatibility(), vec![DataType::Continuous]);
        assert_eq!(
            <GradientBoost>::default().compatibility(),
            vec![DataType::Categorical, DataType::Continuous]
        );
    }

    #[test]
    fn test_loss_decreases() {
        let generator = Hyperplane::new(vec![1.0, -2.0, 0.5], 3.0, 0.05).unwrap();
        let training = generator.generate_seeded(300, 11).unwrap();

        let mut estimator = ensemble(30);
        estimator.train(&training).unwrap();

        let steps = estimator.steps();
        assert!(!steps.is_empty());
        assert_eq!(steps.len(), estimator.num_estimators());
        assert!(steps.last().unwrap() < steps.first().unwrap());

        let predictions = estimator.predict(&training).unwrap();
        let score = RSquared
            .score(predictions.view(), training.label_array().view())
            .unwrap();
        assert!(score > 0.7, "r squared was {}", score);
    }

    #[test]
    fn test_stops_early_on_tolerance() {
        let training =
            Labeled::quick(vec![vec![1.0], vec![2.0], vec![3.0]], vec![5.0, 5.0, 5.0]).unwrap();

        let mut estimator = ensemble(50);
        estimator.train(&training).unwrap();

        assert_eq!(estimator.num_estimators(), 1);
        assert_eq!(estimator.steps()[0], 0.0);
    }

    #[test]
    fn test_stops_when_loss_plateaus() {
        let training = Hyperplane::new(vec![1.0, 2.0], 0.0, 0.1)
            .unwrap()
            .generate_seeded(50, 8)
            .unwrap();
        let config = GradientBoostConfig::builder()
            .estimators(50)
            .ratio(1.0)
            .min_change(1e-4)
            .tolerance(0.0)
            .seed(0)
            .build()
            .unwrap();

        // A mean-guessing base fitted to mean-zero residuals adds nothing.
        let mut estimator =
            GradientBoost::new(DummyRegressor::default(), config, DummyRegressor::default())
                .unwrap();
        estimator.train(&training).unwrap();

        let steps = estimator.steps();
        assert!(estimator.num_estimators() < 50);
        assert_eq!(steps.len(), 2);
        assert!((steps[0] - steps[1]).abs() < 1e-4);
    }

    #[test]
    fn test_stops_on_non_finite_loss() {
        let training = Hyperplane::new(vec![1.0], 0.0, 0.0)
            .unwrap()
            .generate_seeded(20, 2)
            .unwrap();
        let config = GradientBoostConfig::builder()
            .estimators(10)
            .seed(0)
            .build()
            .unwrap();

        let mut estimator =
            GradientBoost::new(Diverging::default(), config, DummyRegressor::default()).unwrap();
        estimator.train(&training).unwrap();

        assert_eq!(estimator.num_estimators(), 1);
        assert!(estimator.steps()[0].is_nan());
        assert!(estimator.trained());
    }

    #[test]
    fn test_failed_stage_leaves_ensemble_untrained() {
        let training = Hyperplane::new(vec![1.0, -1.0], 0.0, 0.1)
            .unwrap()
            .generate_seeded(40, 6)
            .unwrap();
        let config = GradientBoostConfig::builder()
            .estimators(5)
            .tolerance(0.0)
            .min_change(0.0)
            .seed(0)
            .build()
            .unwrap();

        let mut estimator = GradientBoost::new(Flaky, config, DummyRegressor::default()).unwrap();
        assert!(estimator.train(&training).is_err());

        assert!(!estimator.trained());
        assert!(estimator.steps().is_empty());
        assert!(matches!(
            estimator.predict(&training),
            Err(RegBoostError::NotTrained { .. })
        ));
    }

    #[test]
    fn test_untrained() {
        let estimator: GradientBoost = GradientBoost::default();
        assert!(!estimator.trained());
        assert!(matches!(
            estimator.predict(&Unlabeled::quick(vec![vec![1.0]]).unwrap()),
            Err(RegBoostError::NotTrained { .. })
        ));
        assert!(estimator.feature_importances().is_err());
    }

    #[test]
    fn test_feature_importances() {
        let generator = Hyperplane::new(vec![5.0, 0.0], 0.0, 0.0).unwrap();
        let training = generator.generate_seeded(200, 3).unwrap();

        let mut estimator = ensemble(10);
        estimator.train(&training).unwrap();

        let importances = estimator.feature_importances().unwrap();
        assert_eq!(importances.len(), 2);
        assert!((importances.sum() - 1.0).abs() < 1e-9);
        assert!(importances[0] > importances[1]);
    }
}
