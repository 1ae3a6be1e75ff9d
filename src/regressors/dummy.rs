//! Baseline regressor that predicts a single learned value.

use crate::core::error::{RegBoostError, Result};
use crate::core::traits::{Estimator, Learner, Persistable};
use crate::core::types::*;
use crate::dataset::validation::{check_prediction_shape, training_labels};
use crate::dataset::Dataset;
use crate::strategies::Strategy;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Predicts the same guess for every sample, learned by a [`Strategy`].
///
/// Mostly useful as a baseline and as the initial estimator of gradient
/// boosting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DummyRegressor {
    strategy: Strategy,
    guess: Option<Label>,
    #[serde(default)]
    types: Vec<DataType>,
}

impl DummyRegressor {
    pub fn new(strategy: Strategy) -> Result<Self> {
        strategy.validate()?;
        Ok(DummyRegressor {
            strategy,
            guess: None,
            types: Vec::new(),
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The learned guess.
    pub fn guess(&self) -> Result<Label> {
        self.guess
            .ok_or_else(|| RegBoostError::not_trained("DummyRegressor"))
    }
}

impl Estimator for DummyRegressor {
    fn estimator_type(&self) -> EstimatorType {
        EstimatorType::Regressor
    }

    fn compatibility(&self) -> Vec<DataType> {
        vec![DataType::Categorical, DataType::Continuous]
    }

    fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
        let guess = self.guess()?;
        check_prediction_shape(&self.types, dataset)?;
        Ok(Array1::from_elem(dataset.num_rows(), guess))
    }
}

impl Learner for DummyRegressor {
    fn train(&mut self, dataset: &dyn Dataset) -> Result<()> {
        let labels = training_labels(&*self, dataset)?;
        self.guess = Some(self.strategy.fit(&labels.to_vec())?);
        self.types = dataset.column_types().to_vec();
        Ok(())
    }

    fn trained(&self) -> bool {
        self.guess.is_some()
    }
}

impl Persistable for DummyRegressor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Labeled, Unlabeled};

    #[test]
    fn test_mean_strategy() {
        let dataset = Labeled::quick(vec![vec![1.0], vec![2.0], vec![3.0]], vec![1.0, 2.0, 6.0])
            .unwrap();
        let mut estimator = DummyRegressor::default();

        assert!(!estimator.trained());
        estimator.train(&dataset).unwrap();
        assert!(estimator.trained());

        let predictions = estimator.predict(&dataset).unwrap();
        assert_eq!(predictions.to_vec(), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_categorical_features_accepted() {
        let dataset = Labeled::quick(vec![vec!["a"], vec!["b"]], vec![4.0, 8.0]).unwrap();
        let mut estimator = DummyRegressor::new(Strategy::Median).unwrap();
        estimator.train(&dataset).unwrap();
        assert_eq!(estimator.guess().unwrap(), 6.0);
    }

    #[test]
    fn test_untrained_predict() {
        let estimator = DummyRegressor::new(Strategy::Constant(1.0)).unwrap();
        let result = estimator.predict(&Unlabeled::quick(vec![vec![1.0]]).unwrap());
        assert!(matches!(result, Err(RegBoostError::NotTrained { .. })));
    }

    #[test]
    fn test_unlabeled_training_rejected() {
        let mut estimator = DummyRegressor::default();
        let result = estimator.train(&Unlabeled::quick(vec![vec![1.0]]).unwrap());
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_predict_checks_shape() {
        let dataset = Labeled::quick(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![1.0, 2.0])
            .unwrap();
        let mut estimator = DummyRegressor::default();
        estimator.train(&dataset).unwrap();

        let wide = Unlabeled::quick(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(
            estimator.predict(&wide),
            Err(RegBoostError::DimensionMismatch { .. })
        ));

        let categorical = Unlabeled::quick(vec![vec!["a", "b"]]).unwrap();
        assert!(matches!(
            estimator.predict(&categorical),
            Err(RegBoostError::InvalidArgument { .. })
        ));

        assert_eq!(estimator.predict(&Unlabeled::empty()).unwrap().len(), 0);
    }

    #[test]
    fn test_invalid_strategy() {
        assert!(DummyRegressor::new(Strategy::Percentile(-1.0)).is_err());
    }
}
