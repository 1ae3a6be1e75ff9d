//! CART regression tree learner.

use crate::config::RegressionTreeConfig;
use crate::core::constants::DEFAULT_BASE_MAX_DEPTH;
use crate::core::error::{RegBoostError, Result};
use crate::core::traits::{Estimator, Learner, Persistable, RanksFeatures};
use crate::core::types::*;
use crate::dataset::validation::{check_prediction_shape, training_labels};
use crate::dataset::Dataset;
use crate::tree::Cart;
use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A binary regression tree grown greedily by variance reduction.
///
/// Handles continuous and categorical columns. Leaves predict the mean of
/// the training labels that reached them.
///
/// ```rust
/// use regboost::prelude::*;
///
/// # fn example() -> regboost::Result<()> {
/// let training = SwissRoll::default().generate_seeded(200, 0)?;
///
/// let mut estimator = RegressionTree::new(
///     RegressionTreeConfig::builder().max_depth(10).build()?,
/// )?;
/// estimator.train(&training)?;
///
/// let predictions = estimator.predict(&training)?;
/// assert_eq!(predictions.len(), 200);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    config: RegressionTreeConfig,
    tree: Option<Cart>,
    types: Vec<DataType>,
}

impl RegressionTree {
    /// Create an untrained tree from a validated configuration.
    pub fn new(config: RegressionTreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(RegressionTree {
            config,
            tree: None,
            types: Vec::new(),
        })
    }

    /// Create an untrained tree limited to `max_depth` split levels.
    pub fn with_max_depth(max_depth: usize) -> Result<Self> {
        Self::new(RegressionTreeConfig {
            max_depth: Some(max_depth),
            ..Default::default()
        })
    }

    /// The shallow tree used as the default boosting base learner.
    pub(crate) fn weak_learner() -> Self {
        RegressionTree {
            config: RegressionTreeConfig {
                max_depth: Some(DEFAULT_BASE_MAX_DEPTH),
                ..Default::default()
            },
            tree: None,
            types: Vec::new(),
        }
    }

    pub fn config(&self) -> &RegressionTreeConfig {
        &self.config
    }

    /// The grown tree, if trained.
    pub fn tree(&self) -> Option<&Cart> {
        self.tree.as_ref()
    }

    fn grown(&self) -> Result<&Cart> {
        self.tree
            .as_ref()
            .ok_or_else(|| RegBoostError::not_trained("RegressionTree"))
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when untrained.
    pub fn height(&self) -> usize {
        self.tree.as_ref().map_or(0, Cart::height)
    }

    /// Height difference between the root's left and right subtrees.
    pub fn balance(&self) -> isize {
        self.tree.as_ref().map_or(0, Cart::balance)
    }

    pub fn num_leaves(&self) -> usize {
        self.tree.as_ref().map_or(0, Cart::num_leaves)
    }

    /// Human-readable rendering of the learned decision rules.
    pub fn rules(&self) -> Result<String> {
        Ok(self.grown()?.rules())
    }

    /// Predict a single sample.
    pub fn predict_sample(&self, sample: ArrayView1<'_, DataValue>) -> Result<Label> {
        self.grown()?.predict_sample(sample)
    }
}

impl Estimator for RegressionTree {
    fn estimator_type(&self) -> EstimatorType {
        EstimatorType::Regressor
    }

    fn compatibility(&self) -> Vec<DataType> {
        vec![DataType::Categorical, DataType::Continuous]
    }

    fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>> {
        let tree = self.grown()?;
        check_prediction_shape(&self.types, dataset)?;

        let samples = dataset.samples();
        let predictions = (0..samples.nrows())
            .into_par_iter()
            .map(|i| tree.predict_sample(samples.row(i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Array1::from_vec(predictions))
    }
}

impl Learner for RegressionTree {
    fn train(&mut self, dataset: &dyn Dataset) -> Result<()> {
        let labels = training_labels(&*self, dataset)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let tree = Cart::grow(
            dataset.samples(),
            labels,
            dataset.column_types(),
            &self.config,
            &mut rng,
        )?;

        log::debug!(
            "Grew regression tree on {} samples: {}",
            dataset.num_rows(),
            tree
        );

        self.types = dataset.column_types().to_vec();
        self.tree = Some(tree);
        Ok(())
    }

    fn trained(&self) -> bool {
        self.tree.is_some()
    }
}

impl RanksFeatures for RegressionTree {
    fn feature_importances(&self) -> Result<Array1<f64>> {
        Ok(self.grown()?.feature_importances())
    }
}

impl Persistable for RegressionTree {}
