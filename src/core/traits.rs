//! Core trait definitions for regboost.
//!
//! These traits form the estimator API shared by every model in the crate.
//! Datasets are passed as trait objects so that labeled and unlabeled data
//! flow through the same entry points and are rejected at runtime when they
//! do not fit the operation.

use crate::core::error::Result;
use crate::core::types::*;
use crate::dataset::Dataset;
use ndarray::Array1;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Anything that can make predictions on a dataset.
pub trait Estimator {
    /// The family of problem this estimator solves.
    fn estimator_type(&self) -> EstimatorType;

    /// Data types of the feature columns this estimator can handle.
    fn compatibility(&self) -> Vec<DataType>;

    /// Predict one output per row of the dataset.
    fn predict(&self, dataset: &dyn Dataset) -> Result<Array1<Label>>;
}

/// An estimator that must be trained on labeled data before predicting.
pub trait Learner: Estimator {
    /// Train the estimator on a labeled dataset.
    fn train(&mut self, dataset: &dyn Dataset) -> Result<()>;

    /// Whether `train` has completed successfully.
    fn trained(&self) -> bool;
}

/// Learners that can score the relative importance of each feature column.
pub trait RanksFeatures {
    /// Normalized importance per training column.
    fn feature_importances(&self) -> Result<Array1<f64>>;
}

/// Models that can be written to and read back from disk.
///
/// Files with a `.json` extension are stored as JSON, everything else uses
/// the compact bincode encoding.
pub trait Persistable: Serialize + DeserializeOwned {
    /// Save the model to a file.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        crate::io::save_to_file(self, path.as_ref())
    }

    /// Load a model from a file.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        crate::io::load_from_file(path.as_ref())
    }
}
