//! Core data types for regboost.
//!
//! Samples are matrices of [`DataValue`] cells so that a single dataset can
//! mix continuous measurements with categorical attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target value type for regression labels and predictions.
pub type Label = f64;

/// Column index into a sample matrix.
pub type FeatureIndex = usize;

/// Node identifier inside a tree arena.
pub type NodeIndex = usize;

/// The kind of data held by a feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Real-valued, ordered feature
    Continuous,
    /// Discrete feature compared by equality only
    Categorical,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Continuous => write!(f, "continuous"),
            DataType::Categorical => write!(f, "categorical"),
        }
    }
}

/// A single cell of a sample matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataValue {
    Continuous(f64),
    Categorical(String),
}

impl DataValue {
    /// Returns the data type of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            DataValue::Continuous(_) => DataType::Continuous,
            DataValue::Categorical(_) => DataType::Categorical,
        }
    }

    /// Returns the numeric value for continuous cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Continuous(value) => Some(*value),
            DataValue::Categorical(_) => None,
        }
    }

    /// Returns the category for categorical cells.
    pub fn as_category(&self) -> Option<&str> {
        match self {
            DataValue::Continuous(_) => None,
            DataValue::Categorical(category) => Some(category),
        }
    }
}

impl Default for DataValue {
    fn default() -> Self {
        DataValue::Continuous(0.0)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Continuous(value) => write!(f, "{}", value),
            DataValue::Categorical(category) => write!(f, "{}", category),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Continuous(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Categorical(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Categorical(value)
    }
}

/// The family of problem an estimator solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorType {
    Classifier,
    Regressor,
    Clusterer,
    AnomalyDetector,
}

impl fmt::Display for EstimatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorType::Classifier => write!(f, "classifier"),
            EstimatorType::Regressor => write!(f, "regressor"),
            EstimatorType::Clusterer => write!(f, "clusterer"),
            EstimatorType::AnomalyDetector => write!(f, "anomaly detector"),
        }
    }
}
