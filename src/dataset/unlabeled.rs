//! Unlabeled datasets used for inference.

use crate::core::error::Result;
use crate::core::types::*;
use crate::dataset::validation::column_types;
use crate::dataset::{rows_to_array, Dataset, Labeled};
use ndarray::{Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// A sample matrix without labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unlabeled {
    samples: Array2<DataValue>,
    types: Vec<DataType>,
}

impl Unlabeled {
    /// Create an unlabeled dataset, validating column homogeneity.
    pub fn new(samples: Array2<DataValue>) -> Result<Self> {
        let types = column_types(samples.view())?;
        Ok(Unlabeled { samples, types })
    }

    /// Build a dataset from row vectors of anything convertible to [`DataValue`].
    pub fn quick<V: Into<DataValue>>(rows: Vec<Vec<V>>) -> Result<Self> {
        Self::new(rows_to_array(rows)?)
    }

    /// Build an all-continuous dataset from a numeric array.
    pub fn from_array(features: Array2<f64>) -> Result<Self> {
        Self::new(features.mapv(DataValue::Continuous))
    }

    /// A dataset with no samples and no columns.
    pub fn empty() -> Self {
        Unlabeled {
            samples: Array2::default((0, 0)),
            types: Vec::new(),
        }
    }

    /// The rows at `indices`, in that order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Unlabeled {
            samples: self.samples.select(Axis(0), indices),
            types: self.types.clone(),
        }
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.num_rows());
        self.subset(&(0..n).collect::<Vec<_>>())
    }
}

impl Default for Unlabeled {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Labeled> for Unlabeled {
    fn from(dataset: Labeled) -> Self {
        let (samples, _, types) = dataset.into_parts();
        Unlabeled { samples, types }
    }
}

impl Dataset for Unlabeled {
    fn samples(&self) -> ArrayView2<'_, DataValue> {
        self.samples.view()
    }

    fn column_types(&self) -> &[DataType] {
        &self.types
    }
}
