//! Labeled datasets used for training and scoring.

use crate::core::error::{RegBoostError, Result};
use crate::core::types::*;
use crate::dataset::validation::{check_labels, column_types};
use crate::dataset::{rows_to_array, Dataset, Unlabeled};
use ndarray::{concatenate, Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A sample matrix paired with one continuous label per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Labeled {
    samples: Array2<DataValue>,
    labels: Array1<Label>,
    types: Vec<DataType>,
}

impl Labeled {
    /// Create a labeled dataset, validating shape, column homogeneity and labels.
    pub fn new(samples: Array2<DataValue>, labels: Array1<Label>) -> Result<Self> {
        check_labels(samples.nrows(), labels.view())?;
        let types = column_types(samples.view())?;

        Ok(Labeled {
            samples,
            labels,
            types,
        })
    }

    /// Build a dataset from row vectors of anything convertible to [`DataValue`].
    pub fn quick<V: Into<DataValue>>(rows: Vec<Vec<V>>, labels: Vec<Label>) -> Result<Self> {
        Self::new(rows_to_array(rows)?, Array1::from_vec(labels))
    }

    /// Build an all-continuous dataset from numeric arrays.
    pub fn from_arrays(features: Array2<f64>, labels: Array1<Label>) -> Result<Self> {
        Self::new(features.mapv(DataValue::Continuous), labels)
    }

    /// A dataset with no samples and no columns.
    pub fn empty() -> Self {
        Labeled {
            samples: Array2::default((0, 0)),
            labels: Array1::zeros(0),
            types: Vec::new(),
        }
    }

    /// The labels as an owned-array reference.
    pub fn label_array(&self) -> &Array1<Label> {
        &self.labels
    }

    /// A single label.
    pub fn label(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    /// A single feature column.
    pub fn column(&self, column: usize) -> Option<ArrayView1<'_, DataValue>> {
        (column < self.samples.ncols()).then(|| self.samples.column(column))
    }

    /// The same samples with a different set of labels.
    pub fn with_labels(&self, labels: Array1<Label>) -> Result<Self> {
        check_labels(self.samples.nrows(), labels.view())?;

        Ok(Labeled {
            samples: self.samples.clone(),
            labels,
            types: self.types.clone(),
        })
    }

    /// The rows at `indices`, in that order.
    pub fn subset(&self, indices: &[usize]) -> Self {
        Labeled {
            samples: self.samples.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
            types: self.types.clone(),
        }
    }

    /// A copy with the rows in random order.
    pub fn randomize<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..self.num_rows()).collect();
        order.shuffle(rng);
        self.subset(&order)
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.num_rows());
        self.subset(&(0..n).collect::<Vec<_>>())
    }

    /// The last `n` rows.
    pub fn tail(&self, n: usize) -> Self {
        let total = self.num_rows();
        let n = n.min(total);
        self.subset(&((total - n)..total).collect::<Vec<_>>())
    }

    /// Split into a left part holding `ratio` of the rows and a right part with the rest.
    pub fn split(&self, ratio: f64) -> Result<(Self, Self)> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(RegBoostError::invalid_parameter(
                "ratio",
                ratio.to_string(),
                "must be in (0, 1)",
            ));
        }

        let n = (ratio * self.num_rows() as f64).round() as usize;
        Ok((self.head(n), self.tail(self.num_rows() - n)))
    }

    /// Partition the rows into `k` folds of near-equal size.
    pub fn fold(&self, k: usize) -> Result<Vec<Self>> {
        if k < 2 {
            return Err(RegBoostError::invalid_parameter(
                "k",
                k.to_string(),
                "must be at least 2",
            ));
        }
        if k > self.num_rows() {
            return Err(RegBoostError::invalid_argument(format!(
                "cannot make {} folds out of {} samples",
                k,
                self.num_rows()
            )));
        }

        let n = self.num_rows();
        let folds = (0..k)
            .map(|i| {
                let start = i * n / k;
                let end = (i + 1) * n / k;
                self.subset(&(start..end).collect::<Vec<_>>())
            })
            .collect();

        Ok(folds)
    }

    /// Stack the rows of another dataset below this one.
    pub fn merge(&self, other: &Labeled) -> Result<Self> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.types != other.types {
            return Err(RegBoostError::invalid_argument(
                "cannot merge datasets with different column types",
            ));
        }

        let samples = concatenate(Axis(0), &[self.samples.view(), other.samples.view()])
            .map_err(|e| RegBoostError::internal(format!("Failed to merge samples: {}", e)))?;
        let labels = concatenate(Axis(0), &[self.labels.view(), other.labels.view()])
            .map_err(|e| RegBoostError::internal(format!("Failed to merge labels: {}", e)))?;

        Ok(Labeled {
            samples,
            labels,
            types: self.types.clone(),
        })
    }

    /// Drop the labels.
    pub fn to_unlabeled(&self) -> Unlabeled {
        Unlabeled::from(self.clone())
    }

    pub(crate) fn into_parts(self) -> (Array2<DataValue>, Array1<Label>, Vec<DataType>) {
        (self.samples, self.labels, self.types)
    }

    /// Assemble a dataset from parts already known to be consistent.
    pub(crate) fn from_parts(
        samples: Array2<DataValue>,
        labels: Array1<Label>,
        types: Vec<DataType>,
    ) -> Self {
        debug_assert_eq!(samples.nrows(), labels.len());
        debug_assert_eq!(samples.ncols(), types.len());
        Labeled {
            samples,
            labels,
            types,
        }
    }
}

impl Default for Labeled {
    fn default() -> Self {
        Self::empty()
    }
}

impl Dataset for Labeled {
    fn samples(&self) -> ArrayView2<'_, DataValue> {
        self.samples.view()
    }

    fn labels(&self) -> Option<ArrayView1<'_, Label>> {
        Some(self.labels.view())
    }

    fn column_types(&self) -> &[DataType] {
        &self.types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_dataset() -> Labeled {
        Labeled::quick(
            vec![
                vec![DataValue::from(1.0), DataValue::from("red")],
                vec![DataValue::from(2.0), DataValue::from("blue")],
                vec![DataValue::from(3.0), DataValue::from("red")],
                vec![DataValue::from(4.0), DataValue::from("green")],
            ],
            vec![10.0, 20.0, 30.0, 40.0],
        )
        .unwrap()
    }

    #[test]
    fn test_quick_and_types() {
        let dataset = sample_dataset();
        assert_eq!(dataset.num_rows(), 4);
        assert_eq!(dataset.num_columns(), 2);
        assert_eq!(
            dataset.column_types(),
            &[DataType::Continuous, DataType::Categorical]
        );
        assert_eq!(dataset.label(2), Some(30.0));
        assert!(dataset.labels().is_some());
    }

    #[test]
    fn test_label_count_mismatch() {
        let result = Labeled::quick(vec![vec![1.0], vec![2.0]], vec![1.0]);
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_from_arrays() {
        let dataset = Labeled::from_arrays(array![[1.0, 2.0], [3.0, 4.0]], array![0.5, 1.5]).unwrap();
        assert_eq!(dataset.column_types(), &[DataType::Continuous; 2]);
        assert_eq!(dataset.samples()[[1, 1]], DataValue::Continuous(4.0));
    }

    #[test]
    fn test_head_tail_subset() {
        let dataset = sample_dataset();
        assert_eq!(dataset.head(2).label_array(), &array![10.0, 20.0]);
        assert_eq!(dataset.tail(1).label_array(), &array![40.0]);
        assert_eq!(dataset.subset(&[3, 0]).label_array(), &array![40.0, 10.0]);
        assert_eq!(dataset.head(10).num_rows(), 4);
    }

    #[test]
    fn test_randomize_keeps_pairs() {
        let dataset = sample_dataset();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = dataset.randomize(&mut rng);

        assert_eq!(shuffled.num_rows(), 4);
        for row in 0..shuffled.num_rows() {
            let x = shuffled.samples()[[row, 0]].as_f64().unwrap();
            assert_eq!(shuffled.label(row), Some(x * 10.0));
        }
    }

    #[test]
    fn test_split_and_fold() {
        let dataset = sample_dataset();
        let (left, right) = dataset.split(0.5).unwrap();
        assert_eq!(left.num_rows(), 2);
        assert_eq!(right.num_rows(), 2);
        assert!(dataset.split(1.0).is_err());

        let folds = dataset.fold(3).unwrap();
        assert_eq!(folds.len(), 3);
        assert_eq!(folds.iter().map(|f| f.num_rows()).sum::<usize>(), 4);
        assert!(dataset.fold(1).is_err());
        assert!(dataset.fold(5).is_err());
    }

    #[test]
    fn test_merge() {
        let dataset = sample_dataset();
        let merged = dataset.head(1).merge(&dataset.tail(2)).unwrap();
        assert_eq!(merged.label_array(), &array![10.0, 30.0, 40.0]);

        let other = Labeled::quick(vec![vec![1.0, 2.0]], vec![0.0]).unwrap();
        assert!(dataset.merge(&other).is_err());
        assert_eq!(Labeled::empty().merge(&dataset).unwrap(), dataset);
    }

    #[test]
    fn test_with_labels() {
        let dataset = sample_dataset();
        let relabeled = dataset.with_labels(array![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(relabeled.label(0), Some(1.0));
        assert!(dataset.with_labels(array![1.0]).is_err());
    }
}
