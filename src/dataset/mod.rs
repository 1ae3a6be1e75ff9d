//! Dataset management module for regboost.
//!
//! A dataset is a matrix of [`DataValue`] samples, one row per sample and one
//! column per feature, optionally paired with a vector of continuous labels.
//! Every column is homogeneous: it holds either continuous or categorical
//! values, never both.

pub mod generators;
pub mod labeled;
#[cfg(feature = "csv")]
pub mod loader;
pub mod unlabeled;
pub mod validation;

pub use generators::{Generator, Hyperplane, SwissRoll};
pub use labeled::Labeled;
pub use unlabeled::Unlabeled;

use crate::core::error::{RegBoostError, Result};
use crate::core::types::*;
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Read access shared by labeled and unlabeled datasets.
pub trait Dataset {
    /// The sample matrix (rows × columns).
    fn samples(&self) -> ArrayView2<'_, DataValue>;

    /// The labels, if this dataset carries any.
    fn labels(&self) -> Option<ArrayView1<'_, Label>> {
        None
    }

    /// Data type of every column.
    fn column_types(&self) -> &[DataType];

    /// Number of samples.
    fn num_rows(&self) -> usize {
        self.samples().nrows()
    }

    /// Number of feature columns.
    fn num_columns(&self) -> usize {
        self.samples().ncols()
    }

    /// Whether the dataset holds no samples.
    fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Data type of a single column.
    fn column_type(&self, column: usize) -> Option<DataType> {
        self.column_types().get(column).copied()
    }
}

/// Stack row vectors into a sample matrix, rejecting ragged input.
pub(crate) fn rows_to_array<V: Into<DataValue>>(rows: Vec<Vec<V>>) -> Result<Array2<DataValue>> {
    let num_rows = rows.len();
    let num_columns = rows.first().map_or(0, |row| row.len());

    let mut cells = Vec::with_capacity(num_rows * num_columns);
    for (index, row) in rows.into_iter().enumerate() {
        if row.len() != num_columns {
            return Err(RegBoostError::invalid_argument(format!(
                "sample {} has {} features but the first sample has {}",
                index,
                row.len(),
                num_columns
            )));
        }
        cells.extend(row.into_iter().map(Into::into));
    }

    Array2::from_shape_vec((num_rows, num_columns), cells)
        .map_err(|e| RegBoostError::internal(format!("Failed to shape samples: {}", e)))
}
