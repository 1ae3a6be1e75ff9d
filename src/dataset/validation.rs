//! Sample matrix validation and estimator/dataset compatibility checks.

use crate::core::error::{RegBoostError, Result};
use crate::{ensure, invalid_argument};
use crate::core::traits::Estimator;
use crate::core::types::*;
use crate::dataset::Dataset;
use ndarray::{ArrayView1, ArrayView2, Axis};

/// Determine the type of every column, checking homogeneity along the way.
///
/// Columns of an empty matrix are reported as continuous.
pub fn column_types(samples: ArrayView2<'_, DataValue>) -> Result<Vec<DataType>> {
    let mut types = Vec::with_capacity(samples.ncols());

    for (column, values) in samples.axis_iter(Axis(1)).enumerate() {
        let data_type = values
            .iter()
            .next()
            .map_or(DataType::Continuous, DataValue::data_type);

        for (row, value) in values.iter().enumerate() {
            ensure!(
                value.data_type() == data_type,
                invalid_argument!(
                    "column {} mixes {} and {} values (row {})",
                    column,
                    data_type,
                    value.data_type(),
                    row
                )
            );
            if let DataValue::Continuous(x) = value {
                ensure!(
                    x.is_finite(),
                    invalid_argument!("column {} row {} holds non-finite value {}", column, row, x)
                );
            }
        }

        types.push(data_type);
    }

    Ok(types)
}

/// Check that every label is finite and that there is one per sample.
pub fn check_labels(num_rows: usize, labels: ArrayView1<'_, Label>) -> Result<()> {
    ensure!(
        labels.len() == num_rows,
        invalid_argument!(
            "number of labels ({}) must equal number of samples ({})",
            labels.len(),
            num_rows
        )
    );
    if let Some(index) = labels.iter().position(|label| !label.is_finite()) {
        return Err(invalid_argument!("label {} is not finite", index));
    }
    Ok(())
}

/// Fail unless every column type of the dataset is handled by the estimator.
pub fn check_compatibility(estimator: &dyn Estimator, dataset: &dyn Dataset) -> Result<()> {
    let compatibility = estimator.compatibility();

    for (column, data_type) in dataset.column_types().iter().enumerate() {
        ensure!(
            compatibility.contains(data_type),
            invalid_argument!(
                "{} estimator is not compatible with {} data in column {}",
                estimator.estimator_type(),
                data_type,
                column
            )
        );
    }
    Ok(())
}

/// Validate a training set and hand back its labels.
///
/// The dataset must be labeled, non-empty and compatible with the estimator.
pub fn training_labels<'a>(
    estimator: &dyn Estimator,
    dataset: &'a dyn Dataset,
) -> Result<ArrayView1<'a, Label>> {
    let labels = dataset
        .labels()
        .ok_or_else(|| invalid_argument!("training requires a labeled dataset"))?;

    ensure!(
        !dataset.is_empty(),
        invalid_argument!("training dataset must contain at least one sample")
    );

    check_compatibility(estimator, dataset)?;
    Ok(labels)
}

/// Check that a dataset has the shape an estimator was trained on.
///
/// Empty datasets are always accepted.
pub fn check_prediction_shape(trained_types: &[DataType], dataset: &dyn Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Ok(());
    }

    if dataset.num_columns() != trained_types.len() {
        return Err(RegBoostError::dimension_mismatch(
            format!("{} columns", trained_types.len()),
            format!("{} columns", dataset.num_columns()),
        ));
    }

    for (column, (expected, actual)) in trained_types
        .iter()
        .zip(dataset.column_types())
        .enumerate()
    {
        ensure!(
            expected == actual,
            invalid_argument!(
                "column {} was {} during training but is {} now",
                column,
                expected,
                actual
            )
        );
    }
    Ok(())
}
