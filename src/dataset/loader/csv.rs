//! CSV file loader for regboost.
//!
//! Cells that parse as floating point numbers become continuous values,
//! everything else is kept as a categorical string. The label column must
//! be numeric.

use crate::core::error::{RegBoostError, Result};
use crate::core::types::*;
use crate::dataset::{rows_to_array, Labeled};
use csv::{ReaderBuilder, StringRecord, Trim};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// CSV-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Name of the column holding the labels
    pub label_column: String,
    /// Field delimiter
    pub delimiter: char,
    /// Trim whitespace from fields
    pub trim: bool,
    /// Maximum number of rows to read
    pub max_rows: Option<usize>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        CsvConfig {
            label_column: "label".to_string(),
            delimiter: ',',
            trim: true,
            max_rows: None,
        }
    }
}

impl CsvConfig {
    /// Set the label column name
    pub fn with_label_column<S: Into<String>>(mut self, label_column: S) -> Self {
        self.label_column = label_column.into();
        self
    }

    /// Set delimiter character
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set maximum rows to read
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

/// CSV data loader
#[derive(Debug, Clone)]
pub struct CsvLoader {
    config: CsvConfig,
}

impl CsvLoader {
    /// Create a new CSV loader
    pub fn new(config: CsvConfig) -> Self {
        CsvLoader { config }
    }

    /// Read the file into a labeled dataset.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Labeled> {
        let path = path.as_ref();
        if !self.config.delimiter.is_ascii() {
            return Err(RegBoostError::invalid_parameter(
                "delimiter",
                self.config.delimiter.to_string(),
                "must be an ASCII character",
            ));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.config.delimiter as u8)
            .trim(if self.config.trim { Trim::All } else { Trim::None })
            .from_reader(File::open(path)?);

        let headers = reader.headers()?.clone();
        let label_index = headers
            .iter()
            .position(|name| name == self.config.label_column)
            .ok_or_else(|| {
                RegBoostError::invalid_argument(format!(
                    "label column '{}' not found in {}",
                    self.config.label_column,
                    path.display()
                ))
            })?;

        let mut rows = Vec::new();
        let mut labels = Vec::new();

        for (line, record) in reader.records().enumerate() {
            if self.config.max_rows.is_some_and(|max| rows.len() >= max) {
                break;
            }
            let record = record?;
            let (row, label) = Self::parse_record(&record, label_index, line)?;
            rows.push(row);
            labels.push(label);
        }

        log::debug!(
            "Loaded {} samples with {} features from {}",
            rows.len(),
            headers.len().saturating_sub(1),
            path.display()
        );

        Labeled::new(rows_to_array(rows)?, Array1::from_vec(labels))
    }

    fn parse_record(
        record: &StringRecord,
        label_index: usize,
        line: usize,
    ) -> Result<(Vec<DataValue>, Label)> {
        let mut row = Vec::with_capacity(record.len().saturating_sub(1));
        let mut label = None;

        for (index, field) in record.iter().enumerate() {
            if index == label_index {
                let value = field.parse::<f64>().map_err(|_| {
                    RegBoostError::invalid_argument(format!(
                        "label '{}' on record {} is not numeric",
                        field, line
                    ))
                })?;
                label = Some(value);
            } else {
                row.push(Self::parse_field(field));
            }
        }

        let label = label.ok_or_else(|| {
            RegBoostError::invalid_argument(format!("record {} has no label field", line))
        })?;
        Ok((row, label))
    }

    fn parse_field(field: &str) -> DataValue {
        match field.parse::<f64>() {
            Ok(value) => DataValue::Continuous(value),
            Err(_) => DataValue::Categorical(field.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_mixed_columns() {
        let file = write_csv("size,color,price\n1.5,red,10\n2.5,blue,20\n3.0,red,30\n");
        let dataset = CsvLoader::new(CsvConfig::default().with_label_column("price"))
            .load(file.path())
            .unwrap();

        assert_eq!(dataset.num_rows(), 3);
        assert_eq!(
            dataset.column_types(),
            &[DataType::Continuous, DataType::Categorical]
        );
        assert_eq!(dataset.label(1), Some(20.0));
    }

    #[test]
    fn test_missing_label_column() {
        let file = write_csv("a,b\n1,2\n");
        let result = CsvLoader::new(CsvConfig::default()).load(file.path());
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_non_numeric_label() {
        let file = write_csv("a,label\n1,high\n");
        let result = CsvLoader::new(CsvConfig::default()).load(file.path());
        assert!(matches!(result, Err(RegBoostError::InvalidArgument { .. })));
    }

    #[test]
    fn test_max_rows_and_delimiter() {
        let file = write_csv("a;label\n1;1\n2;2\n3;3\n");
        let dataset = CsvLoader::new(CsvConfig::default().with_delimiter(';').with_max_rows(2))
            .load(file.path())
            .unwrap();
        assert_eq!(dataset.num_rows(), 2);
    }
}
