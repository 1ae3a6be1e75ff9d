//! Loading labeled datasets from files.

pub mod csv;

pub use self::csv::{CsvConfig, CsvLoader};

use crate::core::error::Result;
use crate::dataset::Labeled;
use std::path::Path;

/// Read a headered, comma-separated file whose `label_column` holds the targets.
pub fn from_csv<P: AsRef<Path>>(path: P, label_column: &str) -> Result<Labeled> {
    CsvLoader::new(CsvConfig::default().with_label_column(label_column)).load(path)
}
