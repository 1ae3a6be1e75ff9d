//! Model persistence for regboost.
//!
//! Trained estimators are stored with serde, either in the compact bincode
//! encoding or as human-readable JSON.

use crate::core::error::{RegBoostError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SerializationFormat {
    /// Native Rust bincode format (fast, compact)
    #[default]
    Bincode,
    /// JSON format (human-readable, portable)
    Json,
}

impl SerializationFormat {
    /// Pick the format implied by a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SerializationFormat::Json,
            _ => SerializationFormat::Bincode,
        }
    }
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationFormat::Bincode => write!(f, "bincode"),
            SerializationFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for SerializationFormat {
    type Err = RegBoostError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bincode" | "bin" => Ok(SerializationFormat::Bincode),
            "json" => Ok(SerializationFormat::Json),
            _ => Err(RegBoostError::serialization(format!("Unknown format: {}", s))),
        }
    }
}

/// Serialize `value` into `path` using the format implied by its extension.
pub fn save_to_file<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let format = SerializationFormat::from_path(path);
    let mut writer = BufWriter::new(File::create(path)?);

    match format {
        SerializationFormat::Json => serde_json::to_writer(&mut writer, value)?,
        SerializationFormat::Bincode => bincode::serialize_into(&mut writer, value)?,
    }
    writer.flush()?;

    log::debug!("Saved model to {} ({})", path.display(), format);
    Ok(())
}

/// Deserialize a value from `path` using the format implied by its extension.
pub fn load_from_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = SerializationFormat::from_path(path);
    let reader = BufReader::new(File::open(path)?);

    let value = match format {
        SerializationFormat::Json => serde_json::from_reader(reader)?,
        SerializationFormat::Bincode => bincode::deserialize_from(reader)?,
    };

    log::debug!("Loaded model from {} ({})", path.display(), format);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            SerializationFormat::from_path(&PathBuf::from("model.json")),
            SerializationFormat::Json
        );
        assert_eq!(
            SerializationFormat::from_path(&PathBuf::from("model.JSON")),
            SerializationFormat::Json
        );
        assert_eq!(
            SerializationFormat::from_path(&PathBuf::from("model.bin")),
            SerializationFormat::Bincode
        );
        assert_eq!(
            SerializationFormat::from_path(&PathBuf::from("model")),
            SerializationFormat::Bincode
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("bin".parse::<SerializationFormat>().unwrap(), SerializationFormat::Bincode);
        assert_eq!("JSON".parse::<SerializationFormat>().unwrap(), SerializationFormat::Json);
        assert!("yaml".parse::<SerializationFormat>().is_err());
    }

    #[test]
    fn test_round_trip_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let value = vec![(1usize, "a".to_string()), (2, "b".to_string())];

        for name in ["values.json", "values.bin"] {
            let path = dir.path().join(name);
            save_to_file(&value, &path).unwrap();
            let loaded: Vec<(usize, String)> = load_from_file(&path).unwrap();
            assert_eq!(loaded, value);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u8>> = load_from_file(&dir.path().join("missing.bin"));
        assert!(matches!(result, Err(RegBoostError::IO { .. })));
    }
}
