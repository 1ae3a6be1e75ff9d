//! Error handling and error types for regboost.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! distinguishes caller mistakes (bad arguments, incompatible data) from
//! runtime failures such as predicting with an estimator that was never
//! trained.

use std::io;
use thiserror::Error;

/// Main error type for the regboost library.
#[derive(Error, Debug)]
pub enum RegBoostError {
    /// Malformed or unsuitable input handed to an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Estimator used before it has been trained
    #[error("{estimator} has not been trained")]
    NotTrained { estimator: String },

    /// Hyper-parameter outside of its accepted range
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Configuration loading and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Model serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// CSV parsing errors
    #[cfg(feature = "csv")]
    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Bincode serialization errors
    #[error("Bincode error: {source}")]
    Bincode {
        #[from]
        source: bincode::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using RegBoostError
pub type Result<T> = std::result::Result<T, RegBoostError>;

impl RegBoostError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        RegBoostError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not trained error for the named estimator
    pub fn not_trained<S: Into<String>>(estimator: S) -> Self {
        RegBoostError::NotTrained {
            estimator: estimator.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        RegBoostError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        RegBoostError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        RegBoostError::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        RegBoostError::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        RegBoostError::Internal {
            message: message.into(),
        }
    }

    /// True for failures caused by the state of the program rather than by
    /// the arguments of the failing call.
    pub fn is_runtime(&self) -> bool {
        matches!(
            self,
            RegBoostError::NotTrained { .. }
                | RegBoostError::IO { .. }
                | RegBoostError::Internal { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            RegBoostError::InvalidArgument { .. } => "invalid_argument",
            RegBoostError::NotTrained { .. } => "not_trained",
            RegBoostError::InvalidParameter { .. } => "invalid_parameter",
            RegBoostError::DimensionMismatch { .. } => "dimension_mismatch",
            RegBoostError::Config { .. } => "config",
            RegBoostError::Serialization { .. } => "serialization",
            RegBoostError::IO { .. } => "io",
            #[cfg(feature = "csv")]
            RegBoostError::Csv { .. } => "csv",
            RegBoostError::Json { .. } => "json",
            RegBoostError::Bincode { .. } => "bincode",
            RegBoostError::Internal { .. } => "internal",
        }
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! invalid_argument {
    ($msg:expr) => {
        $crate::core::error::RegBoostError::invalid_argument($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RegBoostError::invalid_argument(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
