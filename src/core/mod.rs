//! Core infrastructure module for regboost.
//!
//! - [`types`]: data values, data types and estimator kinds
//! - [`constants`]: default hyper-parameters
//! - [`error`]: the crate error type
//! - [`traits`]: the estimator API

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{RegBoostError, Result};
pub use traits::*;
pub use types::*;
