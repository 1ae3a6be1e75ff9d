//! Linear target over uniformly distributed features.

use crate::core::error::{RegBoostError, Result};
use crate::dataset::generators::Generator;
use crate::dataset::Labeled;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};

/// Samples drawn from U(-1, 1) in every dimension, labeled by
/// `coefficients · x + intercept` plus Gaussian noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperplane {
    coefficients: Vec<f64>,
    intercept: f64,
    noise: f64,
}

impl Hyperplane {
    pub fn new(coefficients: Vec<f64>, intercept: f64, noise: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(RegBoostError::invalid_argument(
                "hyperplane needs at least one coefficient",
            ));
        }
        if !(noise >= 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "noise",
                noise.to_string(),
                "must be non-negative",
            ));
        }

        Ok(Hyperplane {
            coefficients,
            intercept,
            noise,
        })
    }
}

impl Generator for Hyperplane {
    fn dimensions(&self) -> usize {
        self.coefficients.len()
    }

    fn generate_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Labeled> {
        let uniform = Uniform::new_inclusive(-1.0, 1.0);
        let gaussian = Normal::new(0.0, self.noise)
            .map_err(|e| RegBoostError::invalid_argument(format!("invalid noise: {}", e)))?;

        let d = self.dimensions();
        let samples = Array2::from_shape_fn((n, d), |_| uniform.sample(rng));
        let coefficients = Array1::from_vec(self.coefficients.clone());

        let mut labels = samples.dot(&coefficients) + self.intercept;
        labels.mapv_inplace(|y| y + gaussian.sample(rng));

        Labeled::from_arrays(samples, labels)
    }
}
