//! Swiss roll: a 3-d spiral manifold whose label is the position along the roll.

use crate::core::error::{RegBoostError, Result};
use crate::dataset::generators::Generator;
use crate::dataset::Labeled;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Points on a rolled-up sheet, labeled by their angle `t`.
///
/// Each sample is `[t·cos t, depth·u, t·sin t] * scale + center` plus
/// Gaussian noise, where `t = 1.5π(1 + 2v)` and `u, v ~ U(0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwissRoll {
    center: [f64; 3],
    scale: f64,
    depth: f64,
    noise: f64,
}

impl SwissRoll {
    pub fn new(x: f64, y: f64, z: f64, scale: f64, depth: f64, noise: f64) -> Result<Self> {
        if !(scale > 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "scale",
                scale.to_string(),
                "must be greater than 0",
            ));
        }
        if !(depth > 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "depth",
                depth.to_string(),
                "must be greater than 0",
            ));
        }
        if !(noise >= 0.0) {
            return Err(RegBoostError::invalid_parameter(
                "noise",
                noise.to_string(),
                "must be non-negative",
            ));
        }

        Ok(SwissRoll {
            center: [x, y, z],
            scale,
            depth,
            noise,
        })
    }

    pub fn center(&self) -> [f64; 3] {
        self.center
    }
}

impl Default for SwissRoll {
    fn default() -> Self {
        SwissRoll {
            center: [0.0; 3],
            scale: 1.0,
            depth: 21.0,
            noise: 0.1,
        }
    }
}

impl Generator for SwissRoll {
    fn dimensions(&self) -> usize {
        3
    }

    fn generate_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Labeled> {
        let gaussian = Normal::new(0.0, self.noise)
            .map_err(|e| RegBoostError::invalid_argument(format!("invalid noise: {}", e)))?;

        let mut samples = Array2::zeros((n, 3));
        let mut labels = Array1::zeros(n);

        for (i, mut row) in samples.rows_mut().into_iter().enumerate() {
            let t = 1.5 * PI * (1.0 + 2.0 * rng.gen::<f64>());
            let point = [t * t.cos(), self.depth * rng.gen::<f64>(), t * t.sin()];

            for (j, coordinate) in point.iter().enumerate() {
                row[j] = coordinate * self.scale + self.center[j] + gaussian.sample(rng);
            }
            labels[i] = t;
        }

        Labeled::from_arrays(samples, labels)
    }
}
