//! Common test utilities for regboost integration tests.

#![allow(dead_code)]

use regboost::prelude::*;

/// Number of samples used to train models in integration tests.
pub const TRAIN_SIZE: usize = 400;

/// Number of samples used to score trained models.
pub const TEST_SIZE: usize = 25;

/// Minimum R² a model must reach on the swiss roll.
pub const MIN_SCORE: f64 = 0.7;

/// Roll depth used by the regression tree tests.
pub const TREE_DEPTH: f64 = 0.2;

/// Roll depth used by the gradient boosting tests.
pub const BOOST_DEPTH: f64 = 0.3;

/// Swiss roll centered at (4, -7, 0) with unit scale, the given depth and
/// the default noise.
pub fn swiss_roll(depth: f64) -> SwissRoll {
    SwissRoll::new(4.0, -7.0, 0.0, 1.0, depth, 0.1).expect("valid swiss roll")
}

/// Seeded training and testing sets drawn from [`swiss_roll`].
pub fn swiss_roll_split(depth: f64, seed: u64) -> (Labeled, Labeled) {
    regboost::init_logging();

    let generator = swiss_roll(depth);
    let training = generator
        .generate_seeded(TRAIN_SIZE, seed)
        .expect("training set");
    let testing = generator
        .generate_seeded(TEST_SIZE, seed + 1)
        .expect("testing set");

    (training, testing)
}

/// A small dataset mixing a continuous and a categorical column.
///
/// The label is `10 * x` plus an offset that depends on the color.
pub fn mixed_dataset(n: usize) -> Labeled {
    let colors = ["red", "green", "blue"];
    let mut rows = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);

    for i in 0..n {
        let x = (i % 20) as f64 / 20.0;
        let color = colors[i % colors.len()];
        let offset = match color {
            "red" => 0.0,
            "green" => 5.0,
            _ => -5.0,
        };
        rows.push(vec![DataValue::from(x), DataValue::from(color)]);
        labels.push(10.0 * x + offset);
    }

    Labeled::quick(rows, labels).expect("mixed dataset")
}

/// R² of an estimator's predictions on a labeled dataset.
pub fn r_squared(estimator: &dyn Estimator, testing: &Labeled) -> f64 {
    let predictions = estimator.predict(testing).expect("predictions");
    RSquared
        .score(predictions.view(), testing.label_array().view())
        .expect("score")
}
