//! Criterion benchmarks for tree growth, boosting and prediction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regboost::prelude::*;

fn swiss_roll(n: usize, seed: u64) -> Labeled {
    SwissRoll::default().generate_seeded(n, seed).unwrap()
}

fn bench_tree_train(c: &mut Criterion) {
    let training = swiss_roll(2_000, 42);

    c.bench_function("regression_tree_train_2000x3", |b| {
        b.iter(|| {
            let mut estimator = RegressionTree::default();
            estimator.train(black_box(&training)).unwrap();
            estimator
        });
    });
}

fn bench_boost_train(c: &mut Criterion) {
    let training = swiss_roll(1_000, 42);
    let config = GradientBoostConfig::builder()
        .estimators(50)
        .seed(42)
        .build()
        .unwrap();

    c.bench_function("gradient_boost_train_1000x3_50", |b| {
        b.iter(|| {
            let mut estimator = GradientBoost::new(
                RegressionTree::with_max_depth(3).unwrap(),
                config.clone(),
                DummyRegressor::default(),
            )
            .unwrap();
            estimator.train(black_box(&training)).unwrap();
            estimator
        });
    });
}

fn bench_boost_predict(c: &mut Criterion) {
    let training = swiss_roll(1_000, 42);
    let testing = swiss_roll(5_000, 7);

    let mut estimator: GradientBoost = GradientBoost::default();
    estimator.train(&training).unwrap();

    c.bench_function("gradient_boost_predict_5000x3", |b| {
        b.iter(|| estimator.predict(black_box(&testing)).unwrap());
    });
}

criterion_group!(benches, bench_tree_train, bench_boost_train, bench_boost_predict);
criterion_main!(benches);
