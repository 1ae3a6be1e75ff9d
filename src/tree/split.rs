//! Variance-reduction split search.
//!
//! For every candidate column the samples reaching a node are scanned once,
//! keeping running label sums so that the variance of both children is known
//! at every boundary. Columns are searched in parallel and the best candidate
//! overall is kept, ties going to the lowest column index.

use crate::core::types::{DataType, DataValue, FeatureIndex, Label};
use crate::tree::node::SplitValue;
use ndarray::{ArrayView1, ArrayView2};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Running count, mean and centered sum of squares of a set of labels.
///
/// Moments are kept relative to the running mean so that a large common
/// offset in the labels does not swamp their spread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    n: usize,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Moments of the labels at `indices`.
    pub fn of(labels: ArrayView1<'_, Label>, indices: &[usize]) -> Self {
        let mut moments = Moments::default();
        for &i in indices {
            moments.push(labels[i]);
        }
        moments
    }

    #[inline]
    pub fn push(&mut self, y: Label) {
        self.n += 1;
        let delta = y - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (y - self.mean);
    }

    /// Moments of the labels in `self` that are not in `other`.
    ///
    /// `other` must describe a subset of the labels in `self`.
    #[inline]
    pub fn without(&self, other: &Moments) -> Moments {
        let n = self.n.saturating_sub(other.n);
        if n == 0 {
            return Moments::default();
        }

        let mean = self.mean + (self.mean - other.mean) * other.n as f64 / n as f64;
        let delta = mean - other.mean;
        let m2 = self.m2 - other.m2 - delta * delta * (other.n * n) as f64 / self.n as f64;

        Moments {
            n,
            mean,
            m2: m2.max(0.0),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sum of squared deviations from the mean.
    pub fn sse(&self) -> f64 {
        self.m2.max(0.0)
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sse() / self.n as f64
        }
    }
}

/// Sample-weighted variance of two children.
#[inline]
fn split_impurity(left: &Moments, right: &Moments) -> f64 {
    let n = left.n + right.n;
    if n == 0 {
        return 0.0;
    }
    (left.sse() + right.sse()) / n as f64
}

/// Best split found for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    pub column: FeatureIndex,
    pub value: SplitValue,
    /// Weighted variance of the two children
    pub impurity: f64,
}

/// Find the split with the lowest weighted child variance.
///
/// `columns` lists the candidate columns in ascending order. Returns `None`
/// when every candidate column is constant over `indices`.
pub fn find_best_split(
    samples: ArrayView2<'_, DataValue>,
    labels: ArrayView1<'_, Label>,
    types: &[DataType],
    indices: &[usize],
    columns: &[FeatureIndex],
) -> Option<SplitCandidate> {
    let parent = Moments::of(labels, indices);

    let candidates: Vec<Option<SplitCandidate>> = columns
        .par_iter()
        .map(|&column| {
            let values = samples.column(column);
            match types[column] {
                DataType::Continuous => best_threshold(values, labels, indices, column),
                DataType::Categorical => best_category(values, labels, indices, &parent, column),
            }
        })
        .collect();

    let mut best: Option<SplitCandidate> = None;
    for candidate in candidates.into_iter().flatten() {
        let better = best
            .as_ref()
            .map_or(true, |current| candidate.impurity < current.impurity);
        if better {
            best = Some(candidate);
        }
    }
    best
}

fn best_threshold(
    values: ArrayView1<'_, DataValue>,
    labels: ArrayView1<'_, Label>,
    indices: &[usize],
    column: FeatureIndex,
) -> Option<SplitCandidate> {
    let mut sorted: Vec<(f64, Label)> = indices
        .iter()
        .filter_map(|&i| values[i].as_f64().map(|x| (x, labels[i])))
        .collect();
    sorted.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

    let mut total = Moments::default();
    for &(_, y) in &sorted {
        total.push(y);
    }

    let mut left = Moments::default();
    let mut best: Option<(f64, f64)> = None;

    for window in sorted.windows(2) {
        let (x, y) = window[0];
        let next = window[1].0;
        left.push(y);

        if x == next {
            continue;
        }

        let impurity = split_impurity(&left, &total.without(&left));
        if best.map_or(true, |(current, _)| impurity < current) {
            // The midpoint of two adjacent floats can round up to `next`.
            let midpoint = (x + next) / 2.0;
            let threshold = if midpoint < next { midpoint } else { x };
            best = Some((impurity, threshold));
        }
    }

    best.map(|(impurity, threshold)| SplitCandidate {
        column,
        value: SplitValue::Threshold(threshold),
        impurity,
    })
}

fn best_category(
    values: ArrayView1<'_, DataValue>,
    labels: ArrayView1<'_, Label>,
    indices: &[usize],
    parent: &Moments,
    column: FeatureIndex,
) -> Option<SplitCandidate> {
    let mut groups: BTreeMap<&str, Moments> = BTreeMap::new();
    for &i in indices {
        if let Some(category) = values[i].as_category() {
            groups.entry(category).or_default().push(labels[i]);
        }
    }

    if groups.len() < 2 {
        return None;
    }

    let mut best: Option<(f64, &str)> = None;
    for (category, left) in &groups {
        let impurity = split_impurity(left, &parent.without(left));
        if best.map_or(true, |(current, _)| impurity < current) {
            best = Some((impurity, *category));
        }
    }

    best.map(|(impurity, category)| SplitCandidate {
        column,
        value: SplitValue::Category(category.to_string()),
        impurity,
    })
}
