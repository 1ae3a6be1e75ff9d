//! CART regression tree construction and traversal.

use crate::config::RegressionTreeConfig;
use crate::core::constants::EPSILON;
use crate::core::error::{RegBoostError, Result};
use crate::core::types::{DataType, DataValue, FeatureIndex, Label, NodeIndex};
use crate::tree::node::Node;
use crate::tree::split::{find_best_split, Moments};
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::seq::index::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grown regression tree.
///
/// Nodes are stored in a contiguous arena; index 0 is always the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    nodes: Vec<Node>,
    num_columns: usize,
}

/// A node waiting to be either split or turned into a leaf.
struct Pending {
    index: NodeIndex,
    indices: Vec<usize>,
    depth: usize,
}

impl Cart {
    /// Grow a tree on the given samples and labels.
    ///
    /// Growth is iterative: every pending node is either finalized as a leaf
    /// or split into two new pending children.
    pub fn grow<R: Rng + ?Sized>(
        samples: ArrayView2<'_, DataValue>,
        labels: ArrayView1<'_, Label>,
        types: &[DataType],
        config: &RegressionTreeConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let num_rows = samples.nrows();
        let num_columns = samples.ncols();

        if num_rows == 0 {
            return Err(RegBoostError::invalid_argument(
                "cannot grow a tree without samples",
            ));
        }
        if labels.len() != num_rows || types.len() != num_columns {
            return Err(RegBoostError::dimension_mismatch(
                format!("{} labels and {} column types", num_rows, num_columns),
                format!("{} labels and {} column types", labels.len(), types.len()),
            ));
        }

        let root = Moments::of(labels, &(0..num_rows).collect::<Vec<_>>());
        let mut nodes = vec![Node::leaf(root.mean(), root.variance(), num_rows)];
        let mut stack = vec![Pending {
            index: 0,
            indices: (0..num_rows).collect(),
            depth: 0,
        }];

        while let Some(Pending {
            index,
            indices,
            depth,
        }) = stack.pop()
        {
            let moments = Moments::of(labels, &indices);
            let variance = moments.variance();

            if config.max_depth.map_or(false, |max| depth >= max)
                || indices.len() <= config.max_leaf_size
                || variance <= config.tolerance
            {
                continue;
            }

            let columns = candidate_columns(num_columns, config.max_features, rng);
            let Some(split) = find_best_split(samples, labels, types, &indices, &columns) else {
                continue;
            };

            let purity_increase = variance - split.impurity;
            if purity_increase + EPSILON < config.min_purity_increase {
                continue;
            }

            let (left_indices, right_indices): (Vec<usize>, Vec<usize>) = indices
                .iter()
                .partition(|&&i| split.value.goes_left(&samples[[i, split.column]]));

            if left_indices.is_empty() || right_indices.is_empty() {
                continue;
            }

            let left = nodes.len();
            let right = left + 1;
            for child in [&left_indices, &right_indices] {
                let m = Moments::of(labels, child);
                nodes.push(Node::leaf(m.mean(), m.variance(), m.n()));
            }

            nodes[index] = Node::Split {
                column: split.column,
                value: split.value,
                impurity: split.impurity,
                purity_increase,
                n: indices.len(),
                left,
                right,
            };

            stack.push(Pending {
                index: right,
                indices: right_indices,
                depth: depth + 1,
            });
            stack.push(Pending {
                index: left,
                indices: left_indices,
                depth: depth + 1,
            });
        }

        Ok(Cart { nodes, num_columns })
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Returns the node at the given arena index.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.height_of(0)
    }

    /// Height of the left subtree minus height of the right subtree at the root.
    pub fn balance(&self) -> isize {
        match self.root().children() {
            Some((left, right)) => self.height_of(left) as isize - self.height_of(right) as isize,
            None => 0,
        }
    }

    fn height_of(&self, index: NodeIndex) -> usize {
        let mut height = 0;
        let mut stack = vec![(index, 1)];

        while let Some((current, level)) = stack.pop() {
            height = height.max(level);
            if let Some((left, right)) = self.nodes[current].children() {
                stack.push((left, level + 1));
                stack.push((right, level + 1));
            }
        }

        height
    }

    /// Walk a single sample down to its leaf and return the leaf output.
    pub fn predict_sample(&self, sample: ArrayView1<'_, DataValue>) -> Result<Label> {
        let mut index = 0;

        loop {
            match &self.nodes[index] {
                Node::Leaf { output, .. } => return Ok(*output),
                Node::Split {
                    column,
                    value,
                    left,
                    right,
                    ..
                } => {
                    let x = sample.get(*column).ok_or_else(|| {
                        RegBoostError::dimension_mismatch(
                            format!("at least {} features", column + 1),
                            format!("{} features", sample.len()),
                        )
                    })?;
                    index = if value.goes_left(x) { *left } else { *right };
                }
            }
        }
    }

    /// Per-column sum of `(n_node / n_root) * purity_increase` over the
    /// split nodes, normalized to sum to one.
    ///
    /// All zeros when the tree is a single leaf.
    pub fn feature_importances(&self) -> Array1<f64> {
        let mut importances = Array1::zeros(self.num_columns);
        let total = self.root().n().max(1) as f64;

        for node in &self.nodes {
            if let Node::Split {
                column,
                purity_increase,
                n,
                ..
            } = node
            {
                importances[*column] += (*n as f64 / total) * purity_increase;
            }
        }

        let sum = importances.sum();
        if sum > 0.0 {
            importances /= sum;
        }
        importances
    }

    /// Human-readable rendering of the decision rules.
    pub fn rules(&self) -> String {
        let mut result = String::new();
        self.rules_recursive(0, "", true, &mut result);
        result
    }

    fn rules_recursive(&self, index: NodeIndex, prefix: &str, is_last: bool, result: &mut String) {
        let node = &self.nodes[index];
        let branch = if is_last { "└── " } else { "├── " };
        result.push_str(&format!("{}{}{}\n", prefix, branch, node));

        if let Some((left, right)) = node.children() {
            let prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            self.rules_recursive(left, &prefix, false, result);
            self.rules_recursive(right, &prefix, true, result);
        }
    }
}

/// Columns examined at a node, in ascending order.
fn candidate_columns<R: Rng + ?Sized>(
    num_columns: usize,
    max_features: Option<usize>,
    rng: &mut R,
) -> Vec<FeatureIndex> {
    match max_features {
        Some(k) if k < num_columns => {
            let mut columns = sample(rng, num_columns, k).into_vec();
            columns.sort_unstable();
            columns
        }
        _ => (0..num_columns).collect(),
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cart(nodes={}, leaves={}, height={})",
            self.num_nodes(),
            self.num_leaves(),
            self.height()
        )
    }
}
