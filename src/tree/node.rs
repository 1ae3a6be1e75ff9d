//! Tree node representation.
//!
//! Nodes live in a flat arena owned by [`Cart`](crate::tree::Cart); children
//! are referenced by their index into that arena.

use crate::core::types::{DataValue, FeatureIndex, Label, NodeIndex};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The test applied at a split node.
///
/// Continuous columns send values `<= threshold` to the left child,
/// categorical columns send values equal to the category to the left child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitValue {
    /// Numeric threshold
    Threshold(f64),
    /// Category label
    Category(String),
}

impl SplitValue {
    /// Whether a sample value belongs to the left branch.
    ///
    /// A value of the wrong type never matches, so it follows the right branch.
    #[inline]
    pub fn goes_left(&self, value: &DataValue) -> bool {
        match (self, value) {
            (SplitValue::Threshold(threshold), DataValue::Continuous(x)) => x <= threshold,
            (SplitValue::Category(category), DataValue::Categorical(c)) => c == category,
            _ => false,
        }
    }
}

impl fmt::Display for SplitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitValue::Threshold(threshold) => write!(f, "<= {}", threshold),
            SplitValue::Category(category) => write!(f, "== \"{}\"", category),
        }
    }
}

/// A node of a regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// Internal node routing samples to one of two children
    Split {
        /// Column tested by this node
        column: FeatureIndex,
        /// Test applied to the column value
        value: SplitValue,
        /// Weighted variance of the two children
        impurity: f64,
        /// Variance reduction achieved by the split
        purity_increase: f64,
        /// Number of training samples that reached this node
        n: usize,
        /// Arena index of the left child
        left: NodeIndex,
        /// Arena index of the right child
        right: NodeIndex,
    },
    /// Terminal node holding a prediction
    Leaf {
        /// Mean of the training labels that reached this leaf
        output: Label,
        /// Variance of those labels
        impurity: f64,
        /// Number of training samples that reached this leaf
        n: usize,
    },
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(output: Label, impurity: f64, n: usize) -> Self {
        Node::Leaf { output, impurity, n }
    }

    /// Returns true if this node is a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of training samples that reached this node.
    pub fn n(&self) -> usize {
        match self {
            Node::Split { n, .. } | Node::Leaf { n, .. } => *n,
        }
    }

    /// Impurity of the node (leaf variance or weighted child variance).
    pub fn impurity(&self) -> f64 {
        match self {
            Node::Split { impurity, .. } | Node::Leaf { impurity, .. } => *impurity,
        }
    }

    /// Prediction of a leaf node.
    pub fn output(&self) -> Option<Label> {
        match self {
            Node::Leaf { output, .. } => Some(*output),
            Node::Split { .. } => None,
        }
    }

    /// Child indices of a split node.
    pub fn children(&self) -> Option<(NodeIndex, NodeIndex)> {
        match self {
            Node::Split { left, right, .. } => Some((*left, *right)),
            Node::Leaf { .. } => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Split {
                column,
                value,
                impurity,
                n,
                ..
            } => write!(
                f,
                "Column {} {} (impurity: {:.4}, samples: {})",
                column, value, impurity, n
            ),
            Node::Leaf {
                output,
                impurity,
                n,
            } => write!(
                f,
                "Leaf: {:.4} (impurity: {:.4}, samples: {})",
                output, impurity, n
            ),
        }
    }
}
