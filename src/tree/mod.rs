//! Regression tree building blocks.
//!
//! [`Cart`] holds a grown tree in a flat node arena, [`split`] implements the
//! variance-reduction split search used while growing it.

pub mod cart;
pub mod node;
pub mod split;

pub use cart::Cart;
pub use node::{Node, SplitValue};
pub use split::{find_best_split, Moments, SplitCandidate};
