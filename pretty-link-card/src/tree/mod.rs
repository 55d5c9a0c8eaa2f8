//! Document tree model and traversal.
//!
//! This module provides:
//! - An mdast-compatible [`Node`] enum
//! - Depth-first visiting and disjoint mutable selection by [`NodeKind`]

mod node;
mod visit;

pub use node::{Node, NodeKind};
pub use visit::{count, select_mut, visit};
