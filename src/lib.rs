//! Range sums over an integer array under weighted range increments, where
//! each increment adds a fixed per-index weight rather than a constant.

pub mod io;
pub mod query;
pub mod tree;

pub use tree::segtree_weighted::{SegTreeError, WeightedSegTree};
