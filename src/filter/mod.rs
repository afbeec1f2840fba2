//! Blame tree filtering engine.
//!
//! This module handles:
//! - Wildcard pattern matching over names, owners and paths
//! - Shape-preserving filtering of the blame tree
//! - Flattening a tree into its ordered leaves

pub mod leaves;
pub mod pattern;
pub mod tree;

pub use leaves::{LeafWithPath, collect_leaf_paths, collect_leaves};
pub use pattern::{WildcardPattern, matches_pattern, wildcard_to_regex};
pub use tree::{BlameFilter, CompiledFilter, filter_tree};
