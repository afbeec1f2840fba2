//! In-memory blame tree model.
//!
//! This module handles:
//! - Scalar configuration values with canonical string rendering
//! - The owned, strictly hierarchical blame tree

pub mod node;
pub mod value;

pub use node::BlameNode;
pub use value::TypedValue;
