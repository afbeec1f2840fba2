//! sdc-blame - filter configuration blame trees and list deviations.
//!
//! This library provides the core functionality for sdc-blame, including:
//! - The blame tree model and typed values
//! - Wildcard matching and shape-preserving tree filtering
//! - Loading blame trees and deviation lists from YAML/JSON exports
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use sdc_blame::filter::{BlameFilter, collect_leaves, filter_tree};
//! use sdc_blame::model::BlameNode;
//!
//! let tree = BlameNode::new("dev1").with_child(
//!     BlameNode::new("network").with_children([
//!         BlameNode::leaf("timeout", "config-running.y", 3000).with_deviation(6000),
//!         BlameNode::leaf("ambulance", "intent-emergency", false),
//!     ]),
//! );
//!
//! let filter = BlameFilter {
//!     owner: "*config-running*".to_string(),
//!     ..Default::default()
//! };
//!
//! let filtered = filter_tree(Some(&tree), &filter).unwrap();
//! let leaves = collect_leaves(Some(&*filtered));
//! assert_eq!(leaves.len(), 1);
//! assert_eq!(leaves[0].display_value(), "6000");
//! ```

pub mod config;
pub mod deviations;
pub mod error;
pub mod filter;
pub mod logging;
pub mod model;
pub mod render;
pub mod wire;

pub use error::{BlameError, Result};
