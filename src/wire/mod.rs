//! Wire representation of blame trees and its loaders.
//!
//! This module handles:
//! - Serde types for the blame tree schema (`childs`, `stringVal`, `intVal`, ...)
//! - Decoding wire values into typed values
//! - Loading the ConfigBlame resource (YAML) or a raw tree (JSON)

pub mod loader;
pub mod types;

pub use loader::{
	load_blame_document, load_blame_tree, parse_blame_document_str, parse_blame_tree_json,
};
pub use types::{BlameNodeWire, ConfigBlame, IntLiteral, ValueWire};
