use crate::error::{BlameError, Result};
use crate::model::BlameNode;
use crate::wire::types::{BlameNodeWire, ConfigBlame};
use std::path::Path;

/// Read an input file into a string.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| BlameError::InputReadError {
		path: path.to_path_buf(),
		source,
	})
}

/// Parse a ConfigBlame resource from a YAML (or JSON) string.
pub fn parse_blame_document_str(content: &str, path: &Path) -> Result<ConfigBlame> {
	serde_yaml::from_str(content).map_err(|source| BlameError::YamlParseError {
		path: path.to_path_buf(),
		source,
	})
}

/// Load a ConfigBlame resource from a file.
pub fn load_blame_document(path: &Path) -> Result<ConfigBlame> {
	let content = read_input(path)?;
	parse_blame_document_str(&content, path)
}

/// Parse a raw blame tree (the resource's status value) from JSON.
///
/// The document is checked as JSON first, then decoded through the YAML
/// deserializer so bare `intVal` numbers keep their raw text.
pub fn parse_blame_tree_json(content: &str, path: &Path) -> Result<BlameNode> {
	serde_json::from_str::<serde_json::Value>(content).map_err(|source| {
		BlameError::JsonParseError {
			path: path.to_path_buf(),
			source,
		}
	})?;

	let wire: BlameNodeWire =
		serde_yaml::from_str(content).map_err(|source| BlameError::YamlParseError {
			path: path.to_path_buf(),
			source,
		})?;
	Ok(wire.into())
}

impl ConfigBlame {
	/// Take the blame tree out of the resource status.
	pub fn into_tree(self, path: &Path) -> Result<BlameNode> {
		self.status
			.value
			.map(BlameNode::from)
			.ok_or_else(|| BlameError::MissingStatusValue {
				path: path.to_path_buf(),
			})
	}
}

/// Load a blame tree from a file.
///
/// `.json` files hold a raw tree unless they look like a full resource
/// (top-level `apiVersion` or `status`); anything else is read as a YAML
/// ConfigBlame resource.
pub fn load_blame_tree(path: &Path) -> Result<BlameNode> {
	let content = read_input(path)?;

	let is_json = path
		.extension()
		.is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

	let tree = if is_json && !looks_like_resource(&content, path)? {
		parse_blame_tree_json(&content, path)?
	} else {
		parse_blame_document_str(&content, path)?.into_tree(path)?
	};

	tracing::debug!(path = %path.display(), leaves = tree.leaves().len(), "loaded blame tree");
	Ok(tree)
}

fn looks_like_resource(content: &str, path: &Path) -> Result<bool> {
	let value: serde_json::Value =
		serde_json::from_str(content).map_err(|source| BlameError::JsonParseError {
			path: path.to_path_buf(),
			source,
		})?;
	Ok(value.get("apiVersion").is_some() || value.get("status").is_some())
}
