use crate::model::value::TypedValue;

/// A node of the blame tree.
///
/// Each parent exclusively owns its children, so the structure is always a
/// finite tree. A node is a leaf iff it has no children; only leaves carry
/// match semantics when filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlameNode {
	/// Name of this node within its parent.
	pub name: String,

	/// Intent or system that contributed the value.
	pub owner: String,

	/// The configured value.
	pub value: Option<TypedValue>,

	/// The value actually held by the running system, when it differs.
	pub deviation_value: Option<TypedValue>,

	pub children: Vec<BlameNode>,
}

impl BlameNode {
	pub fn new(name: impl Into<String>) -> Self {
		BlameNode {
			name: name.into(),
			..Default::default()
		}
	}

	/// Create a leaf with an owner and a configured value.
	pub fn leaf(
		name: impl Into<String>,
		owner: impl Into<String>,
		value: impl Into<TypedValue>,
	) -> Self {
		BlameNode {
			name: name.into(),
			owner: owner.into(),
			value: Some(value.into()),
			..Default::default()
		}
	}

	pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
		self.owner = owner.into();
		self
	}

	pub fn with_value(mut self, value: impl Into<TypedValue>) -> Self {
		self.value = Some(value.into());
		self
	}

	pub fn with_deviation(mut self, value: impl Into<TypedValue>) -> Self {
		self.deviation_value = Some(value.into());
		self
	}

	pub fn with_child(mut self, child: BlameNode) -> Self {
		self.children.push(child);
		self
	}

	pub fn with_children(mut self, children: impl IntoIterator<Item = BlameNode>) -> Self {
		self.children.extend(children);
		self
	}

	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	pub fn is_deviated(&self) -> bool {
		self.deviation_value.is_some()
	}

	/// Copy the scalar fields of this node with an empty children list.
	pub fn shallow_copy(&self) -> Self {
		BlameNode {
			name: self.name.clone(),
			owner: self.owner.clone(),
			value: self.value.clone(),
			deviation_value: self.deviation_value.clone(),
			children: Vec::new(),
		}
	}

	/// The value the running system holds: the deviation if present,
	/// otherwise the configured value.
	pub fn effective_value(&self) -> Option<&TypedValue> {
		self.deviation_value.as_ref().or(self.value.as_ref())
	}

	/// String form of [`BlameNode::effective_value`], empty when unset.
	pub fn display_value(&self) -> String {
		self.effective_value()
			.map(|v| v.to_string())
			.unwrap_or_default()
	}

	/// All leaves below (or at) this node, left to right.
	pub fn leaves(&self) -> Vec<&BlameNode> {
		crate::filter::collect_leaves(Some(self))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_leaf_detection() {
		let leaf = BlameNode::leaf("timeout", "running", 3000);
		assert!(leaf.is_leaf());

		let branch = BlameNode::new("network").with_child(leaf);
		assert!(!branch.is_leaf());
	}

	#[test]
	fn test_is_deviated() {
		let leaf = BlameNode::leaf("timeout", "running", 3000);
		assert!(!leaf.is_deviated());
		assert!(leaf.with_deviation(6000).is_deviated());
	}

	#[test]
	fn test_display_value_prefers_deviation() {
		let leaf = BlameNode::leaf("timeout", "running", 3000).with_deviation(6000);
		assert_eq!(leaf.display_value(), "6000");

		let plain = BlameNode::leaf("ambulance", "intent", false);
		assert_eq!(plain.display_value(), "false");

		assert_eq!(BlameNode::new("empty").display_value(), "");
	}

	#[test]
	fn test_shallow_copy_drops_children() {
		let branch = BlameNode::new("network")
			.with_owner("running")
			.with_child(BlameNode::leaf("host", "running", "10.0.0.1"));
		let copy = branch.shallow_copy();

		assert_eq!(copy.name, "network");
		assert_eq!(copy.owner, "running");
		assert!(copy.children.is_empty());
		assert_eq!(branch.children.len(), 1);
	}
}
