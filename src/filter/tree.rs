use crate::filter::pattern::WildcardPattern;
use crate::model::BlameNode;
use std::borrow::Cow;

/// Criteria for filtering a blame tree.
///
/// Every field is optional: empty strings match everything and
/// `deviation = false` leaves the deviation state unconstrained (it does not
/// mean "non-deviated only").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlameFilter {
	/// Wildcard pattern for the leaf name.
	pub leaf_name: String,

	/// Wildcard pattern for the leaf owner.
	pub owner: String,

	/// Wildcard pattern for the slash-joined path, root and leaf included.
	pub path: String,

	/// Only keep leaves that carry a deviation value.
	pub deviation: bool,
}

impl BlameFilter {
	/// True when no criterion is set.
	pub fn is_unconstrained(&self) -> bool {
		self.leaf_name.is_empty()
			&& self.owner.is_empty()
			&& self.path.is_empty()
			&& !self.deviation
	}

	pub fn compile(&self) -> CompiledFilter {
		CompiledFilter::from_filter(self)
	}
}

/// A filter with its wildcard patterns compiled once.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
	pub leaf_name: WildcardPattern,
	pub owner: WildcardPattern,
	pub path: WildcardPattern,
	pub deviation: bool,
}

impl CompiledFilter {
	pub fn from_filter(filter: &BlameFilter) -> Self {
		CompiledFilter {
			leaf_name: WildcardPattern::compile(&filter.leaf_name),
			owner: WildcardPattern::compile(&filter.owner),
			path: WildcardPattern::compile(&filter.path),
			deviation: filter.deviation,
		}
	}

	/// Check one leaf against all criteria (logical AND).
	///
	/// `ancestors` holds the names from the root down to the leaf's parent.
	pub fn matches_leaf(&self, node: &BlameNode, ancestors: &[&str]) -> bool {
		if !self.leaf_name.matches(&node.name) {
			return false;
		}

		if !self.owner.matches(&node.owner) {
			return false;
		}

		if !self.path.is_any() {
			let mut segments = ancestors.to_vec();
			segments.push(&node.name);
			if !self.path.matches(&segments.join("/")) {
				return false;
			}
		}

		!self.deviation || node.is_deviated()
	}

	/// Filter one subtree, returning a fresh copy holding only matching
	/// leaves and their ancestors.
	fn filter_node<'a>(
		&self,
		node: &'a BlameNode,
		ancestors: &mut Vec<&'a str>,
	) -> Option<BlameNode> {
		// Leaves are the only nodes evaluated against the criteria
		if node.is_leaf() {
			return self
				.matches_leaf(node, ancestors)
				.then(|| node.shallow_copy());
		}

		ancestors.push(&node.name);
		let children: Vec<BlameNode> = node
			.children
			.iter()
			.filter_map(|child| self.filter_node(child, ancestors))
			.collect();
		ancestors.pop();

		if children.is_empty() {
			return None;
		}

		let mut filtered = node.shallow_copy();
		filtered.children = children;
		Some(filtered)
	}
}

/// Filter a blame tree, keeping the full path to every matching leaf.
///
/// Returns `None` when no leaf matches or when `root` is absent. An
/// unconstrained filter returns the input tree itself without copying.
pub fn filter_tree<'a>(
	root: Option<&'a BlameNode>,
	filter: &BlameFilter,
) -> Option<Cow<'a, BlameNode>> {
	let root = root?;

	if filter.is_unconstrained() {
		return Some(Cow::Borrowed(root));
	}

	let compiled = filter.compile();
	let mut ancestors = Vec::new();
	let result = compiled.filter_node(root, &mut ancestors);

	tracing::debug!(?filter, matched = result.is_some(), "filtered blame tree");

	result.map(Cow::Owned)
}
