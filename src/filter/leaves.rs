use crate::model::BlameNode;

/// A leaf together with its slash-joined path from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafWithPath<'a> {
	pub path: String,
	pub node: &'a BlameNode,
}

/// Collect all leaves of a tree in depth-first, left-to-right order.
///
/// An absent root yields no leaves.
pub fn collect_leaves(root: Option<&BlameNode>) -> Vec<&BlameNode> {
	let mut leaves = Vec::new();
	if let Some(root) = root {
		push_leaves(root, &mut leaves);
	}
	leaves
}

fn push_leaves<'a>(node: &'a BlameNode, leaves: &mut Vec<&'a BlameNode>) {
	if node.is_leaf() {
		leaves.push(node);
		return;
	}
	for child in &node.children {
		push_leaves(child, leaves);
	}
}

/// Collect all leaves with their full paths, in the same order as
/// [`collect_leaves`].
pub fn collect_leaf_paths(root: Option<&BlameNode>) -> Vec<LeafWithPath<'_>> {
	let mut leaves = Vec::new();
	if let Some(root) = root {
		let mut ancestors = Vec::new();
		push_leaf_paths(root, &mut ancestors, &mut leaves);
	}
	leaves
}

fn push_leaf_paths<'a>(
	node: &'a BlameNode,
	ancestors: &mut Vec<&'a str>,
	leaves: &mut Vec<LeafWithPath<'a>>,
) {
	ancestors.push(&node.name);
	if node.is_leaf() {
		leaves.push(LeafWithPath {
			path: ancestors.join("/"),
			node,
		});
	} else {
		for child in &node.children {
			push_leaf_paths(child, ancestors, leaves);
		}
	}
	ancestors.pop();
}
