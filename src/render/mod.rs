//! Text rendering of blame trees for the CLI.

use crate::error::{BlameError, Result};
use crate::filter::collect_leaf_paths;
use crate::model::BlameNode;
use crate::wire::BlameNodeWire;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for blame trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
	/// Indented tree.
	#[default]
	Tree,
	/// One row per leaf with its full path.
	Table,
	/// JSON in the wire schema.
	Json,
}

impl OutputFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			OutputFormat::Tree => "tree",
			OutputFormat::Table => "table",
			OutputFormat::Json => "json",
		}
	}
}

/// Render a blame tree in the given format.
pub fn render(node: &BlameNode, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Tree => Ok(render_tree(node)),
		OutputFormat::Table => Ok(render_table(node)),
		OutputFormat::Json => render_json(node),
	}
}

/// Render a tree with two spaces of indentation per level.
pub fn render_tree(node: &BlameNode) -> String {
	let mut out = String::new();
	write_tree(node, 0, &mut out);
	out
}

fn write_tree(node: &BlameNode, depth: usize, out: &mut String) {
	let indent = "  ".repeat(depth);
	if node.is_leaf() {
		let value = node.value.as_ref().map(|v| v.to_string()).unwrap_or_default();
		let _ = write!(out, "{}{} [{}] = {}", indent, node.name, node.owner, value);
		if let Some(ref deviation) = node.deviation_value {
			let _ = write!(out, " (deviation: {})", deviation);
		}
		out.push('\n');
		return;
	}

	let _ = writeln!(out, "{}{}", indent, node.name);
	for child in &node.children {
		write_tree(child, depth + 1, out);
	}
}

/// Render the leaves as an aligned table.
pub fn render_table(node: &BlameNode) -> String {
	let header = ["PATH", "OWNER", "VALUE", "DEVIATION"];
	let rows: Vec<[String; 4]> = collect_leaf_paths(Some(node))
		.into_iter()
		.map(|leaf| {
			[
				leaf.path,
				leaf.node.owner.clone(),
				leaf.node
					.value
					.as_ref()
					.map(|v| v.to_string())
					.unwrap_or_default(),
				leaf.node
					.deviation_value
					.as_ref()
					.map(|v| v.to_string())
					.unwrap_or_default(),
			]
		})
		.collect();

	let mut widths = header.map(str::len);
	for row in &rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.len());
		}
	}

	let mut out = String::new();
	write_row(&mut out, &widths, header.iter().copied());
	for row in &rows {
		write_row(&mut out, &widths, row.iter().map(String::as_str));
	}
	out
}

fn write_row<'a>(out: &mut String, widths: &[usize; 4], cells: impl Iterator<Item = &'a str>) {
	let line = cells
		.zip(widths)
		.map(|(cell, width)| format!("{:<width$}", cell, width = *width))
		.collect::<Vec<_>>()
		.join("  ");
	out.push_str(line.trim_end());
	out.push('\n');
}

/// Render a tree as pretty JSON in the wire schema.
pub fn render_json(node: &BlameNode) -> Result<String> {
	serde_json::to_string_pretty(&BlameNodeWire::from(node))
		.map_err(|source| BlameError::EncodeError { source })
}
