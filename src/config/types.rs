use crate::filter::BlameFilter;
use crate::render::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.sdc-blame.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop walking up the directory tree at this file.
	#[serde(default)]
	pub root: bool,

	/// Default filter criteria for `blame`.
	#[serde(default)]
	pub filter: FilterConfig,

	/// Output settings.
	#[serde(default)]
	pub display: DisplayConfig,
}

/// Default filter criteria. Unset fields fall through to less specific files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterConfig {
	pub leaf_name: Option<String>,
	pub owner: Option<String>,
	pub path: Option<String>,
	pub deviation: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
	pub format: Option<OutputFormat>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective configuration after merging the cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfig {
	pub filter: FilterConfig,
	pub display: DisplayConfig,

	/// Files that contributed, most specific first.
	pub sources: Vec<PathBuf>,
}

impl FilterConfig {
	/// Fill unset fields from a less specific config.
	pub fn merge_from(&mut self, other: &FilterConfig) {
		if self.leaf_name.is_none() {
			self.leaf_name.clone_from(&other.leaf_name);
		}
		if self.owner.is_none() {
			self.owner.clone_from(&other.owner);
		}
		if self.path.is_none() {
			self.path.clone_from(&other.path);
		}
		if self.deviation.is_none() {
			self.deviation = other.deviation;
		}
	}

	/// Convert into filter criteria, unset fields being unconstrained.
	pub fn to_filter(&self) -> BlameFilter {
		BlameFilter {
			leaf_name: self.leaf_name.clone().unwrap_or_default(),
			owner: self.owner.clone().unwrap_or_default(),
			path: self.path.clone().unwrap_or_default(),
			deviation: self.deviation.unwrap_or(false),
		}
	}
}

impl DisplayConfig {
	pub fn merge_from(&mut self, other: &DisplayConfig) {
		if self.format.is_none() {
			self.format = other.format;
		}
	}
}
