use std::path::PathBuf;

/// Library-level structured errors for sdc-blame.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
///
/// The filtering engine itself never fails; these only come from loading
/// blame trees, deviation lists and configuration files.
#[derive(Debug, thiserror::Error)]
pub enum BlameError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to read input file: {path}")]
	InputReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse YAML document: {path}")]
	YamlParseError {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to parse JSON blame tree: {path}")]
	JsonParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Blame resource has no status value: {path}")]
	MissingStatusValue { path: PathBuf },

	#[error("Failed to encode output")]
	EncodeError {
		#[source]
		source: serde_json::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using BlameError.
pub type Result<T> = std::result::Result<T, BlameError>;
