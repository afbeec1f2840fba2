use crate::deviations::types::{Deviation, DeviationType, Deviations};
use crate::error::{BlameError, Result};
use crate::wire::loader::read_input;
use crate::wire::types::Metadata;
use serde::Deserialize;
use std::path::Path;

/// The Deviation resource as exported to YAML.
#[derive(Debug, Clone, Default, Deserialize)]
struct DeviationResource {
	#[serde(default)]
	metadata: Metadata,

	#[serde(default)]
	spec: DeviationSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviationSpec {
	#[serde(default)]
	deviation_type: Option<String>,

	#[serde(default)]
	deviations: Vec<ConfigDeviation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDeviation {
	#[serde(default)]
	path: String,

	#[serde(default)]
	desired_value: Option<String>,

	#[serde(default)]
	current_value: Option<String>,

	#[serde(default)]
	reason: String,
}

impl From<DeviationResource> for Deviations {
	fn from(resource: DeviationResource) -> Self {
		let deviation_type = resource
			.spec
			.deviation_type
			.as_deref()
			.map(DeviationType::from_wire)
			.unwrap_or_default();

		let mut result = Deviations::new(resource.metadata.name, deviation_type)
			.with_namespace(resource.metadata.namespace);
		for dev in resource.spec.deviations {
			result.push(Deviation::new(
				dev.path,
				dev.desired_value.unwrap_or_default(),
				dev.current_value.unwrap_or_default(),
				dev.reason,
			));
		}
		result
	}
}

/// Parse a Deviation resource from a YAML string.
pub fn parse_deviations_str(content: &str, path: &Path) -> Result<Deviations> {
	let resource: DeviationResource =
		serde_yaml::from_str(content).map_err(|source| BlameError::YamlParseError {
			path: path.to_path_buf(),
			source,
		})?;
	Ok(resource.into())
}

/// Load a Deviation resource from a file.
pub fn load_deviations(path: &Path) -> Result<Deviations> {
	let content = read_input(path)?;
	let deviations = parse_deviations_str(&content, path)?;
	tracing::debug!(path = %path.display(), count = deviations.len(), "loaded deviations");
	Ok(deviations)
}
