use crate::model::{BlameNode, TypedValue};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The ConfigBlame resource as exported to YAML.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigBlame {
	#[serde(default)]
	pub api_version: String,

	#[serde(default)]
	pub kind: String,

	#[serde(default)]
	pub metadata: Metadata,

	#[serde(default)]
	pub status: ConfigBlameStatus,
}

/// Resource metadata.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Metadata {
	#[serde(default)]
	pub name: String,

	#[serde(default)]
	pub namespace: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigBlameStatus {
	/// Root of the blame tree.
	#[serde(default)]
	pub value: Option<BlameNodeWire>,
}

/// A blame tree element on the wire. Leaves omit `childs`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlameNodeWire {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,

	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub owner: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<ValueWire>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub deviation_value: Option<ValueWire>,

	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub childs: Vec<BlameNodeWire>,
}

/// A typed value on the wire. At most one field is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueWire {
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub string_val: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub int_val: Option<IntLiteral>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bool_val: Option<bool>,
}

/// The raw text of an integer field.
///
/// Bare scalars are kept as written (`1.5`, `0x1F`, out-of-range numbers)
/// so decoding can apply the base-10 parse and its string fallback. int64
/// values are quoted in protobuf JSON and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntLiteral(pub String);

impl IntLiteral {
	/// The raw text of the literal.
	pub fn raw(&self) -> String {
		self.0.clone()
	}
}

impl<'de> Deserialize<'de> for IntLiteral {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// YAML hands plain scalars to `deserialize_str` unresolved
		deserializer.deserialize_str(IntLiteralVisitor)
	}
}

struct IntLiteralVisitor;

impl Visitor<'_> for IntLiteralVisitor {
	type Value = IntLiteral;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("an integer literal")
	}

	fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value.to_string()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value.to_string()))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value.to_string()))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value.to_string()))
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Self::Value, E> {
		Ok(IntLiteral(value.to_string()))
	}
}

impl From<&ValueWire> for TypedValue {
	/// Decode with precedence string > int > bool > absent. An integer field
	/// that does not parse is kept as a string value holding the raw text.
	fn from(wire: &ValueWire) -> Self {
		if !wire.string_val.is_empty() {
			return TypedValue::String(wire.string_val.clone());
		}

		if let Some(raw) = wire.int_val.as_ref().map(IntLiteral::raw)
			&& !raw.is_empty()
		{
			return match raw.parse::<i64>() {
				Ok(n) => TypedValue::Int(n),
				Err(_) => TypedValue::String(raw),
			};
		}

		match wire.bool_val {
			Some(b) => TypedValue::Bool(b),
			None => TypedValue::Absent,
		}
	}
}

impl From<&TypedValue> for ValueWire {
	fn from(value: &TypedValue) -> Self {
		match value {
			TypedValue::String(s) => ValueWire {
				string_val: s.clone(),
				..Default::default()
			},
			TypedValue::Int(n) => ValueWire {
				int_val: Some(IntLiteral(n.to_string())),
				..Default::default()
			},
			TypedValue::Bool(b) => ValueWire {
				bool_val: Some(*b),
				..Default::default()
			},
			TypedValue::Absent => ValueWire::default(),
		}
	}
}

impl From<BlameNodeWire> for BlameNode {
	fn from(wire: BlameNodeWire) -> Self {
		BlameNode {
			value: wire.value.as_ref().map(TypedValue::from),
			deviation_value: wire.deviation_value.as_ref().map(TypedValue::from),
			children: wire.childs.into_iter().map(BlameNode::from).collect(),
			name: wire.name,
			owner: wire.owner,
		}
	}
}

impl From<&BlameNode> for BlameNodeWire {
	fn from(node: &BlameNode) -> Self {
		BlameNodeWire {
			name: node.name.clone(),
			owner: node.owner.clone(),
			value: node.value.as_ref().map(ValueWire::from),
			deviation_value: node.deviation_value.as_ref().map(ValueWire::from),
			childs: node.children.iter().map(BlameNodeWire::from).collect(),
		}
	}
}
