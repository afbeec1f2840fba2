use std::fmt;

/// A scalar configuration value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypedValue {
	String(String),
	Int(i64),
	Bool(bool),
	/// No value set on the wire.
	#[default]
	Absent,
}

impl TypedValue {
	pub fn is_absent(&self) -> bool {
		matches!(self, TypedValue::Absent)
	}
}

impl fmt::Display for TypedValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TypedValue::String(s) => f.write_str(s),
			TypedValue::Int(i) => write!(f, "{}", i),
			TypedValue::Bool(b) => write!(f, "{}", b),
			TypedValue::Absent => Ok(()),
		}
	}
}

impl From<&str> for TypedValue {
	fn from(value: &str) -> Self {
		TypedValue::String(value.to_string())
	}
}

impl From<String> for TypedValue {
	fn from(value: String) -> Self {
		TypedValue::String(value)
	}
}

impl From<i64> for TypedValue {
	fn from(value: i64) -> Self {
		TypedValue::Int(value)
	}
}

impl From<i32> for TypedValue {
	fn from(value: i32) -> Self {
		TypedValue::Int(i64::from(value))
	}
}

impl From<bool> for TypedValue {
	fn from(value: bool) -> Self {
		TypedValue::Bool(value)
	}
}
