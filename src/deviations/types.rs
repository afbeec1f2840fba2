use std::fmt;

/// Kind of deviation resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviationType {
	#[default]
	Unknown,
	Target,
	Config,
}

impl DeviationType {
	pub fn as_str(&self) -> &'static str {
		match self {
			DeviationType::Unknown => "unknown",
			DeviationType::Target => "target",
			DeviationType::Config => "config",
		}
	}

	/// Map a wire name (e.g. `TARGET`, `config`) to a type.
	pub fn from_wire(name: &str) -> Self {
		match name.to_ascii_lowercase().as_str() {
			"target" => DeviationType::Target,
			"config" => DeviationType::Config,
			_ => DeviationType::Unknown,
		}
	}
}

impl fmt::Display for DeviationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single path whose running value differs from the desired one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deviation {
	pub path: String,
	pub desired_value: String,
	pub actual_value: String,
	pub reason: String,
}

impl Deviation {
	pub fn new(
		path: impl Into<String>,
		desired_value: impl Into<String>,
		actual_value: impl Into<String>,
		reason: impl Into<String>,
	) -> Self {
		Deviation {
			path: path.into(),
			desired_value: desired_value.into(),
			actual_value: actual_value.into(),
			reason: reason.into(),
		}
	}

	/// One-line label, e.g. `[N] /interface[name=ethernet-1/1]/mtu`.
	pub fn label(&self) -> String {
		format!("{} {}", reason_initial(&self.reason), self.path)
	}
}

impl fmt::Display for Deviation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Path: {}\nActual Value: {}\nReason: {}\nDesired Value: {}",
			self.path, self.actual_value, self.reason, self.desired_value
		)
	}
}

/// All deviations reported by one Deviation resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deviations {
	pub name: String,
	pub namespace: String,
	pub deviation_type: DeviationType,
	pub deviations: Vec<Deviation>,
}

impl Deviations {
	pub fn new(name: impl Into<String>, deviation_type: DeviationType) -> Self {
		Deviations {
			name: name.into(),
			deviation_type,
			..Default::default()
		}
	}

	pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = namespace.into();
		self
	}

	pub fn push(&mut self, deviation: Deviation) {
		self.deviations.push(deviation);
	}

	pub fn len(&self) -> usize {
		self.deviations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.deviations.is_empty()
	}

	/// Header line for listings.
	pub fn header(&self) -> String {
		format!(
			"Namespace: {}, Deviation: {} [{}]",
			self.namespace, self.name, self.deviation_type
		)
	}
}

impl fmt::Display for Deviations {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Name: {}", self.name)?;
		writeln!(f, "Namespace: {}", self.namespace)?;
		writeln!(f, "Type: {}", self.deviation_type)?;
		writeln!(f, "Deviations:")?;
		for deviation in &self.deviations {
			write!(f, "{}\n\n", deviation)?;
		}
		Ok(())
	}
}

/// First character of the reason, upper-cased, in brackets. `[?]` if empty.
pub fn reason_initial(reason: &str) -> String {
	match reason.chars().next() {
		Some(c) if c != char::REPLACEMENT_CHARACTER => {
			// Keep a single glyph when the uppercase form expands (e.g. 'ß')
			let mut upper = c.to_uppercase();
			let initial = match (upper.next(), upper.next()) {
				(Some(u), None) => u,
				_ => c,
			};
			format!("[{}]", initial)
		}
		_ => "[?]".to_string(),
	}
}

/// Right-pad a label with spaces up to `width` bytes.
pub fn align_label(label: &str, width: usize) -> String {
	format!("{:<width$}", label, width = width)
}

/// Aligned multi-line preview of a deviation.
pub fn preview(deviation: &Deviation) -> String {
	let rows = [
		("Path:", deviation.path.as_str()),
		("Actual:", deviation.actual_value.as_str()),
		("Desired:", deviation.desired_value.as_str()),
		("Reason:", deviation.reason.as_str()),
	];
	let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

	rows.iter()
		.map(|(label, value)| format!("{} {}\n", align_label(label, width), value))
		.collect()
}
