use regex::{Regex, RegexBuilder};

/// Default compiled size limit for wildcard regexes (the regex crate default).
const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled wildcard expression.
///
/// `*` matches any sequence of characters (including none); every other
/// character is literal and matched case-sensitively against the whole text.
#[derive(Debug, Clone)]
pub enum WildcardPattern {
	/// Empty pattern, matches everything.
	Any,

	/// Anchored regex built from the wildcard expression.
	Regex(Regex),

	/// Best-effort fallback used when the regex cannot be built:
	/// case-insensitive substring check of the raw (lowercased) pattern.
	Contains(String),
}

impl WildcardPattern {
	/// Compile a wildcard expression. Never fails.
	pub fn compile(pattern: &str) -> Self {
		compile_with_limit(pattern, DEFAULT_SIZE_LIMIT)
	}

	pub fn is_any(&self) -> bool {
		matches!(self, WildcardPattern::Any)
	}

	/// Check a text against this pattern.
	pub fn matches(&self, text: &str) -> bool {
		match self {
			WildcardPattern::Any => true,
			WildcardPattern::Regex(regex) => regex.is_match(text),
			WildcardPattern::Contains(needle) => text.to_lowercase().contains(needle.as_str()),
		}
	}
}

fn compile_with_limit(pattern: &str, size_limit: usize) -> WildcardPattern {
	if pattern.is_empty() {
		return WildcardPattern::Any;
	}

	let expr = wildcard_to_regex(pattern);
	match RegexBuilder::new(&expr).size_limit(size_limit).build() {
		Ok(regex) => WildcardPattern::Regex(regex),
		Err(err) => {
			tracing::debug!(
				pattern,
				error = %err,
				"wildcard pattern did not compile, falling back to substring match"
			);
			WildcardPattern::Contains(pattern.to_lowercase())
		}
	}
}

/// Convert a wildcard expression into an anchored regex.
///
/// Literal segments between `*` are escaped and joined with `.*`.
pub fn wildcard_to_regex(pattern: &str) -> String {
	let body = pattern
		.split('*')
		.map(regex::escape)
		.collect::<Vec<_>>()
		.join(".*");
	format!("^{}$", body)
}

/// Check a text against a wildcard pattern.
///
/// An empty pattern matches everything.
pub fn matches_pattern(text: &str, pattern: &str) -> bool {
	WildcardPattern::compile(pattern).matches(text)
}
