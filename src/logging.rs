//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a default log level.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
	match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

	// Ignore the error when a subscriber is already set (e.g. in tests)
	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
