#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;

const BLAME_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/blame_test.yaml");
const DEVIATION_FIXTURE: &str = concat!(
	env!("CARGO_MANIFEST_DIR"),
	"/tests/fixtures/deviation_test.yaml"
);

/// Run the binary from an empty temp dir without picking up the user config.
fn blame_cmd(dir: &std::path::Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("sdc-blame").unwrap();
	cmd.current_dir(dir)
		.env("SDC_BLAME_NO_USER_CONFIG", "1")
		.env_remove("RUST_LOG");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("blame trees"));
}

#[test]
fn test_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("sdc-blame"));
}

#[test]
fn test_no_args_shows_help() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// blame tests
// ============================================================================

#[test]
fn test_blame_unfiltered_tree() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE])
		.assert()
		.success()
		.stdout(predicate::str::starts_with("test-device\n"))
		.stdout(predicate::str::contains(
			"timeout [config-running.diameter] = 3000 (deviation: 6000)",
		))
		.stdout(predicate::str::contains("ambulance [test-system.intent-emergency] = false"));
}

#[test]
fn test_blame_owner_filter() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--owner", "*config-running*"])
		.assert()
		.success()
		.stdout(predicate::str::contains("network"))
		.stdout(predicate::str::contains("appl-type"))
		.stdout(predicate::str::contains("host"))
		.stdout(predicate::str::contains("ambulance").not())
		.stdout(predicate::str::contains("system").not());
}

#[test]
fn test_blame_table_format() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--deviation", "--format", "table"])
		.assert()
		.success()
		.stdout(predicate::str::starts_with("PATH"))
		.stdout(predicate::str::contains("test-device/config/network/diameter/timeout"))
		.stdout(predicate::str::contains("6000"))
		.stdout(predicate::str::contains("appl-type").not());
}

#[test]
fn test_blame_json_format() {
	let temp_dir = tempfile::tempdir().unwrap();
	let output = blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--leaf", "digits", "--format", "json"])
		.output()
		.unwrap();
	assert!(output.status.success());

	let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(value["name"], "test-device");

	let mut node = &value;
	while let Some(childs) = node.get("childs") {
		assert_eq!(childs.as_array().unwrap().len(), 1);
		node = &childs[0];
	}
	assert_eq!(node["name"], "digits");
	assert_eq!(node["value"]["intVal"], "112");
}

#[test]
fn test_blame_no_matches() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--leaf", "ambulance", "--deviation"])
		.assert()
		.success()
		.stdout(predicate::str::contains("No matching entries"));
}

#[test]
fn test_blame_missing_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", "does-not-exist.yaml"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load blame tree"));
}

#[test]
fn test_blame_uses_config_defaults() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sdc-blame.toml"),
		r#"
root = true

[filter]
owner = "*emergency*"

[display]
format = "table"
"#,
	)
	.unwrap();

	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE])
		.assert()
		.success()
		.stdout(predicate::str::starts_with("PATH"))
		.stdout(predicate::str::contains("fire-brigade"))
		.stdout(predicate::str::contains("timeout").not());

	// CLI flags override the configured defaults
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--owner", "default", "--format", "tree"])
		.assert()
		.success()
		.stdout(predicate::str::contains("hostname [default] = test-device"))
		.stdout(predicate::str::contains("fire-brigade").not());
}

#[test]
fn test_blame_path_filter() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--path", "*/network/*", "--format", "table"])
		.assert()
		.success()
		.stdout(predicate::str::contains("test-device/config/network/diameter/appl-type"))
		.stdout(predicate::str::contains("test-device/config/network/diameter/timeout"))
		.stdout(predicate::str::contains("test-device/config/network/diameter/host"))
		.stdout(predicate::str::contains("unnamed"))
		.stdout(predicate::str::contains("ambulance").not())
		.stdout(predicate::str::contains("hostname").not());
}

#[test]
fn test_blame_no_deviation_overrides_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sdc-blame.toml"),
		"root = true\n[filter]\ndeviation = true\n",
	)
	.unwrap();

	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--format", "table"])
		.assert()
		.success()
		.stdout(predicate::str::contains("timeout"))
		.stdout(predicate::str::contains("ambulance").not());

	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE, "--format", "table", "--no-deviation"])
		.assert()
		.success()
		.stdout(predicate::str::contains("timeout"))
		.stdout(predicate::str::contains("ambulance"));

	// The last of the two flags wins
	blame_cmd(temp_dir.path())
		.args([
			"blame",
			"--file",
			BLAME_FIXTURE,
			"--format",
			"table",
			"--no-deviation",
			"--deviation",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains("ambulance").not());
}

#[test]
fn test_blame_invalid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".sdc-blame.toml"), "invalid toml [[[").unwrap();

	blame_cmd(temp_dir.path())
		.args(["blame", "--file", BLAME_FIXTURE])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load configuration"));
}

// ============================================================================
// deviation tests
// ============================================================================

#[test]
fn test_deviation_listing() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["deviation", "--file", DEVIATION_FIXTURE])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"Namespace: default, Deviation: test-device [target]",
		))
		.stdout(predicate::str::contains("[N] /network/diameter/timeout"))
		.stdout(predicate::str::contains("[?] /system/location"))
		.stdout(predicate::str::contains("Desired:").not());
}

#[test]
fn test_deviation_preview() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["deviation", "--file", DEVIATION_FIXTURE, "--preview"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Actual:  6000"))
		.stdout(predicate::str::contains("Desired: 3000"));
}

#[test]
fn test_deviation_empty() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("empty.yaml");
	fs::write(&path, "kind: Deviation\nspec:\n  deviations: []\n").unwrap();

	blame_cmd(temp_dir.path())
		.args(["deviation", "--file"])
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains("No deviations found"));
}

// ============================================================================
// config / init tests
// ============================================================================

#[test]
fn test_config_show_no_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	blame_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("No configuration files found"));
}

#[test]
fn test_config_show_displays_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".sdc-blame.toml"),
		"root = true\n[filter]\npath = \"*/network/*\"\n",
	)
	.unwrap();

	blame_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains(".sdc-blame.toml"))
		.stdout(predicate::str::contains("path: */network/*"))
		.stdout(predicate::str::contains("owner: (unset)"));
}

#[test]
fn test_init_creates_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".sdc-blame.toml");

	blame_cmd(temp_dir.path())
		.arg("init")
		.assert()
		.success()
		.stdout(predicate::str::contains("Created .sdc-blame.toml"));

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
	assert!(content.contains("[filter]"));

	// The template itself must be a valid config
	blame_cmd(temp_dir.path())
		.args(["config", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains("format: tree"));
}

#[test]
fn test_init_fails_if_exists() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".sdc-blame.toml"), "# existing").unwrap();

	blame_cmd(temp_dir.path())
		.arg("init")
		.assert()
		.failure()
		.stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_force_overwrites() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join(".sdc-blame.toml");
	fs::write(&config_path, "# existing").unwrap();

	blame_cmd(temp_dir.path())
		.args(["init", "--force"])
		.assert()
		.success();

	let content = fs::read_to_string(&config_path).unwrap();
	assert!(content.contains("root = true"));
}
