use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sdc_blame::config::{
	CONFIG_FILE_NAME, MergedConfig, discover_configs, merge_configs, user_config_path,
};
use sdc_blame::deviations::{load_deviations, preview};
use sdc_blame::filter::{BlameFilter, filter_tree};
use sdc_blame::logging::init_logging;
use sdc_blame::render::{OutputFormat, render};
use sdc_blame::wire::load_blame_tree;

const INIT_TEMPLATE: &str = r#"# sdc-blame configuration
#
# Files are looked up from the current directory upwards, then in the home
# directory. The most specific file wins per field; CLI flags win over all.

# Stop looking in parent directories
root = true

[filter]
# leaf-name = "*timeout*"
# owner = "*config-running*"
# path = "*/network/*"
# deviation = false

[display]
# tree, table or json
format = "tree"
"#;

#[derive(Parser)]
#[command(name = "sdc-blame")]
#[command(
	author,
	version,
	about = "CLI tool for filtering configuration blame trees and listing deviations"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Increase log verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Show the blame tree, optionally filtered
	Blame(BlameArgs),

	/// List the deviations of a Deviation resource
	Deviation {
		/// Deviation resource file (YAML)
		#[arg(long, value_name = "FILE")]
		file: PathBuf,

		/// Show a preview block for every deviation
		#[arg(long)]
		preview: bool,
	},

	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},

	/// Create a template .sdc-blame.toml in the current directory
	Init {
		/// Overwrite an existing .sdc-blame.toml
		#[arg(long)]
		force: bool,
	},
}

#[derive(clap::Args)]
struct BlameArgs {
	/// ConfigBlame resource (YAML) or raw blame tree (JSON)
	#[arg(long, value_name = "FILE")]
	file: PathBuf,

	/// Wildcard pattern for leaf names
	#[arg(long, value_name = "PATTERN")]
	leaf: Option<String>,

	/// Wildcard pattern for owners
	#[arg(long, value_name = "PATTERN")]
	owner: Option<String>,

	/// Wildcard pattern for the full path (slash separated)
	#[arg(long, value_name = "PATTERN")]
	path: Option<String>,

	/// Only show leaves whose running value deviates
	#[arg(long, overrides_with = "no_deviation")]
	deviation: bool,

	/// Drop a deviation constraint set in the config file
	#[arg(long, overrides_with = "deviation")]
	no_deviation: bool,

	/// Output format
	#[arg(long, value_enum)]
	format: Option<OutputFormat>,
}

impl BlameArgs {
	/// The deviation constraint given on the command line, if any.
	fn deviation_flag(&self) -> Option<bool> {
		if self.deviation {
			Some(true)
		} else if self.no_deviation {
			Some(false)
		} else {
			None
		}
	}
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display merged effective configuration with sources
	Show,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	match cli.command {
		Commands::Blame(args) => handle_blame(&args),
		Commands::Deviation { file, preview } => handle_deviation(&file, preview),
		Commands::Config { action } => match action {
			ConfigAction::Show => handle_config_show(),
		},
		Commands::Init { force } => handle_init(force),
	}
}

fn load_config() -> Result<MergedConfig> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let configs = discover_configs(&cwd).context("Failed to load configuration")?;
	Ok(merge_configs(&configs))
}

/// Merge CLI flags over configured defaults.
fn resolve_filter(args: &BlameArgs, config: &MergedConfig) -> BlameFilter {
	let defaults = config.filter.to_filter();
	BlameFilter {
		leaf_name: args.leaf.clone().unwrap_or(defaults.leaf_name),
		owner: args.owner.clone().unwrap_or(defaults.owner),
		path: args.path.clone().unwrap_or(defaults.path),
		deviation: args.deviation_flag().unwrap_or(defaults.deviation),
	}
}

fn handle_blame(args: &BlameArgs) -> Result<ExitCode> {
	let config = load_config()?;
	let filter = resolve_filter(args, &config);
	let format = args.format.or(config.display.format).unwrap_or_default();

	let tree = load_blame_tree(&args.file)
		.with_context(|| format!("Failed to load blame tree from {}", args.file.display()))?;

	match filter_tree(Some(&tree), &filter) {
		Some(filtered) => {
			let output = render(&filtered, format).context("Failed to render blame tree")?;
			print!("{}", output);
			if !output.ends_with('\n') {
				println!();
			}
		}
		None => println!("No matching entries"),
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_deviation(file: &Path, show_preview: bool) -> Result<ExitCode> {
	let deviations = load_deviations(file)
		.with_context(|| format!("Failed to load deviations from {}", file.display()))?;

	if deviations.is_empty() {
		println!("No deviations found");
		return Ok(ExitCode::SUCCESS);
	}

	println!("{}", deviations.header());
	for deviation in &deviations.deviations {
		println!("{}", deviation.label());
		if show_preview {
			println!("{}", preview(deviation));
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_show() -> Result<ExitCode> {
	let config = load_config()?;

	if config.sources.is_empty() {
		println!("No configuration files found.");
	} else {
		println!("Configuration files (in cascade order):");
		for source in &config.sources {
			println!("  {}", source.display());
		}
	}
	println!();

	let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "(unset)".to_string());
	println!("[filter]");
	println!("  leaf-name: {}", show(&config.filter.leaf_name));
	println!("  owner: {}", show(&config.filter.owner));
	println!("  path: {}", show(&config.filter.path));
	println!("  deviation: {}", config.filter.deviation.unwrap_or(false));
	println!("[display]");
	println!(
		"  format: {}",
		config.display.format.unwrap_or_default().as_str()
	);
	println!();

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(CONFIG_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {}", CONFIG_FILE_NAME);
	Ok(ExitCode::SUCCESS)
}
