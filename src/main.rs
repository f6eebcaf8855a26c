use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use content_replace::config::{
	Configuration, Mode, OPTIONS_FILE_NAME, Options, Validation, generate_init_template,
	parse_options_file,
};
use content_replace::rewrite::{preview_files, rewrite_files};

#[derive(Parser)]
#[command(name = "content-replace")]
#[command(
	author,
	version,
	about = "Regex content substitution for build outputs, in memory or on disk"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Create a template options file in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite an existing options file when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Log rewritten files and filter decisions
	#[arg(short, long, global = true)]
	verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rewrite files under the configured root path
	Run {
		#[command(flatten)]
		source: OptionsSource,

		/// Root directory, overriding `path` from the options file
		#[arg(long, value_name = "DIR")]
		path: Option<String>,

		/// Print the files that would change without writing them
		#[arg(long)]
		dry_run: bool,
	},
	/// Options file commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the normalized configuration
	Show {
		#[command(flatten)]
		source: OptionsSource,
	},
	/// Check the options file without rewriting anything
	Validate {
		#[command(flatten)]
		source: OptionsSource,
	},
}

#[derive(Args)]
struct OptionsSource {
	/// Options file to read
	#[arg(long, short, value_name = "FILE", default_value = OPTIONS_FILE_NAME)]
	config: PathBuf,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "info" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	match cli.command {
		Some(Commands::Run {
			source,
			path,
			dry_run,
		}) => handle_run(&source.config, path, dry_run),
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show { source } => handle_config_show(&source.config),
			ConfigAction::Validate { source } => handle_config_validate(&source.config),
		},
		// No command specified - this shouldn't happen due to arg_required_else_help
		None => Ok(ExitCode::SUCCESS),
	}
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(OPTIONS_FILE_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{OPTIONS_FILE_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, generate_init_template())
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {OPTIONS_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn load_options(path: &Path) -> Result<Options> {
	parse_options_file(path).with_context(|| format!("Failed to load options from {}", path.display()))
}

fn load_configuration(options: Options) -> Result<Configuration> {
	match Configuration::from_options(options) {
		Validation::Valid(config) => Ok(config),
		Validation::Invalid(reason) => anyhow::bail!("Invalid options: {reason}"),
	}
}

fn handle_run(options_path: &Path, path: Option<String>, dry_run: bool) -> Result<ExitCode> {
	let mut options = load_options(options_path)?;
	if path.is_some() {
		options.path = path;
	}
	let config = load_configuration(options)?;

	if config.mode() == Mode::InMemoryAsset {
		anyhow::bail!(
			"No root path configured. In-memory assets can only be rewritten by a build tool; set `path` or pass --path."
		);
	}

	if dry_run {
		let changes = preview_files(&config).context("Failed to preview rewrite")?;
		if changes.is_empty() {
			println!("No files would change.");
		}
		for change in &changes {
			println!("would rewrite {}", change.path.display());
		}
		return Ok(ExitCode::SUCCESS);
	}

	let written = rewrite_files(&config).context("Failed to rewrite files")?;
	println!("Rewrote {} file(s) under {}", written.len(), config.root_path);
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(options_path: &Path) -> Result<ExitCode> {
	let config = load_configuration(load_options(options_path)?)?;

	println!("# Source: {}", options_path.display());
	println!("# mode: {}", config.mode().as_str());
	println!("# exts: {}", config.extensions.join(", "));
	if !config.root_path.is_empty() {
		println!("# path: {}", config.root_path);
	}
	if !config.include_paths.is_empty() {
		println!("# includes: {}", config.include_paths.join(", "));
	}
	if !config.exclude_paths.is_empty() {
		println!("# excludes: {}", config.exclude_paths.join(", "));
	}
	println!("# rules: {}", config.rules.len());
	println!();

	for (i, rule) in config.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    test: {}", rule.pattern);
		println!("    use: {}", rule.replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(options_path: &Path) -> Result<ExitCode> {
	let options = match parse_options_file(options_path) {
		Ok(options) => options,
		Err(e) => {
			eprintln!("Options error: {}", e);
			return Ok(ExitCode::FAILURE);
		}
	};

	match Configuration::from_options(options) {
		Validation::Valid(config) => {
			println!(
				"{} is valid ({} rules, {} mode)",
				options_path.display(),
				config.rules.len(),
				config.mode().as_str()
			);
			Ok(ExitCode::SUCCESS)
		}
		Validation::Invalid(reason) => {
			eprintln!("{} is invalid: {}", options_path.display(), reason);
			Ok(ExitCode::FAILURE)
		}
	}
}
