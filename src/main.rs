use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cmd_rewrite::config::{
	INIT_TEMPLATE, LOCAL_CONFIG_NAME, LoadedConfig, load_config, resolve_config_path,
	user_config_path,
};
use cmd_rewrite::dispatch::{CommandSource, Dispatcher, RewriteOutcome, StaticServices};
use cmd_rewrite::rules::RuleRegistry;

#[derive(Parser)]
#[command(name = "rewrite")]
#[command(
	author,
	version,
	about = "Command alias engine: match service commands against rules and rewrite them"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Config file to use instead of ./rewrite.toml or ~/.rewrite.toml
	#[arg(long, global = true, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Create a template rewrite.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing rewrite.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Rewrite a command and print the resulting command line
	Run {
		/// Service the command is addressed to
		#[arg(long)]
		service: String,

		/// Nickname of the user sending the command
		#[arg(long = "as", value_name = "NICK", default_value = "user")]
		invoker: String,

		/// Treat the command as a channel command (rules of every service apply)
		#[arg(long)]
		channel: bool,

		/// Live services, comma separated (defaults to every service in the config)
		#[arg(long, value_delimiter = ',', value_name = "NAMES")]
		services: Vec<String>,

		/// Command name followed by its arguments
		#[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
		tokens: Vec<String>,
	},

	/// Show the help text of an aliased command
	Describe {
		/// Service the command is addressed to
		#[arg(long)]
		service: String,

		/// Treat the command as a channel command
		#[arg(long)]
		channel: bool,

		/// Command name
		command: String,
	},

	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the accepted rules in priority order
	Show,
	/// Check the config file for errors without running anything
	Validate,
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

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

	if cli.init {
		return handle_init(cli.force);
	}

	let config_path = cli.config.as_deref();

	match cli.command {
		Some(Commands::Run {
			service,
			invoker,
			channel,
			services,
			tokens,
		}) => {
			let source = CommandSource {
				invoker: &invoker,
				service: &service,
				in_channel: channel,
			};
			handle_run(config_path, &source, &services, &tokens)
		}
		Some(Commands::Describe {
			service,
			channel,
			command,
		}) => {
			let source = CommandSource {
				invoker: "",
				service: &service,
				in_channel: channel,
			};
			handle_describe(config_path, &source, &command)
		}
		Some(Commands::Config { action }) => match action {
			ConfigAction::Show => handle_config_show(config_path),
			ConfigAction::Validate => handle_config_validate(config_path),
		},
		// Unreachable with arg_required_else_help unless only --config was passed
		None => Ok(ExitCode::SUCCESS),
	}
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let config_path = PathBuf::from(LOCAL_CONFIG_NAME);

	if config_path.exists() && !force {
		anyhow::bail!("{LOCAL_CONFIG_NAME} already exists. Use --force to overwrite.");
	}

	std::fs::write(&config_path, INIT_TEMPLATE)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {LOCAL_CONFIG_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let path = resolve_config_path(explicit, &cwd).context("Failed to locate configuration")?;
	load_config(&path).context("Failed to load configuration")
}

fn handle_run(
	config_path: Option<&Path>,
	source: &CommandSource,
	services: &[String],
	tokens: &[String],
) -> Result<ExitCode> {
	let loaded = load(config_path)?;

	let directory = if services.is_empty() {
		StaticServices::from_config(&loaded.config)
	} else {
		StaticServices::new(services.iter().cloned())
	};
	let registry = RuleRegistry::with_rules(loaded.config.rule_specs());
	let dispatcher = Dispatcher::new(registry, directory);

	let (command, params) = tokens
		.split_first()
		.ok_or_else(|| anyhow::anyhow!("No command given"))?;

	match dispatcher.execute(source, command, params) {
		RewriteOutcome::Rewritten { service, line, .. } => {
			println!("{service}: {line}");
			Ok(ExitCode::SUCCESS)
		}
		RewriteOutcome::NoMatch => {
			eprintln!("Unable to rewrite '{}'", tokens.join(" "));
			Ok(ExitCode::FAILURE)
		}
		RewriteOutcome::ServiceUnavailable { service } => {
			eprintln!("Service not available: {service}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_describe(
	config_path: Option<&Path>,
	source: &CommandSource,
	command: &str,
) -> Result<ExitCode> {
	let loaded = load(config_path)?;
	let registry = RuleRegistry::with_rules(loaded.config.rule_specs());
	let dispatcher = Dispatcher::new(registry, StaticServices::from_config(&loaded.config));

	match dispatcher.help(source, command) {
		Some(help) => {
			println!("{}", help.description);
			println!("{}", help.alias_notice());
			Ok(ExitCode::SUCCESS)
		}
		None => {
			eprintln!("No help available for {command}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_config_show(config_path: Option<&Path>) -> Result<ExitCode> {
	let loaded = load(config_path)?;
	let specs = loaded.config.rule_specs();

	println!("# Source: {}", loaded.path.display());
	println!("# command blocks: {}", loaded.config.commands.len());
	println!("# rules: {}", specs.len());
	println!();

	for (i, rule) in specs.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    service: {}", rule.scope());
		println!("    rewrite_source: {}", rule.source());
		println!("    rewrite_target: {}", rule.target());
		if rule.has_description() {
			println!("    rewrite_description: {}", rule.description());
		}
		println!();
	}

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

fn handle_config_validate(config_path: Option<&Path>) -> Result<ExitCode> {
	match load(config_path) {
		Ok(loaded) => {
			let rules = loaded.config.rule_specs().len();
			let skipped = loaded.config.skipped_rewrites();

			println!(
				"Configuration is valid: {} ({} rules, {} skipped)",
				loaded.path.display(),
				rules,
				skipped.len()
			);
			for (index, reason) in skipped {
				println!("  command block {}: {}", index + 1, reason.as_str());
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}
