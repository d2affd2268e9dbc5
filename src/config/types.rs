use serde::Deserialize;
use std::path::PathBuf;

use crate::rules::RuleSpec;

/// Top-level configuration from a `rewrite.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Command blocks, in priority order. Only blocks with `rewrite = true`
	/// become rules; first matching rule wins.
	#[serde(default, rename = "command")]
	pub commands: Vec<CommandBlock>,
}

/// One `[[command]]` block.
///
/// Keys other than the ones below are ignored, so blocks can carry whatever
/// else the host dispatcher reads from them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommandBlock {
	/// Service the command belongs to; also the identity rewrites run as.
	#[serde(default)]
	pub service: String,

	/// Dispatcher command name. Informational only.
	#[serde(default)]
	pub name: Option<String>,

	/// Whether this block defines a rewrite rule.
	#[serde(default)]
	pub rewrite: bool,

	/// Pattern the incoming command must match, e.g. `"id $"`.
	#[serde(default)]
	pub rewrite_source: String,

	/// Template for the rewritten command, e.g. `"identify $1"`.
	#[serde(default)]
	pub rewrite_target: String,

	/// Help text shown for the alias.
	#[serde(default)]
	pub rewrite_description: String,
}

/// Why a command block did not produce a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	NotRewrite,
	MissingService,
	MissingSource,
	MissingTarget,
}

impl SkipReason {
	pub fn as_str(&self) -> &'static str {
		match self {
			SkipReason::NotRewrite => "rewrite not enabled",
			SkipReason::MissingService => "empty service",
			SkipReason::MissingSource => "empty rewrite_source",
			SkipReason::MissingTarget => "empty rewrite_target",
		}
	}
}

impl CommandBlock {
	/// Convert this block into a rule, or say why it can't be one.
	pub fn to_rule(&self) -> Result<RuleSpec, SkipReason> {
		if !self.rewrite {
			return Err(SkipReason::NotRewrite);
		}
		if self.service.is_empty() {
			return Err(SkipReason::MissingService);
		}
		if self.rewrite_source.is_empty() {
			return Err(SkipReason::MissingSource);
		}
		if self.rewrite_target.is_empty() {
			return Err(SkipReason::MissingTarget);
		}

		Ok(RuleSpec::new(
			self.service.as_str(),
			self.rewrite_source.as_str(),
			self.rewrite_target.as_str(),
			self.rewrite_description.as_str(),
		))
	}
}

impl Config {
	/// All usable rules, in configured order.
	///
	/// Rewrite blocks missing a required field are dropped with a warning.
	pub fn rule_specs(&self) -> Vec<RuleSpec> {
		self.commands
			.iter()
			.enumerate()
			.filter_map(|(index, block)| match block.to_rule() {
				Ok(rule) => Some(rule),
				Err(SkipReason::NotRewrite) => None,
				Err(reason) => {
					tracing::warn!(
						index,
						service = %block.service,
						source = %block.rewrite_source,
						reason = reason.as_str(),
						"skipping rewrite block"
					);
					None
				}
			})
			.collect()
	}

	/// Blocks that have `rewrite = true` but were rejected.
	pub fn skipped_rewrites(&self) -> Vec<(usize, SkipReason)> {
		self.commands
			.iter()
			.enumerate()
			.filter_map(|(index, block)| match block.to_rule() {
				Err(SkipReason::NotRewrite) | Ok(_) => None,
				Err(reason) => Some((index, reason)),
			})
			.collect()
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}
