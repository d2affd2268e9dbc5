//! Dispatcher-side use of the rewrite rules.
//!
//! This module handles:
//! - Running an incoming command through the registry and expander
//! - Resolving the rewritten command's target service
//! - Help text for aliased commands

pub mod services;

pub use services::{ServiceDirectory, StaticServices};

use crate::rules::{RuleRegistry, expand};

/// Who sent a command, and where.
#[derive(Debug, Clone, Copy)]
pub struct CommandSource<'a> {
	/// Display name of the user issuing the command.
	pub invoker: &'a str,

	/// Service the command was addressed to.
	pub service: &'a str,

	/// Whether the command came in as a channel (fantasy) command.
	pub in_channel: bool,
}

impl CommandSource<'_> {
	/// Scope used for rule lookups. Channel commands may hit any service's rules.
	pub fn scope(&self) -> &str {
		if self.in_channel { "" } else { self.service }
	}
}

/// Result of trying to rewrite a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
	/// A rule matched; run `line` as a new command on `service`.
	Rewritten {
		service: String,
		line: String,
		rule_source: String,
	},

	/// No rule matched the command.
	NoMatch,

	/// A rule matched but its service has no live handler.
	ServiceUnavailable { service: String },
}

/// Help for an aliased command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpText {
	/// The rule's description.
	pub description: String,

	/// Command the alias expands to.
	pub alias_of: String,
}

impl HelpText {
	/// The notice shown under the description in detailed help.
	pub fn alias_notice(&self) -> String {
		format!("This command is an alias to the command {}.", self.alias_of)
	}
}

/// Routes commands through the rule registry.
#[derive(Debug, Clone)]
pub struct Dispatcher<S> {
	registry: RuleRegistry,
	services: S,
}

impl<S: ServiceDirectory> Dispatcher<S> {
	pub fn new(registry: RuleRegistry, services: S) -> Self {
		Self { registry, services }
	}

	pub fn registry(&self) -> &RuleRegistry {
		&self.registry
	}

	/// Rewrite `command` with its `params`.
	pub fn execute(&self, source: &CommandSource, command: &str, params: &[String]) -> RewriteOutcome {
		let mut tokens = Vec::with_capacity(params.len() + 1);
		tokens.push(command.to_string());
		tokens.extend(params.iter().cloned());

		let shown = describe_invocation(command, params);

		let Some(rule) = self.registry.find_match(source.scope(), &tokens) else {
			tracing::info!(command = %shown, "unable to rewrite");
			return RewriteOutcome::NoMatch;
		};

		let line = expand(rule.target(), &tokens, source.invoker);
		tracing::debug!(
			command = %shown,
			rewritten = %line,
			rule = %rule.source(),
			"rewrote command"
		);

		match self.services.resolve(rule.scope()) {
			Some(service) => RewriteOutcome::Rewritten {
				service,
				line,
				rule_source: rule.source().to_string(),
			},
			None => {
				tracing::debug!(service = %rule.scope(), "rewrite target service not found");
				RewriteOutcome::ServiceUnavailable {
					service: rule.scope().to_string(),
				}
			}
		}
	}

	/// One-line help summary for `command`, if its rule has a description.
	pub fn help_summary(&self, source: &CommandSource, command: &str) -> Option<String> {
		self.help(source, command).map(|help| help.description)
	}

	/// Detailed help for `command`, if its rule has a description.
	pub fn help(&self, source: &CommandSource, command: &str) -> Option<HelpText> {
		let rule = self
			.registry
			.find_by_command_name(source.scope(), command)?;

		if !rule.has_description() {
			return None;
		}

		Some(HelpText {
			description: rule.description().to_string(),
			alias_of: rule.alias_of().to_string(),
		})
	}
}

/// The command plus its first argument, as shown in log lines.
fn describe_invocation(command: &str, params: &[String]) -> String {
	match params.first() {
		Some(first) => format!("{command} {first}"),
		None => command.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::RuleSpec;

	fn args(line: &str) -> Vec<String> {
		line.split_whitespace().map(str::to_string).collect()
	}

	fn dispatcher() -> Dispatcher<StaticServices> {
		let registry = RuleRegistry::with_rules(vec![
			RuleSpec::new("NickServ", "id $", "identify $1", "Identify to services"),
			RuleSpec::new("OperServ", "os set", "set $me $2-", ""),
			RuleSpec::new("Ghost", "haunt", "boo", ""),
		]);
		let services = StaticServices::new(["NickServ", "OperServ"]);
		Dispatcher::new(registry, services)
	}

	fn direct<'a>(service: &'a str) -> CommandSource<'a> {
		CommandSource {
			invoker: "Alice",
			service,
			in_channel: false,
		}
	}

	#[test]
	fn test_execute_rewrites() {
		let outcome = dispatcher().execute(&direct("NickServ"), "ID", &args("hunter2"));
		assert_eq!(
			outcome,
			RewriteOutcome::Rewritten {
				service: "NickServ".to_string(),
				line: "identify hunter2".to_string(),
				rule_source: "id $".to_string(),
			}
		);
	}

	#[test]
	fn test_execute_substitutes_invoker() {
		let outcome = dispatcher().execute(&direct("operserv"), "os", &args("set readonly on"));
		match outcome {
			RewriteOutcome::Rewritten { service, line, .. } => {
				assert_eq!(service, "OperServ");
				assert_eq!(line, "set Alice readonly on");
			}
			other => panic!("Expected Rewritten, got {other:?}"),
		}
	}

	#[test]
	fn test_execute_no_match() {
		let d = dispatcher();
		assert_eq!(
			d.execute(&direct("NickServ"), "id", &[]),
			RewriteOutcome::NoMatch
		);
		assert_eq!(
			d.execute(&direct("ChanServ"), "id", &args("pw")),
			RewriteOutcome::NoMatch
		);
	}

	#[test]
	fn test_channel_commands_ignore_service_scope() {
		let source = CommandSource {
			invoker: "Alice",
			service: "ChanServ",
			in_channel: true,
		};
		let outcome = dispatcher().execute(&source, "id", &args("pw"));
		assert!(matches!(outcome, RewriteOutcome::Rewritten { .. }));
	}

	#[test]
	fn test_execute_unknown_service() {
		let outcome = dispatcher().execute(&direct("Ghost"), "haunt", &[]);
		assert_eq!(
			outcome,
			RewriteOutcome::ServiceUnavailable {
				service: "Ghost".to_string()
			}
		);
	}

	#[test]
	fn test_help() {
		let d = dispatcher();
		let help = d.help(&direct("NickServ"), "id").unwrap();
		assert_eq!(help.description, "Identify to services");
		assert_eq!(help.alias_of, "identify");
		assert_eq!(
			help.alias_notice(),
			"This command is an alias to the command identify."
		);
		assert_eq!(
			d.help_summary(&direct("NickServ"), "ID").as_deref(),
			Some("Identify to services")
		);
	}

	#[test]
	fn test_help_needs_description() {
		let d = dispatcher();
		assert!(d.help(&direct("OperServ"), "os").is_none());
		assert!(d.help(&direct("NickServ"), "identify").is_none());
	}

	#[test]
	fn test_describe_invocation() {
		assert_eq!(describe_invocation("id", &args("pw extra")), "id pw");
		assert_eq!(describe_invocation("help", &[]), "help");
	}
}
