/// Source pattern token that matches any single command token.
pub const WILDCARD: &str = "$";

/// A single configured rewrite rule.
///
/// Rules are built once per configuration load and never mutated. The
/// source pattern is kept both as the raw configured string (used by the
/// help lookup) and split on whitespace (used by token matching).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
	scope: String,
	source: String,
	pattern: Vec<String>,
	target: String,
	description: String,
}

impl RuleSpec {
	/// Build a rule from its configured fields.
	///
	/// Callers are expected to have rejected records with an empty scope,
	/// source or target already; no validation happens here.
	pub fn new(
		scope: impl Into<String>,
		source: impl Into<String>,
		target: impl Into<String>,
		description: impl Into<String>,
	) -> Self {
		let source = source.into();
		let pattern = source.split_whitespace().map(str::to_string).collect();

		RuleSpec {
			scope: scope.into(),
			source,
			pattern,
			target: target.into(),
			description: description.into(),
		}
	}

	/// Service identity this rule is bound to.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// The source pattern exactly as configured.
	pub fn source(&self) -> &str {
		&self.source
	}

	/// The source pattern split into tokens.
	pub fn pattern(&self) -> &[String] {
		&self.pattern
	}

	/// The raw target template.
	pub fn target(&self) -> &str {
		&self.target
	}

	/// Help text, empty when the rule has none.
	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn has_description(&self) -> bool {
		!self.description.is_empty()
	}

	/// Whether this rule applies to `scope`. An empty `scope` means any.
	pub fn in_scope(&self, scope: &str) -> bool {
		scope.is_empty() || self.scope.eq_ignore_ascii_case(scope)
	}

	/// The command a rewrite of this rule ends up running: the first
	/// whitespace-separated piece of the target template.
	pub fn alias_of(&self) -> &str {
		let target = self.target.trim_start();
		target.split_whitespace().next().unwrap_or(target)
	}
}
