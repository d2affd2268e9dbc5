//! Shared, reloadable rule collection.
//!
//! [`RuleRegistry`] publishes an immutable [`RuleSet`] behind
//! `Arc<RwLock<Arc<...>>>`. A reload builds the new set off to the side and
//! swaps the handle under the write lock, so every lookup runs against one
//! whole generation of rules.

use std::sync::{Arc, PoisonError, RwLock};

use crate::rules::matcher::{matches, names_command};
use crate::rules::spec::RuleSpec;

/// One generation of rules, in priority order.
#[derive(Debug, Default)]
pub struct RuleSet {
	generation: u64,
	rules: Vec<RuleSpec>,
}

impl RuleSet {
	/// Monotonic counter bumped on every reload. The initial set is 0.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn rules(&self) -> &[RuleSpec] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// First rule in `scope` whose source pattern matches `tokens`.
	pub fn find_match(&self, scope: &str, tokens: &[String]) -> Option<&RuleSpec> {
		self.rules
			.iter()
			.find(|rule| rule.in_scope(scope) && matches(rule, tokens))
	}

	/// First rule in `scope` whose raw source pattern is `command` or starts
	/// with `command` and a space.
	pub fn find_by_command_name(&self, scope: &str, command: &str) -> Option<&RuleSpec> {
		self.rules
			.iter()
			.find(|rule| rule.in_scope(scope) && names_command(rule, command))
	}
}

/// Thread-safe registry of rewrite rules.
///
/// Cloning shares the same underlying collection.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
	current: Arc<RwLock<Arc<RuleSet>>>,
}

impl RuleRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry holding `specs` as its first generation.
	pub fn with_rules(specs: Vec<RuleSpec>) -> Self {
		Self {
			current: Arc::new(RwLock::new(Arc::new(RuleSet {
				generation: 0,
				rules: specs,
			}))),
		}
	}

	/// The currently published rule set.
	///
	/// The returned handle stays valid and unchanged across later reloads.
	pub fn snapshot(&self) -> Arc<RuleSet> {
		// A set is published whole, so a poisoned lock still guards a valid one.
		let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
		Arc::clone(&*guard)
	}

	/// Replace every rule with `specs`, returning the new generation.
	pub fn reload(&self, specs: Vec<RuleSpec>) -> u64 {
		let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
		let generation = guard.generation + 1;
		*guard = Arc::new(RuleSet {
			generation,
			rules: specs,
		});
		drop(guard);

		tracing::debug!(generation, "rewrite rules reloaded");
		generation
	}

	/// First rule matching the full command `tokens` (name first).
	///
	/// An empty `scope` searches rules of every service.
	pub fn find_match(&self, scope: &str, tokens: &[String]) -> Option<RuleSpec> {
		self.snapshot().find_match(scope, tokens).cloned()
	}

	/// First rule whose raw source pattern names `command`, for help lookups.
	pub fn find_by_command_name(&self, scope: &str, command: &str) -> Option<RuleSpec> {
		self.snapshot().find_by_command_name(scope, command).cloned()
	}

	/// Number of rules in the current generation.
	pub fn len(&self) -> usize {
		self.snapshot().len()
	}

	pub fn is_empty(&self) -> bool {
		self.snapshot().is_empty()
	}
}
