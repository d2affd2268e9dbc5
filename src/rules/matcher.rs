use crate::rules::spec::{RuleSpec, WILDCARD};

/// Check whether a command's tokens satisfy a rule's source pattern.
///
/// `tokens[0]` is the command name. Every pattern token must line up with a
/// present token: `$` accepts anything, literals compare ignoring ASCII case.
/// Tokens past the end of the pattern are ignored.
pub fn matches(rule: &RuleSpec, tokens: &[String]) -> bool {
	let pattern = rule.pattern();

	if pattern.is_empty() || tokens.len() < pattern.len() {
		return false;
	}

	pattern
		.iter()
		.zip(tokens)
		.all(|(want, got)| want == WILDCARD || want.eq_ignore_ascii_case(got))
}

/// Check whether `command` names a rule by its raw source pattern.
///
/// True when the pattern equals `command`, or starts with `command` followed
/// by a space, both ignoring ASCII case. No tokenizing or wildcards.
pub fn names_command(rule: &RuleSpec, command: &str) -> bool {
	let source = rule.source();

	if source.eq_ignore_ascii_case(command) {
		return true;
	}

	source.len() > command.len()
		&& source.is_char_boundary(command.len())
		&& source[..command.len()].eq_ignore_ascii_case(command)
		&& source[command.len()..].starts_with(' ')
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(line: &str) -> Vec<String> {
		line.split_whitespace().map(str::to_string).collect()
	}

	fn rule(source: &str) -> RuleSpec {
		RuleSpec::new("OperServ", source, "target", "")
	}

	#[test]
	fn test_literal_pattern_matches_case_insensitively() {
		let r = rule("os set");
		assert!(matches(&r, &tokens("os set")));
		assert!(matches(&r, &tokens("OS SeT")));
		assert!(!matches(&r, &tokens("os get")));
	}

	#[test]
	fn test_trailing_tokens_are_ignored() {
		let r = rule("os set");
		assert!(matches(&r, &tokens("os set readonly on")));
	}

	#[test]
	fn test_too_few_tokens_fails() {
		let r = rule("os set");
		assert!(!matches(&r, &tokens("os")));
		assert!(!matches(&r, &[]));
	}

	#[test]
	fn test_wildcard_requires_a_token() {
		let r = rule("id $");
		assert!(matches(&r, &tokens("id mypassword")));
		assert!(matches(&r, &tokens("ID hunter2 extra")));
		assert!(!matches(&r, &tokens("id")));
	}

	#[test]
	fn test_wildcard_accepts_empty_token() {
		let r = rule("id $");
		let toks = vec!["id".to_string(), String::new()];
		assert!(matches(&r, &toks));
	}

	#[test]
	fn test_wildcard_in_middle() {
		let r = rule("cs $ op");
		assert!(matches(&r, &tokens("cs #chan op nick")));
		assert!(!matches(&r, &tokens("cs #chan deop nick")));
	}

	#[test]
	fn test_matched_prefix_agrees_with_pattern() {
		let r = rule("cs $ OP");
		let t = tokens("CS #rust op someone");
		assert!(matches(&r, &t));
		assert!(t.len() >= r.pattern().len());
		for (p, tok) in r.pattern().iter().zip(&t) {
			assert!(p == WILDCARD || p.eq_ignore_ascii_case(tok));
		}
	}

	#[test]
	fn test_empty_pattern_never_matches() {
		let r = rule("   ");
		assert!(!matches(&r, &tokens("anything")));
	}

	#[test]
	fn test_names_command_exact() {
		assert!(names_command(&rule("id"), "id"));
		assert!(names_command(&rule("ID"), "id"));
	}

	#[test]
	fn test_names_command_prefix_with_space() {
		assert!(names_command(&rule("id $"), "id"));
		assert!(names_command(&rule("os set"), "OS"));
		assert!(names_command(&rule("os set"), "os set"));
	}

	#[test]
	fn test_names_command_needs_boundary() {
		assert!(!names_command(&rule("identify"), "id"));
		assert!(!names_command(&rule("id"), "identify"));
		assert!(!names_command(&rule("id\t$"), "id"));
	}
}
