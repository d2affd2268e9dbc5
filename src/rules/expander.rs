/// Template token that expands to the invoker's display name.
pub const INVOKER: &str = "$me";

/// One whitespace-separated piece of a target template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
	/// Copied to the output as-is.
	Literal(&'a str),
	/// `$me`
	Invoker,
	/// `$n`: the token at index `n`.
	Arg(usize),
	/// `$n-`: every token from index `n` on.
	Rest(usize),
	/// `$n-m`: tokens `n` through `m`, inclusive.
	Range(usize, usize),
}

impl<'a> Directive<'a> {
	/// Parse a template token. Returns `None` for an argument reference
	/// whose indices are not numbers; such tokens expand to nothing.
	pub fn parse(token: &'a str) -> Option<Self> {
		let Some(body) = token.strip_prefix('$') else {
			return Some(Directive::Literal(token));
		};

		if token == INVOKER {
			return Some(Directive::Invoker);
		}

		match body.split_once('-') {
			None => body.parse().ok().map(Directive::Arg),
			Some((start, "")) => start.parse().ok().map(Directive::Rest),
			Some((start, end)) => {
				let start = start.parse().ok()?;
				let end = end.parse().ok()?;
				Some(Directive::Range(start, end))
			}
		}
	}

	/// Append this directive's expansion to `out`.
	fn expand_into(self, tokens: &'a [String], invoker: &'a str, out: &mut Vec<&'a str>) {
		let selected = match self {
			Directive::Literal(text) => {
				out.push(text);
				return;
			}
			Directive::Invoker => {
				out.push(invoker);
				return;
			}
			Directive::Arg(n) => tokens.get(n..n.saturating_add(1)),
			Directive::Rest(n) => tokens.get(n..),
			Directive::Range(start, end) => {
				let end = end.saturating_add(1).min(tokens.len());
				tokens.get(start..end)
			}
		};

		if let Some(selected) = selected {
			out.extend(selected.iter().map(String::as_str));
		}
	}
}

/// Expand a target template against the tokens of a matched command.
///
/// `tokens` is the full command, name included, so `$0` is the command name
/// and `$1` its first argument. References that fall outside `tokens` or do
/// not parse contribute nothing. The pieces are joined with single spaces
/// and the result is trimmed.
pub fn expand(template: &str, tokens: &[String], invoker: &str) -> String {
	let mut pieces = Vec::new();

	for directive in template.split_whitespace().filter_map(Directive::parse) {
		directive.expand_into(tokens, invoker, &mut pieces);
	}

	pieces.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(line: &str) -> Vec<String> {
		line.split_whitespace().map(str::to_string).collect()
	}

	#[test]
	fn test_parse_directives() {
		assert_eq!(Directive::parse("set"), Some(Directive::Literal("set")));
		assert_eq!(Directive::parse("$me"), Some(Directive::Invoker));
		assert_eq!(Directive::parse("$2"), Some(Directive::Arg(2)));
		assert_eq!(Directive::parse("$1-"), Some(Directive::Rest(1)));
		assert_eq!(Directive::parse("$1-3"), Some(Directive::Range(1, 3)));
	}

	#[test]
	fn test_parse_rejects_non_numeric_references() {
		assert_eq!(Directive::parse("$"), None);
		assert_eq!(Directive::parse("$x"), None);
		assert_eq!(Directive::parse("$1-x"), None);
		assert_eq!(Directive::parse("$-"), None);
		assert_eq!(Directive::parse("$-2"), None);
		assert_eq!(Directive::parse("$mine"), None);
	}

	#[test]
	fn test_operserv_set_alias() {
		let out = expand(
			"operserv set $me $1-",
			&tokens("os set readonly on"),
			"Alice",
		);
		assert_eq!(out, "operserv set Alice set readonly on");
	}

	#[test]
	fn test_rest_from_second_argument() {
		let out = expand(
			"operserv set $me $2-",
			&tokens("os set readonly on"),
			"Alice",
		);
		assert_eq!(out, "operserv set Alice readonly on");
	}

	#[test]
	fn test_single_argument() {
		let out = expand("identify $1", &tokens("id mypassword"), "Alice");
		assert_eq!(out, "identify mypassword");
	}

	#[test]
	fn test_out_of_range_argument_is_dropped() {
		assert_eq!(expand("show $5", &tokens("show x"), "Alice"), "show");
		assert_eq!(expand("$5", &tokens("show x"), "Alice"), "");
	}

	#[test]
	fn test_range_is_inclusive() {
		let t = tokens("a b c d e");
		assert_eq!(expand("$1-3", &t, "me"), "b c d");
		assert_eq!(expand("$2-2", &t, "me"), "c");
	}

	#[test]
	fn test_range_is_clamped_to_tokens() {
		let t = tokens("a b c");
		assert_eq!(expand("x $1-10 y", &t, "me"), "x b c y");
		assert_eq!(expand("x $5-10 y", &t, "me"), "x y");
		assert_eq!(expand("x $2-1 y", &t, "me"), "x y");
	}

	#[test]
	fn test_rest_out_of_range() {
		assert_eq!(expand("cmd $3-", &tokens("a b"), "me"), "cmd");
		assert_eq!(expand("cmd $2-", &tokens("a b"), "me"), "cmd");
	}

	#[test]
	fn test_unparsable_directive_is_skipped() {
		let t = tokens("a b c");
		assert_eq!(expand("x $foo $1 $1-bar y", &t, "me"), "x b y");
	}

	#[test]
	fn test_whole_command_reference() {
		let t = tokens("os set readonly on");
		assert_eq!(expand("$0-", &t, "me"), t.join(" "));
	}

	#[test]
	fn test_literal_template_is_returned_as_is() {
		assert_eq!(
			expand("  operserv   global  hello ", &tokens("a b c"), "me"),
			"operserv global hello"
		);
		assert_eq!(expand("help", &[], "me"), "help");
	}

	#[test]
	fn test_invoker_substitution() {
		assert_eq!(expand("info $me", &tokens("whoami"), "Bob"), "info Bob");
		assert_eq!(expand("info $me", &tokens("whoami"), ""), "info");
	}

	#[test]
	fn test_empty_template() {
		assert_eq!(expand("", &tokens("a b"), "me"), "");
	}
}
