/// Starter config written by `rewrite --init`.
pub const INIT_TEMPLATE: &str = r#"# cmd-rewrite configuration
#
# Each [[command]] block with `rewrite = true` defines an alias.
# Blocks are tried in order; the first one that matches wins.
#
# rewrite_source: tokens the incoming command must start with.
#   "$" matches any single token. Literal tokens ignore case.
# rewrite_target: the command to run instead.
#   $0 is the command name, $1 the first argument, and so on.
#   $2- is every token from the second argument on, $1-3 arguments 1 to 3.
#   $me is the nickname of whoever sent the command.

[[command]]
service = "NickServ"
name = "ID"
rewrite = true
rewrite_source = "ID $"
rewrite_target = "IDENTIFY $1"
rewrite_description = "Identify yourself with your password"

[[command]]
service = "ChanServ"
name = "OP"
rewrite = true
rewrite_source = "OP $"
rewrite_target = "MODE $1 SET +o $me"
rewrite_description = "Give yourself operator status on a channel"
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::parse_config_str;
	use std::path::Path;

	#[test]
	fn test_template_parses_into_rules() {
		let config = parse_config_str(INIT_TEMPLATE, Path::new("rewrite.toml")).unwrap();
		let specs = config.rule_specs();

		assert_eq!(specs.len(), 2);
		assert_eq!(specs[0].alias_of(), "IDENTIFY");
		assert!(config.skipped_rewrites().is_empty());
	}
}
