use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::error::{Result, RewriteError};
use crate::rules::RuleRegistry;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_NAME: &str = "rewrite.toml";

/// File name looked up in the home directory.
pub const USER_CONFIG_NAME: &str = ".rewrite.toml";

/// Work out which config file to use.
///
/// The lookup order is:
/// 1. `explicit`, if given (it must exist)
/// 2. `rewrite.toml` in `start_dir`
/// 3. `~/.rewrite.toml`
pub fn resolve_config_path(explicit: Option<&Path>, start_dir: &Path) -> Result<PathBuf> {
	if let Some(path) = explicit {
		if path.exists() {
			return Ok(path.to_path_buf());
		}
		return Err(RewriteError::ConfigNotFound {
			path: path.to_path_buf(),
		});
	}

	let local = start_dir.join(LOCAL_CONFIG_NAME);
	if local.exists() {
		return Ok(local);
	}

	let user = user_config_path()?;
	if user.exists() {
		return Ok(user);
	}

	Err(RewriteError::ConfigNotFound { path: local })
}

/// Read and parse the config at `path`.
pub fn load_config(path: &Path) -> Result<LoadedConfig> {
	let config = parse_config_file(path)?;
	Ok(LoadedConfig {
		config,
		path: path.to_path_buf(),
	})
}

/// Build a fresh registry from the config at `path`.
pub fn load_registry(path: &Path) -> Result<RuleRegistry> {
	let loaded = load_config(path)?;
	let specs = loaded.config.rule_specs();

	tracing::debug!(path = %path.display(), rules = specs.len(), "loaded rewrite rules");
	Ok(RuleRegistry::with_rules(specs))
}

/// Re-read `path` and swap its rules into `registry`.
///
/// On error the registry keeps serving its current rules.
pub fn reload_registry(registry: &RuleRegistry, path: &Path) -> Result<u64> {
	let loaded = match load_config(path) {
		Ok(loaded) => loaded,
		Err(e) => {
			tracing::warn!(path = %path.display(), error = %e, "reload failed, keeping current rules");
			return Err(e);
		}
	};

	Ok(registry.reload(loaded.config.rule_specs()))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RewriteError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(USER_CONFIG_NAME))
}
