use std::path::PathBuf;

/// Library-level structured errors for cmd-rewrite.
///
/// Only configuration handling can fail. Matching, expansion and registry
/// lookups degrade to "no result" instead of erroring.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using RewriteError.
pub type Result<T> = std::result::Result<T, RewriteError>;
