//! Configuration loading and parsing for cmd-rewrite.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config file discovery
//! - Turning `[[command]]` blocks into rewrite rules

pub mod cascade;
pub mod parser;
pub mod template;
pub mod types;

pub use cascade::{
	LOCAL_CONFIG_NAME, load_config, load_registry, reload_registry, resolve_config_path,
	user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use template::INIT_TEMPLATE;
pub use types::{CommandBlock, Config, LoadedConfig, SkipReason};
