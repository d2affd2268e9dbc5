//! cmd-rewrite - command alias engine for services-style command dispatchers.
//!
//! This library provides the core functionality for cmd-rewrite, including:
//! - Rewrite rules with `$`-wildcard source patterns
//! - Target template expansion (`$1`, `$2-`, `$1-3`, `$me`)
//! - A reloadable, thread-safe rule registry
//! - Configuration file parsing and discovery
//! - Dispatcher glue for executing and describing aliases
//!
//! # Example
//!
//! ```no_run
//! use cmd_rewrite::config::load_registry;
//! use cmd_rewrite::rules::expand;
//! use std::path::Path;
//!
//! let registry = load_registry(Path::new("rewrite.toml")).unwrap();
//! let tokens: Vec<String> = ["id", "hunter2"].iter().map(|s| s.to_string()).collect();
//!
//! if let Some(rule) = registry.find_match("NickServ", &tokens) {
//!     println!("{}", expand(rule.target(), &tokens, "Alice"));
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod rules;

pub use error::{Result, RewriteError};
