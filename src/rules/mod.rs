//! Rule matching and rewriting for cmd-rewrite.
//!
//! This module handles:
//! - The rewrite rule data model
//! - Token matching against source patterns (with `$` wildcards)
//! - Target template expansion (`$n`, `$n-`, `$n-m`, `$me`)
//! - The shared, reloadable rule registry

pub mod expander;
pub mod matcher;
pub mod registry;
pub mod spec;

pub use expander::{Directive, expand};
pub use matcher::{matches, names_command};
pub use registry::{RuleRegistry, RuleSet};
pub use spec::RuleSpec;
