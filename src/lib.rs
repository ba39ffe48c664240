#![forbid(unsafe_code)]

//! rulecheck: Lint a corpus of detection rules against their reference examples
//!
//! Every rule document declares a pattern and is paired, by naming convention,
//! with a source file that demonstrates the code the rule should catch. The
//! linter checks each document's structure, compiles its pattern and proves
//! that the pattern matches its own reference example.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod locator;
pub mod output;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{CheckError, ConfigError, LintError, LintWarning};

// Re-export core domain types for convenient access
pub use types::{Disposition, RuleKind};
