//! Error types for rulecheck
//!
//! Two families live here. [`LintError`] and [`LintWarning`] are per-file
//! findings: they are attached to a rule file's verdict and never abort a run.
//! [`ConfigError`] and [`CheckError`] are run-level faults that stop the whole
//! corpus check.

use std::path::PathBuf;

/// A blocking finding recorded against one rule file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    /// The rule document could not be read or decoded
    #[error("{0}")]
    Decode(String),

    /// A required field is absent from the rule document
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// `rule_type` is not one of the recognized kinds
    #[error("Invalid rule_type: {0}. Must be 'Regex' or 'Query'")]
    InvalidKind(String),

    /// A field holds a value that cannot be read as text (a list or mapping)
    #[error("Invalid value for {field}: expected a scalar, found {found}")]
    InvalidFieldValue { field: &'static str, found: String },

    /// `rule` is present but empty
    #[error("Rule content cannot be empty")]
    EmptyPattern,

    /// The regex pattern does not compile
    #[error("Invalid regex pattern: {0}")]
    PatternCompile(String),

    /// The structured query is blank
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// No ancestor directory names a recognized language
    #[error("Could not determine reference example information from directory structure")]
    LanguageUnresolved,

    /// The derived reference example does not exist
    #[error("Reference example does not exist: {}", .0.display())]
    ReferenceMissing(PathBuf),

    /// The reference example exists but could not be read
    #[error("Failed to read reference example {}: {message}", .path.display())]
    ReferenceRead { path: PathBuf, message: String },

    /// The pattern could not be applied to the reference example
    #[error("Error applying regex to reference example: {0}")]
    PatternApply(String),

    /// The pattern ran but found nothing in the reference example
    #[error("Rule does not match any content in the reference example")]
    NoMatch,

    /// Matching is not available for this rule kind
    #[error("Query validation against reference examples is not implemented yet")]
    Unimplemented,
}

impl LintError {
    /// Coarse category of the finding, used in machine-readable output
    pub fn category(&self) -> &'static str {
        match self {
            LintError::Decode(_) => "decode",
            LintError::MissingField(_)
            | LintError::InvalidKind(_)
            | LintError::InvalidFieldValue { .. }
            | LintError::EmptyPattern => "structural",
            LintError::PatternCompile(_) | LintError::EmptyQuery => "pattern_compile",
            LintError::LanguageUnresolved
            | LintError::ReferenceMissing(_)
            | LintError::ReferenceRead { .. } => "reference_missing",
            LintError::PatternApply(_) | LintError::NoMatch => "no_match",
            LintError::Unimplemented => "unimplemented",
        }
    }
}

/// A non-blocking finding recorded against one rule file
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintWarning {
    /// Matching completed cleanly but produced no evidence
    #[error("Rule does not match any content in the reference example")]
    NoEvidence,
}

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantic validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Run-level errors that abort a corpus check
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Corpus walk error
    #[error("File walker error: {0}")]
    Walk(#[from] crate::engine::file_walker::FileWalkerError),

    /// The corpus root is missing or not a directory
    #[error("Corpus root is not readable: {}", .0.display())]
    RootUnreadable(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
