#![forbid(unsafe_code)]

//! The pattern-matching capability shared by every rule kind
//!
//! Each [`RuleKind`] maps to one [`PatternMatcher`] implementation. The verdict
//! state machine only talks to this trait, so a grammar-backed query matcher
//! can replace the current stub without touching the linter.

use crate::error::LintError;
use crate::rules::structured_query::StructuredQueryMatcher;
use crate::rules::text_pattern::TextPatternMatcher;
use crate::types::RuleKind;
use serde::Serialize;

/// Maximum number of evidence entries kept per rule
pub const MAX_EVIDENCE: usize = 5;

/// A single located match in a reference example
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEvidence {
    /// Line number (1-indexed)
    pub line: u32,

    /// The full line, trimmed of surrounding whitespace
    pub content: String,

    /// The captured value, or the whole match when the pattern has no groups
    #[serde(rename = "match")]
    pub matched: String,
}

/// Result of running a matcher against a reference example
///
/// `matched` is true only when `evidence` is non-empty. `errors` is non-empty
/// when matching failed outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    pub evidence: Vec<MatchEvidence>,
    pub errors: Vec<LintError>,
}

impl MatchOutcome {
    /// Outcome carrying evidence, capped at [`MAX_EVIDENCE`]
    pub fn found(mut evidence: Vec<MatchEvidence>) -> Self {
        evidence.truncate(MAX_EVIDENCE);
        Self {
            matched: !evidence.is_empty(),
            evidence,
            errors: Vec::new(),
        }
    }

    /// Outcome carrying a single error
    pub fn failed(error: LintError) -> Self {
        Self {
            matched: false,
            evidence: Vec::new(),
            errors: vec![error],
        }
    }
}

/// A pattern in some rule language, able to check itself and run over text
///
/// The trait is `Send + Sync` so that rule files can be linted in parallel.
pub trait PatternMatcher: Send + Sync {
    /// The rule kind this matcher implements
    fn kind(&self) -> RuleKind;

    /// Checks that the pattern is well-formed in its own language
    ///
    /// Returns an empty vector when the pattern is valid.
    fn validate(&self) -> Vec<LintError>;

    /// Runs the pattern over the reference example text
    fn execute(&self, reference: &str) -> MatchOutcome;
}

/// Build the matcher for a rule kind and its raw pattern text
pub fn matcher_for(kind: RuleKind, pattern: &str) -> Box<dyn PatternMatcher> {
    match kind {
        RuleKind::Pattern => Box::new(TextPatternMatcher::new(pattern)),
        RuleKind::StructuredQuery => Box::new(StructuredQueryMatcher::new(pattern)),
    }
}

/// Validate a pattern in the language implied by `kind`
pub fn validate_pattern(kind: RuleKind, pattern: &str) -> Vec<LintError> {
    matcher_for(kind, pattern).validate()
}

/// Run a pattern of the given kind over reference example text
pub fn execute(kind: RuleKind, pattern: &str, reference: &str) -> MatchOutcome {
    matcher_for(kind, pattern).execute(reference)
}
