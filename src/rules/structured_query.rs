#![forbid(unsafe_code)]

//! Structured-query matcher
//!
//! `Query` rules are written in a language-aware query dialect that has no
//! grammar or evaluator yet. Validation is limited to rejecting blank queries,
//! and execution always reports [`LintError::Unimplemented`]. Callers should
//! read that as "validation incomplete" rather than "rule is broken".

use crate::error::LintError;
use crate::rules::matcher::{MatchOutcome, PatternMatcher};
use crate::types::RuleKind;

/// A matcher for `Query` rules
#[derive(Debug, Clone)]
pub struct StructuredQueryMatcher {
    source: String,
}

impl StructuredQueryMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            source: query.to_string(),
        }
    }
}

impl PatternMatcher for StructuredQueryMatcher {
    fn kind(&self) -> RuleKind {
        RuleKind::StructuredQuery
    }

    fn validate(&self) -> Vec<LintError> {
        // Only blankness is checked until the query grammar exists.
        if self.source.trim().is_empty() {
            vec![LintError::EmptyQuery]
        } else {
            Vec::new()
        }
    }

    fn execute(&self, _reference: &str) -> MatchOutcome {
        MatchOutcome::failed(LintError::Unimplemented)
    }
}
