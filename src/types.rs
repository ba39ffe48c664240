#![forbid(unsafe_code)]

//! Core domain types for rulecheck
//!
//! This module defines the small value types shared by the rule, locator,
//! engine and output layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pattern language a rule is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Line-oriented regular expression (`rule_type: Regex`)
    #[serde(rename = "Regex")]
    Pattern,
    /// Structured query over a language-aware model (`rule_type: Query`)
    #[serde(rename = "Query")]
    StructuredQuery,
}

impl RuleKind {
    /// Parses the literal `rule_type` value used in rule documents
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Regex" => Some(RuleKind::Pattern),
            "Query" => Some(RuleKind::StructuredQuery),
            _ => None,
        }
    }

    /// Returns the literal `rule_type` value for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Pattern => "Regex",
            RuleKind::StructuredQuery => "Query",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of linting one rule file, derived from its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Pass,
    Warning,
    Error,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Pass => "pass",
            Disposition::Warning => "warning",
            Disposition::Error => "error",
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
