#![forbid(unsafe_code)]

//! Rule listing formatters
//!
//! This module provides formatters for the `rulecheck list` command, which
//! shows each discovered rule file with its identifier, kind and the
//! reference example it is paired with. It supports both human-readable and
//! JSONL output formats.

use crate::types::RuleKind;
use serde::Serialize;

/// Whether a rule file is ready to be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// Valid rule with an existing reference example
    Ready,
    /// Valid rule, but its reference example is missing
    MissingReference,
    /// Valid rule under a directory with no registered language
    UnknownLanguage,
    /// The rule document failed to decode or validate
    Invalid,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Ready => "ready",
            ListingStatus::MissingReference => "missing_reference",
            ListingStatus::UnknownLanguage => "unknown_language",
            ListingStatus::Invalid => "invalid",
        }
    }
}

/// Listing information for a single rule file
#[derive(Debug, Clone)]
pub struct RuleListing {
    pub path: String,
    pub identifier: Option<String>,
    pub kind: Option<RuleKind>,
    pub language: Option<String>,
    pub reference: Option<String>,
    pub status: ListingStatus,
}

/// Human-readable formatter for rule listings
pub struct RuleListingHumanFormatter;

impl RuleListingHumanFormatter {
    pub fn new() -> Self {
        RuleListingHumanFormatter
    }

    /// Format a list of rule listings for human consumption
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Rule files ({}):\n", listings.len()));
        output.push('\n');

        for listing in listings {
            output.push_str(&format!("{}\n", listing.path));
            if let (Some(identifier), Some(kind)) = (&listing.identifier, listing.kind) {
                output.push_str(&format!("  Rule: {} ({})\n", identifier, kind));
            }
            if let Some(language) = &listing.language {
                output.push_str(&format!("  Language: {}\n", language));
            }
            if let Some(reference) = &listing.reference {
                output.push_str(&format!("  Reference: {}\n", reference));
            }

            let (icon, status_text) = match listing.status {
                ListingStatus::Ready => ("✓", "ready"),
                ListingStatus::MissingReference => ("✗", "reference example missing"),
                ListingStatus::UnknownLanguage => ("✗", "no language directory"),
                ListingStatus::Invalid => ("✗", "invalid rule document"),
            };

            output.push_str(&format!("  Status: {} {}\n", icon, status_text));
            output.push('\n');
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, listings: &[RuleListing]) {
        print!("{}", self.format(listings));
    }
}

impl Default for RuleListingHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL output structure for a rule listing
#[derive(Debug, Serialize)]
struct JsonlRuleListing<'a> {
    path: &'a str,
    rule_id: Option<&'a str>,
    rule_type: Option<&'static str>,
    language: Option<&'a str>,
    reference: Option<&'a str>,
    status: &'static str,
}

/// JSONL formatter for rule listings
pub struct RuleListingJsonlFormatter;

impl RuleListingJsonlFormatter {
    pub fn new() -> Self {
        RuleListingJsonlFormatter
    }

    /// Format a list of rule listings as JSONL
    ///
    /// Returns a string with one JSON object per line for each rule file.
    pub fn format(&self, listings: &[RuleListing]) -> String {
        let mut output = String::new();

        for listing in listings {
            let record = JsonlRuleListing {
                path: &listing.path,
                rule_id: listing.identifier.as_deref(),
                rule_type: listing.kind.map(|kind| kind.as_str()),
                language: listing.language.as_deref(),
                reference: listing.reference.as_deref(),
                status: listing.status.as_str(),
            };

            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, listings: &[RuleListing]) {
        print!("{}", self.format(listings));
    }
}

impl Default for RuleListingJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
