#![forbid(unsafe_code)]

//! Regex-based matcher
//!
//! This module provides TextPatternMatcher, which runs a regular expression
//! over a reference example one line at a time.

use crate::error::LintError;
use crate::rules::matcher::{MAX_EVIDENCE, MatchEvidence, MatchOutcome, PatternMatcher};
use crate::types::RuleKind;
use regex::{Captures, Regex};

/// A matcher for `Regex` rules
///
/// The pattern is compiled once on construction. A compile failure is kept
/// rather than returned so that both validation and execution can report it.
pub struct TextPatternMatcher {
    source: String,
    compiled: Result<Regex, regex::Error>,
}

impl std::fmt::Debug for TextPatternMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextPatternMatcher")
            .field("source", &self.source)
            .field("compiled", &self.compiled.is_ok())
            .finish()
    }
}

impl TextPatternMatcher {
    pub fn new(pattern: &str) -> Self {
        Self {
            source: pattern.to_string(),
            compiled: Regex::new(pattern),
        }
    }
}

/// The value recorded for one occurrence
///
/// Without groups this is the whole match. With one group it is that group's
/// text (empty when the group did not take part). With several groups it is
/// the groups rendered as a tuple of quoted strings, `('a', 'b')`.
fn captured_value(caps: &Captures<'_>, groups: usize) -> String {
    let group_text = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    match groups {
        0 => group_text(0).to_string(),
        1 => group_text(1).to_string(),
        n => {
            let parts: Vec<String> = (1..=n).map(|i| quoted(group_text(i))).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Quote one tuple element
///
/// Single quotes unless the text contains a single quote and no double quote.
fn quoted(text: &str) -> String {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

impl PatternMatcher for TextPatternMatcher {
    fn kind(&self) -> RuleKind {
        RuleKind::Pattern
    }

    fn validate(&self) -> Vec<LintError> {
        match &self.compiled {
            Ok(_) => Vec::new(),
            Err(e) => vec![LintError::PatternCompile(e.to_string())],
        }
    }

    fn execute(&self, reference: &str) -> MatchOutcome {
        let regex = match &self.compiled {
            Ok(regex) => regex,
            Err(e) => return MatchOutcome::failed(LintError::PatternApply(e.to_string())),
        };

        // A zero-byte reference never counts as matched, even for patterns
        // that accept the empty string.
        if reference.is_empty() {
            return MatchOutcome::failed(LintError::NoMatch);
        }

        let groups = regex.captures_len() - 1;
        let mut evidence = Vec::new();

        'lines: for (idx, line) in reference.split('\n').enumerate() {
            let line_number = u32::try_from(idx + 1).unwrap_or(u32::MAX);
            for caps in regex.captures_iter(line) {
                evidence.push(MatchEvidence {
                    line: line_number,
                    content: line.trim().to_string(),
                    matched: captured_value(&caps, groups),
                });
                if evidence.len() == MAX_EVIDENCE {
                    break 'lines;
                }
            }
        }

        if evidence.is_empty() {
            MatchOutcome::failed(LintError::NoMatch)
        } else {
            MatchOutcome::found(evidence)
        }
    }
}
