#![forbid(unsafe_code)]

//! Rule documents, structural validation and pattern matchers

pub mod matcher;
pub mod record;
pub mod structured_query;
pub mod text_pattern;

// Re-export core types
pub use matcher::{
    MAX_EVIDENCE, MatchEvidence, MatchOutcome, PatternMatcher, execute, matcher_for,
    validate_pattern,
};
pub use record::{REQUIRED_FIELDS, RuleDocument, RuleRecord, validate_record};
pub use structured_query::StructuredQueryMatcher;
pub use text_pattern::TextPatternMatcher;
