#![forbid(unsafe_code)]

//! Rule documents and the structural validator
//!
//! A rule file is first decoded into a loosely-typed [`RuleDocument`] (any YAML
//! mapping). [`validate_record`] then checks the mandatory fields and produces a
//! typed [`RuleRecord`]. Decode failures and validation failures stay distinct:
//! the former is a single [`LintError::Decode`], the latter an accumulated list.

use crate::error::LintError;
use crate::types::RuleKind;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

pub const FIELD_RULE_ID: &str = "rule_id";
pub const FIELD_RULE_TYPE: &str = "rule_type";
pub const FIELD_RULE: &str = "rule";
pub const FIELD_AUTHOR: &str = "author";
pub const FIELD_DESCRIPTION: &str = "description";

/// Keys every rule document must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 5] = [
    FIELD_RULE_ID,
    FIELD_RULE_TYPE,
    FIELD_RULE,
    FIELD_AUTHOR,
    FIELD_DESCRIPTION,
];

/// A decoded but unvalidated rule document
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDocument {
    fields: Mapping,
}

impl RuleDocument {
    /// Decode a rule document from YAML text
    ///
    /// # Errors
    ///
    /// Returns `LintError::Decode` if the text is not valid YAML or its root is
    /// not a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, LintError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| LintError::Decode(format!("YAML parsing error: {}", e)))?;

        match value {
            Value::Mapping(fields) => Ok(Self { fields }),
            other => Err(LintError::Decode(format!(
                "YAML parsing error: expected a mapping at the document root, found {}",
                describe(&other)
            ))),
        }
    }

    /// Read and decode a rule document from disk
    ///
    /// # Errors
    ///
    /// Returns `LintError::Decode` if the file cannot be read or decoded.
    pub fn from_path(path: &Path) -> Result<Self, LintError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LintError::Decode(format!(
                "Failed to read rule file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content)
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

/// A structurally valid rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRecord {
    /// Unique name, also the stem of the reference example file
    pub identifier: String,
    pub kind: RuleKind,
    pub pattern: String,
    pub author: String,
    pub description: String,
}

/// Check a decoded document and build a typed record from it
///
/// Every violation is collected before returning, so a document missing two
/// fields and carrying an unknown `rule_type` reports all three.
///
/// # Errors
///
/// Returns the accumulated structural errors when any check fails.
pub fn validate_record(doc: &RuleDocument) -> Result<RuleRecord, Vec<LintError>> {
    let mut errors = Vec::new();

    for field in REQUIRED_FIELDS {
        if !doc.contains(field) {
            errors.push(LintError::MissingField(field));
        }
    }

    let kind = doc.get(FIELD_RULE_TYPE).and_then(|value| {
        let parsed = match value {
            Value::String(s) => RuleKind::parse(s),
            _ => None,
        };
        if parsed.is_none() {
            errors.push(LintError::InvalidKind(render(value)));
        }
        parsed
    });

    let pattern = doc.get(FIELD_RULE).and_then(|value| {
        let text = scalar_field(FIELD_RULE, value, &mut errors)?;
        if text.is_empty() {
            errors.push(LintError::EmptyPattern);
        }
        Some(text)
    });

    let identifier = doc
        .get(FIELD_RULE_ID)
        .and_then(|value| scalar_field(FIELD_RULE_ID, value, &mut errors));
    let author = doc
        .get(FIELD_AUTHOR)
        .and_then(|value| scalar_field(FIELD_AUTHOR, value, &mut errors));
    let description = doc
        .get(FIELD_DESCRIPTION)
        .and_then(|value| scalar_field(FIELD_DESCRIPTION, value, &mut errors));

    match (identifier, kind, pattern, author, description) {
        (Some(identifier), Some(kind), Some(pattern), Some(author), Some(description))
            if errors.is_empty() =>
        {
            Ok(RuleRecord {
                identifier,
                kind,
                pattern,
                author,
                description,
            })
        }
        _ => Err(errors),
    }
}

/// Read a field as text, recording an error for lists and mappings
fn scalar_field(field: &'static str, value: &Value, errors: &mut Vec<LintError>) -> Option<String> {
    let text = scalar_text(value);
    if text.is_none() {
        errors.push(LintError::InvalidFieldValue {
            field,
            found: describe(value).to_string(),
        });
    }
    text
}

/// Scalars read as their textual form; null reads as the empty string
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Sequence(_) | Value::Mapping(_) => describe(value).to_string(),
        other => scalar_text(other).unwrap_or_default(),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
rule_id: no-eval
rule_type: Regex
rule: 'eval\('
author: x
description: flags eval
"#;

    #[test]
    fn test_from_yaml_valid() {
        let doc = RuleDocument::from_yaml(VALID).unwrap();
        let record = validate_record(&doc).unwrap();
        assert_eq!(record.identifier, "no-eval");
        assert_eq!(record.kind, RuleKind::Pattern);
        assert_eq!(record.pattern, "eval\\(");
        assert_eq!(record.author, "x");
        assert_eq!(record.description, "flags eval");
    }

    #[test]
    fn test_from_yaml_query_kind() {
        let doc = RuleDocument::from_yaml(
            "rule_id: q\nrule_type: Query\nrule: 'call(eval)'\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        let record = validate_record(&doc).unwrap();
        assert_eq!(record.kind, RuleKind::StructuredQuery);
    }

    #[test]
    fn test_from_yaml_syntax_error() {
        let err = RuleDocument::from_yaml("rule_id: [unclosed\n").unwrap_err();
        assert!(matches!(err, LintError::Decode(_)));
        assert!(err.to_string().starts_with("YAML parsing error"));
    }

    #[test]
    fn test_from_yaml_non_mapping_root() {
        let err = RuleDocument::from_yaml("- a\n- b\n").unwrap_err();
        assert!(err.to_string().contains("found a sequence"));

        let err = RuleDocument::from_yaml("").unwrap_err();
        assert!(matches!(err, LintError::Decode(_)));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = RuleDocument::from_path(Path::new("/nonexistent/rule.yaml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read rule file"));
    }

    #[test]
    fn test_missing_fields_accumulate() {
        let doc = RuleDocument::from_yaml("rule_id: a\nrule: x\n").unwrap();
        let errors = validate_record(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![
                LintError::MissingField("rule_type"),
                LintError::MissingField("author"),
                LintError::MissingField("description"),
            ]
        );
    }

    #[test]
    fn test_invalid_kind_names_value() {
        let doc = RuleDocument::from_yaml(
            "rule_id: a\nrule_type: Glob\nrule: x\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        let errors = validate_record(&doc).unwrap_err();
        assert_eq!(errors, vec![LintError::InvalidKind("Glob".to_string())]);
    }

    #[test]
    fn test_kind_is_case_sensitive() {
        let doc = RuleDocument::from_yaml(
            "rule_id: a\nrule_type: regex\nrule: x\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        assert!(validate_record(&doc).is_err());
    }

    #[test]
    fn test_empty_pattern() {
        let doc = RuleDocument::from_yaml(
            "rule_id: a\nrule_type: Regex\nrule: ''\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        assert_eq!(
            validate_record(&doc).unwrap_err(),
            vec![LintError::EmptyPattern]
        );

        let doc = RuleDocument::from_yaml(
            "rule_id: a\nrule_type: Regex\nrule:\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        assert_eq!(
            validate_record(&doc).unwrap_err(),
            vec![LintError::EmptyPattern]
        );
    }

    #[test]
    fn test_missing_and_invalid_together() {
        let doc = RuleDocument::from_yaml("rule_type: Grep\nrule: ''\n").unwrap();
        let errors = validate_record(&doc).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&LintError::InvalidKind("Grep".to_string())));
        assert!(errors.contains(&LintError::EmptyPattern));
    }

    #[test]
    fn test_sequence_field_rejected() {
        let doc = RuleDocument::from_yaml(
            "rule_id: a\nrule_type: Regex\nrule: x\nauthor: [a, b]\ndescription: d\n",
        )
        .unwrap();
        let errors = validate_record(&doc).unwrap_err();
        assert_eq!(
            errors,
            vec![LintError::InvalidFieldValue {
                field: "author",
                found: "a sequence".to_string(),
            }]
        );
    }

    #[test]
    fn test_numeric_scalars_read_as_text() {
        let doc = RuleDocument::from_yaml(
            "rule_id: 42\nrule_type: Regex\nrule: 123\nauthor: a\ndescription: d\n",
        )
        .unwrap();
        let record = validate_record(&doc).unwrap();
        assert_eq!(record.identifier, "42");
        assert_eq!(record.pattern, "123");
    }
}
