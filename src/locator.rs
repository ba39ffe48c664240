#![forbid(unsafe_code)]

//! Reference example location by naming convention
//!
//! A rule at `<lang>/.../<dir>/<file>.yaml` is paired with the example
//! `<dir>/<examples_dir>/<rule_id><ext>`, where `<lang>` is the first directory
//! segment naming a registered language and `<ext>` is that language's
//! extension. This module is the only place that convention is encoded. It
//! builds paths only; whether the example exists is for the caller to check.

use crate::rules::RuleRecord;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Default name of the reference example subdirectory
pub const DEFAULT_EXAMPLES_DIR: &str = "snippets";

const DEFAULT_LANGUAGES: [(&str, &str); 10] = [
    ("c", ".c"),
    ("cpp", ".cpp"),
    ("java", ".java"),
    ("py", ".py"),
    ("go", ".go"),
    ("js", ".js"),
    ("php", ".php"),
    ("ruby", ".rb"),
    ("rust", ".rs"),
    ("swift", ".swift"),
];

/// Mapping from language directory tag to reference file extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRegistry {
    extensions: BTreeMap<String, String>,
}

impl LanguageRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            extensions: BTreeMap::new(),
        }
    }

    /// Registers or replaces a language tag
    pub fn insert(&mut self, tag: impl Into<String>, extension: impl Into<String>) {
        self.extensions.insert(tag.into(), extension.into());
    }

    /// Returns the extension (with leading dot) for a tag
    pub fn extension(&self, tag: &str) -> Option<&str> {
        self.extensions.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Iterates over `(tag, extension)` pairs in tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extensions
            .iter()
            .map(|(tag, ext)| (tag.as_str(), ext.as_str()))
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for (tag, ext) in DEFAULT_LANGUAGES {
            registry.insert(tag, ext);
        }
        registry
    }
}

/// Where a rule's reference example is expected to live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLocation {
    pub path: PathBuf,
    /// The language tag taken from the rule's path
    pub language: String,
}

/// Derives reference example paths from rule file paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceLocator {
    registry: LanguageRegistry,
    examples_dir: String,
}

impl ReferenceLocator {
    pub fn new(registry: LanguageRegistry, examples_dir: impl Into<String>) -> Self {
        Self {
            registry,
            examples_dir: examples_dir.into(),
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn examples_dir(&self) -> &str {
        &self.examples_dir
    }

    /// Returns the first directory segment of `rule_path` that is a registered tag
    pub fn language_of<'p>(&self, rule_path: &'p Path) -> Option<&'p str> {
        rule_path
            .parent()?
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .find(|segment| self.registry.extension(segment).is_some())
    }

    /// Computes the expected reference example for a rule
    ///
    /// Returns `None` when no directory segment of `rule_path` names a
    /// registered language.
    pub fn locate(&self, rule_path: &Path, record: &RuleRecord) -> Option<ReferenceLocation> {
        self.locate_identifier(rule_path, &record.identifier)
    }

    /// Same as [`locate`](Self::locate), for a bare identifier
    pub fn locate_identifier(&self, rule_path: &Path, identifier: &str) -> Option<ReferenceLocation> {
        let language = self.language_of(rule_path)?;
        let extension = self.registry.extension(language)?;

        let rule_dir = rule_path.parent().unwrap_or_else(|| Path::new(""));
        let path = rule_dir
            .join(&self.examples_dir)
            .join(format!("{}{}", identifier, extension));

        Some(ReferenceLocation {
            path,
            language: language.to_string(),
        })
    }
}

impl Default for ReferenceLocator {
    fn default() -> Self {
        Self::new(LanguageRegistry::default(), DEFAULT_EXAMPLES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleKind;

    fn record(identifier: &str) -> RuleRecord {
        RuleRecord {
            identifier: identifier.to_string(),
            kind: RuleKind::Pattern,
            pattern: "goto".to_string(),
            author: "a".to_string(),
            description: "d".to_string(),
        }
    }

    #[test]
    fn test_default_registry_has_ten_languages() {
        let registry = LanguageRegistry::default();
        assert_eq!(registry.len(), 10);
        assert_eq!(registry.extension("ruby"), Some(".rb"));
        assert_eq!(registry.extension("rust"), Some(".rs"));
        assert_eq!(registry.extension("py"), Some(".py"));
        assert_eq!(registry.extension("python"), None);
    }

    #[test]
    fn test_locate_c_rule() {
        let locator = ReferenceLocator::default();
        let location = locator
            .locate(Path::new("c/lints/goto_lint.yaml"), &record("goto_lint"))
            .unwrap();
        assert_eq!(location.path, PathBuf::from("c/lints/snippets/goto_lint.c"));
        assert_eq!(location.language, "c");
    }

    #[test]
    fn test_locate_uses_identifier_not_file_name() {
        let locator = ReferenceLocator::default();
        let location = locator
            .locate(Path::new("ruby/security/rules.yaml"), &record("no-eval"))
            .unwrap();
        assert_eq!(
            location.path,
            PathBuf::from("ruby/security/snippets/no-eval.rb")
        );
    }

    #[test]
    fn test_locate_first_matching_segment_wins() {
        let locator = ReferenceLocator::default();
        let location = locator
            .locate(Path::new("go/vendored/c/rule.yaml"), &record("r"))
            .unwrap();
        assert_eq!(location.language, "go");
        assert_eq!(location.path, PathBuf::from("go/vendored/c/snippets/r.go"));
    }

    #[test]
    fn test_locate_ignores_file_name_segment() {
        let locator = ReferenceLocator::default();
        assert!(locator.locate(Path::new("misc/c"), &record("r")).is_none());
    }

    #[test]
    fn test_locate_unknown_language() {
        let locator = ReferenceLocator::default();
        assert!(
            locator
                .locate(Path::new("kotlin/lints/rule.yaml"), &record("r"))
                .is_none()
        );
        assert!(locator.locate(Path::new("rule.yaml"), &record("r")).is_none());
    }

    #[test]
    fn test_locate_with_injected_registry() {
        let mut registry = LanguageRegistry::new();
        registry.insert("kotlin", ".kt");
        let locator = ReferenceLocator::new(registry, "examples");

        let location = locator
            .locate(Path::new("kotlin/lints/rule.yaml"), &record("no-bang"))
            .unwrap();
        assert_eq!(
            location.path,
            PathBuf::from("kotlin/lints/examples/no-bang.kt")
        );
        assert!(locator.locate(Path::new("c/lints/rule.yaml"), &record("r")).is_none());
    }

    #[test]
    fn test_locate_absolute_path() {
        let locator = ReferenceLocator::default();
        let location = locator
            .locate(Path::new("/corpus/java/style/rule.yaml"), &record("r"))
            .unwrap();
        assert_eq!(
            location.path,
            PathBuf::from("/corpus/java/style/snippets/r.java")
        );
    }
}
