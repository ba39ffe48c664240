#![forbid(unsafe_code)]

//! The per-file verdict state machine
//!
//! One rule file moves through
//! `Decoded -> StructurallyValidated -> ContentValidated -> ReferenceLocated -> Matched`
//! and always ends with a [`Verdict`]. Short-circuiting is deliberately uneven:
//!
//! - a decode failure or any structural error ends the run for that file;
//! - pattern errors are recorded but location and matching still happen;
//! - a missing reference ends the run, since there is nothing to match;
//! - matching errors are errors, while a clean run with no evidence is only a
//!   warning.

use crate::engine::verdict::Verdict;
use crate::error::{LintError, LintWarning};
use crate::locator::ReferenceLocator;
use crate::rules::{PatternMatcher, RuleDocument, RuleRecord, matcher_for, validate_record};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Lints individual rule files
#[derive(Debug, Clone, Default)]
pub struct RuleLinter {
    locator: ReferenceLocator,
}

impl RuleLinter {
    pub fn new(locator: ReferenceLocator) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &ReferenceLocator {
        &self.locator
    }

    /// Lint the rule file at `root/relative`
    ///
    /// `relative` drives language detection and is how reference paths are
    /// reported. Pass an empty `root` to lint a path as given.
    pub fn lint_file(&self, root: &Path, relative: &Path) -> Verdict {
        match RuleDocument::from_path(&root.join(relative)) {
            Ok(doc) => self.lint_document(root, relative, &doc),
            Err(e) => {
                debug!(file = %relative.display(), "decode failed");
                Verdict::from_errors(vec![e])
            }
        }
    }

    /// Lint rule document text as if it lived at `root/relative`
    pub fn lint_source(&self, root: &Path, relative: &Path, content: &str) -> Verdict {
        match RuleDocument::from_yaml(content) {
            Ok(doc) => self.lint_document(root, relative, &doc),
            Err(e) => Verdict::from_errors(vec![e]),
        }
    }

    /// Lint an already decoded document
    pub fn lint_document(&self, root: &Path, relative: &Path, doc: &RuleDocument) -> Verdict {
        let record = match validate_record(doc) {
            Ok(record) => record,
            Err(errors) => {
                debug!(file = %relative.display(), count = errors.len(), "structural errors");
                return Verdict::from_errors(errors);
            }
        };

        let matcher = matcher_for(record.kind, &record.pattern);
        self.lint_record_with(root, relative, &record, matcher.as_ref())
    }

    /// Run the stages after structural validation with the given matcher
    ///
    /// `lint_document` uses the matcher for the record's kind. Any other
    /// [`PatternMatcher`] can be supplied here without changing the stages.
    pub fn lint_record_with(
        &self,
        root: &Path,
        relative: &Path,
        record: &RuleRecord,
        matcher: &dyn PatternMatcher,
    ) -> Verdict {
        let mut verdict = Verdict::default();

        // Pattern errors do not stop location or matching.
        verdict.errors.extend(matcher.validate());
        debug!(
            file = %relative.display(),
            rule = %record.identifier,
            pattern_errors = verdict.errors.len(),
            "content validated"
        );

        let Some(location) = self.locator.locate(relative, record) else {
            verdict.errors.push(LintError::LanguageUnresolved);
            return verdict;
        };

        let reference_path = root.join(&location.path);
        if !reference_path.is_file() {
            verdict
                .errors
                .push(LintError::ReferenceMissing(location.path));
            return verdict;
        }
        debug!(
            file = %relative.display(),
            reference = %location.path.display(),
            language = %location.language,
            "reference located"
        );

        let reference = match fs::read_to_string(&reference_path) {
            Ok(text) => text,
            Err(e) => {
                verdict.errors.push(LintError::ReferenceRead {
                    path: location.path,
                    message: e.to_string(),
                });
                return verdict;
            }
        };

        let outcome = matcher.execute(&reference);
        debug!(
            file = %relative.display(),
            matched = outcome.matched,
            evidence = outcome.evidence.len(),
            "matched"
        );

        if !outcome.errors.is_empty() {
            verdict.errors.extend(outcome.errors);
        } else if outcome.matched {
            verdict.evidence.extend(outcome.evidence);
        } else {
            verdict.warnings.push(LintWarning::NoEvidence);
        }

        verdict
    }
}
