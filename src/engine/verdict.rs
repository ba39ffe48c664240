#![forbid(unsafe_code)]

//! Per-file verdicts

use crate::error::{LintError, LintWarning};
use crate::rules::MatchEvidence;
use crate::types::Disposition;

/// Everything recorded while linting one rule file
///
/// The disposition is always derived from the buckets, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub errors: Vec<LintError>,
    pub warnings: Vec<LintWarning>,
    pub evidence: Vec<MatchEvidence>,
}

impl Verdict {
    /// A verdict holding only the given errors
    pub fn from_errors(errors: Vec<LintError>) -> Self {
        Self {
            errors,
            ..Self::default()
        }
    }

    /// ERROR if any errors, WARNING if only warnings, PASS otherwise
    pub fn disposition(&self) -> Disposition {
        if !self.errors.is_empty() {
            Disposition::Error
        } else if !self.warnings.is_empty() {
            Disposition::Warning
        } else {
            Disposition::Pass
        }
    }

    pub fn is_error(&self) -> bool {
        self.disposition() == Disposition::Error
    }
}
