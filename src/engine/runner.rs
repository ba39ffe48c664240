#![forbid(unsafe_code)]

//! Corpus-wide execution
//!
//! The runner discovers rule files, lints each one independently with rayon,
//! and folds the verdicts into a [`CorpusReport`]. Output order is walk order
//! regardless of scheduling, so repeated runs over an unchanged corpus produce
//! identical reports.

use crate::config::Config;
use crate::engine::file_walker::{FileWalker, RuleFile};
use crate::engine::linter::RuleLinter;
use crate::engine::verdict::Verdict;
use crate::error::CheckError;
use crate::types::Disposition;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The verdict for one rule file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVerdict {
    /// Path relative to the corpus root
    pub path: PathBuf,
    pub verdict: Verdict,
}

/// Corpus-wide counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files_checked: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

/// Result of checking a whole corpus
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusReport {
    pub files: Vec<FileVerdict>,
}

impl CorpusReport {
    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            files_checked: self.files.len(),
            ..Summary::default()
        };

        for file in &self.files {
            match file.verdict.disposition() {
                Disposition::Pass => summary.passed += 1,
                Disposition::Warning => summary.warned += 1,
                Disposition::Error => summary.failed += 1,
            }
            summary.total_errors += file.verdict.errors.len();
            summary.total_warnings += file.verdict.warnings.len();
        }

        summary
    }

    /// True when any file has at least one error
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|file| file.verdict.is_error())
    }
}

/// Checks every rule file under a corpus root
#[derive(Debug, Clone)]
pub struct CorpusRunner {
    config: Config,
    linter: RuleLinter,
}

impl CorpusRunner {
    pub fn new(config: Config) -> Self {
        let linter = RuleLinter::new(config.locator());
        Self { config, linter }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn linter(&self) -> &RuleLinter {
        &self.linter
    }

    /// Discover rule files under `root` in walk order
    ///
    /// # Errors
    ///
    /// Returns `CheckError::RootUnreadable` if `root` is not a readable
    /// directory. Individual unreadable entries are logged and skipped.
    pub fn discover(&self, root: &Path) -> Result<Vec<RuleFile>, CheckError> {
        if !root.is_dir() || fs::read_dir(root).is_err() {
            return Err(CheckError::RootUnreadable(root.to_path_buf()));
        }

        let walker = FileWalker::new(root, &self.config.corpus)?;
        let mut files = Vec::new();
        for result in walker.walk() {
            match result {
                Ok(file) => files.push(file),
                Err(e) => warn!("skipping unreadable entry: {}", e),
            }
        }

        debug!(root = %root.display(), count = files.len(), "discovered rule files");
        Ok(files)
    }

    /// Lint every rule file under `root`
    pub fn run(&self, root: &Path) -> Result<CorpusReport, CheckError> {
        let files = self.discover(root)?;

        let files = files
            .par_iter()
            .map(|file| FileVerdict {
                path: file.relative.clone(),
                verdict: self.linter.lint_file(root, &file.relative),
            })
            .collect();

        Ok(CorpusReport { files })
    }
}
