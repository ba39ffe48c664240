//! Rule file discovery
//!
//! Walks a corpus root and yields every rule document, skipping anything under
//! a reference-example directory. Unlike a source-tree walk, nothing is hidden
//! by `.gitignore` or dot-file rules: the corpus is read exactly as laid out on
//! disk, in file-name order.

use crate::config::CorpusConfig;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File sits under a skipped directory (e.g. `snippets/`)
    InSkippedDirectory,
    /// File extension is not a rule document extension
    NotARuleDocument,
    /// Entry is not a regular file
    NotAFile,
}

/// Result of file walking - either a rule file or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    File(RuleFile),
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered rule document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    /// Path as walked (root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the corpus root
    pub relative: PathBuf,
}

/// Iterator source over rule files under one root
pub struct FileWalker {
    root: PathBuf,
    walker: ignore::Walk,
    extensions: Vec<String>,
    skip_set: GlobSet,
}

impl FileWalker {
    /// Creates a new FileWalker for `root` using the corpus layout settings
    pub fn new(root: &Path, corpus: &CorpusConfig) -> Result<Self, FileWalkerError> {
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        // Reference example directories are never walked for rules, even when
        // `examples_dir` is not listed in `skip_dirs`.
        let mut patterns: Vec<String> = corpus
            .skip_dirs
            .iter()
            .chain(std::iter::once(&corpus.examples_dir))
            .map(|dir| format!("**/{}/**", globset::escape(dir)))
            .collect();
        patterns.push("**/.git/**".to_string());

        Ok(Self {
            root: root.to_path_buf(),
            walker,
            extensions: corpus.extensions.clone(),
            skip_set: Self::build_globset(&patterns)?,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[String]) -> Result<GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the corpus and returns an iterator over rule files
    pub fn walk(self) -> impl Iterator<Item = Result<RuleFile, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the corpus and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let root = self.root;
        let extensions = self.extensions;
        let skip_set = self.skip_set;

        self.walker.filter_map(move |result| {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => return Some(Err(FileWalkerError::Walk(e))),
            };

            // The root itself is reported as a directory entry at depth 0
            if entry.depth() == 0 {
                return None;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&root).unwrap_or(path).to_path_buf();

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return Some(Ok(WalkResult::Skipped {
                    path: relative,
                    reason: SkipReason::NotAFile,
                }));
            }

            if skip_set.is_match(&relative) {
                return Some(Ok(WalkResult::Skipped {
                    path: relative,
                    reason: SkipReason::InSkippedDirectory,
                }));
            }

            let is_rule_document = relative
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|e| e == ext));
            if !is_rule_document {
                return Some(Ok(WalkResult::Skipped {
                    path: relative,
                    reason: SkipReason::NotARuleDocument,
                }));
            }

            Some(Ok(WalkResult::File(RuleFile {
                path: path.to_path_buf(),
                relative,
            })))
        })
    }
}

impl std::fmt::Debug for FileWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWalker")
            .field("root", &self.root)
            .field("extensions", &self.extensions)
            .field("skip_set", &"<GlobSet>")
            .finish()
    }
}
