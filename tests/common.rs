//! Test utilities for rulecheck integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// A throwaway rule corpus on disk
pub struct Corpus {
    pub dir: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        Corpus {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }
}

/// A complete pattern rule document
pub fn regex_rule(identifier: &str, pattern: &str) -> String {
    format!(
        "rule_id: {}\nrule_type: Regex\nrule: '{}'\nauthor: Security Team\ndescription: Detects {}\n",
        identifier, pattern, identifier
    )
}

/// A complete structured query rule document
pub fn query_rule(identifier: &str, query: &str) -> String {
    format!(
        "rule_id: {}\nrule_type: Query\nrule: '{}'\nauthor: Security Team\ndescription: Detects {}\n",
        identifier, query, identifier
    )
}

/// The `no_eval` corpus: one valid Python rule and its reference example
pub fn no_eval_corpus() -> Corpus {
    let corpus = Corpus::new();
    corpus
        .write(
            "py/security/no_eval.yaml",
            &regex_rule("no_eval", r"eval\("),
        )
        .write(
            "py/security/snippets/no_eval.py",
            "import os\n\nresult = eval(user_input)\nprint(result)\n",
        );
    corpus
}
