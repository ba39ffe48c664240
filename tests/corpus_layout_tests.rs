//! Integration tests for corpus layout handling
//!
//! These tests verify discovery and reference location through the public API:
//! - Rule files inside reference example directories are never linted
//! - Walk order is stable
//! - rulecheck.toml overrides extensions, skip directories and languages

mod common;

use common::{Corpus, TestResult, regex_rule};
use rulecheck::config::Config;
use rulecheck::engine::CorpusRunner;
use rulecheck::engine::file_walker::FileWalker;
use rulecheck::locator::{LanguageRegistry, ReferenceLocator};
use rulecheck::{ConfigError, Disposition};
use std::path::{Path, PathBuf};

#[test]
fn test_snippet_and_example_dirs_are_not_linted() -> TestResult {
    let corpus = Corpus::new();
    corpus
        .write("java/sqli.yaml", &regex_rule("sqli", "executeQuery"))
        .write("java/snippets/sqli.java", "stmt.executeQuery(sql);\n")
        .write("java/snippets/stray.yaml", "not a rule\n")
        .write("java/examples/other.yaml", "not a rule either\n")
        .write(".git/hooks/hook.yaml", "ignored\n");

    let files: Vec<PathBuf> = FileWalker::new(corpus.root(), &Config::default().corpus)?
        .walk()
        .map(|file| file.map(|f| f.relative))
        .collect::<Result<_, _>>()?;

    assert_eq!(files, vec![PathBuf::from("java/sqli.yaml")]);
    Ok(())
}

#[test]
fn test_report_follows_walk_order() -> TestResult {
    let corpus = Corpus::new();
    for name in ["zeta", "alpha", "mid"] {
        corpus.write(&format!("go/{}.yaml", name), &regex_rule(name, "x"));
    }
    corpus.write("c/first.yaml", &regex_rule("first", "x"));

    let report = CorpusRunner::new(Config::default()).run(corpus.root())?;
    let paths: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("c/first.yaml"),
            PathBuf::from("go/alpha.yaml"),
            PathBuf::from("go/mid.yaml"),
            PathBuf::from("go/zeta.yaml"),
        ]
    );
    Ok(())
}

#[test]
fn test_config_adds_language_and_extension() -> TestResult {
    let corpus = Corpus::new();
    corpus
        .write(
            "rulecheck.toml",
            "[corpus]\nextensions = [\"yaml\", \"yml\"]\n\n[languages]\nkotlin = \".kt\"\n",
        )
        .write("kotlin/reflect.yml", &regex_rule("reflect", r"Class\.forName"))
        .write(
            "kotlin/snippets/reflect.kt",
            "val c = Class.forName(name)\n",
        );

    let config = Config::resolve(corpus.root(), None)?;
    assert_eq!(config.languages.extension("kotlin"), Some(".kt"));
    assert_eq!(config.languages.extension("py"), Some(".py"));

    let report = CorpusRunner::new(config).run(corpus.root())?;
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].verdict.disposition(), Disposition::Pass);
    assert_eq!(report.files[0].verdict.evidence[0].matched, "Class.forName");
    Ok(())
}

#[test]
fn test_explicit_config_must_exist() {
    let corpus = Corpus::new();
    let result = Config::resolve(corpus.root(), Some(&corpus.root().join("missing.toml")));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_locator_with_injected_registry() {
    let mut registry = LanguageRegistry::new();
    registry.insert("elixir", ".ex");
    let locator = ReferenceLocator::new(registry, "cases");

    let location = locator
        .locate_identifier(Path::new("rules/elixir/atoms/no_atom.yaml"), "no_atom")
        .unwrap();
    assert_eq!(
        location.path,
        PathBuf::from("rules/elixir/atoms/cases/no_atom.ex")
    );
    assert_eq!(location.language, "elixir");

    assert!(
        locator
            .locate_identifier(Path::new("py/no_eval.yaml"), "no_eval")
            .is_none()
    );
}

#[test]
fn test_first_language_segment_wins() {
    let locator = ReferenceLocator::default();
    let location = locator
        .locate_identifier(Path::new("go/vendored/c/cgo.yaml"), "cgo")
        .unwrap();
    assert_eq!(location.language, "go");
    assert_eq!(location.path, PathBuf::from("go/vendored/c/snippets/cgo.go"));
}
