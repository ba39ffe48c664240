//! List command implementation
//!
//! This module implements the `rulecheck list` command, which:
//! - Discovers rule files under the corpus root
//! - Shows each rule's identifier, kind, language and reference example
//! - Supports both human-readable and JSONL output formats
//!
//! Listing never runs patterns; it only decodes and validates each document
//! far enough to pair it with its reference example.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_SUCCESS, exit_code_for, load_config};
use crate::engine::CorpusRunner;
use crate::engine::file_walker::RuleFile;
use crate::error::CheckError;
use crate::locator::ReferenceLocator;
use crate::output::{ListingStatus, RuleListing, RuleListingHumanFormatter, RuleListingJsonlFormatter};
use crate::rules::{RuleDocument, validate_record};
use std::path::Path;

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success, regardless of how many rule files are invalid
/// - 2: Run-level error
/// - 3: Invalid configuration file
pub fn run_list(root: &Path, format: OutputFormat, config_path: Option<&Path>) -> i32 {
    match run_list_inner(root, config_path) {
        Ok(listings) => {
            match format {
                OutputFormat::Human => RuleListingHumanFormatter::new().write_to_stdout(&listings),
                OutputFormat::Jsonl => RuleListingJsonlFormatter::new().write_to_stdout(&listings),
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of list command
pub(crate) fn run_list_inner(
    root: &Path,
    config_path: Option<&Path>,
) -> Result<Vec<RuleListing>, CheckError> {
    let config = load_config(root, config_path)?;
    let runner = CorpusRunner::new(config);
    let locator = runner.linter().locator();

    let listings = runner
        .discover(root)?
        .iter()
        .map(|file| describe(root, file, locator))
        .collect();

    Ok(listings)
}

fn describe(root: &Path, file: &RuleFile, locator: &ReferenceLocator) -> RuleListing {
    let mut listing = RuleListing {
        path: file.relative.display().to_string(),
        identifier: None,
        kind: None,
        language: None,
        reference: None,
        status: ListingStatus::Invalid,
    };

    let Ok(doc) = RuleDocument::from_path(&file.path) else {
        return listing;
    };
    let Ok(record) = validate_record(&doc) else {
        return listing;
    };

    listing.identifier = Some(record.identifier.clone());
    listing.kind = Some(record.kind);

    listing.status = match locator.locate(&file.relative, &record) {
        Some(location) => {
            let exists = root.join(&location.path).is_file();
            listing.language = Some(location.language);
            listing.reference = Some(location.path.display().to_string());
            if exists {
                ListingStatus::Ready
            } else {
                ListingStatus::MissingReference
            }
        }
        None => ListingStatus::UnknownLanguage,
    };

    listing
}
