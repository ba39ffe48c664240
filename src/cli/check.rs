//! Check command implementation
//!
//! This module implements the `rulecheck check` command, which:
//! - Resolves the corpus configuration
//! - Discovers rule files under the corpus root
//! - Lints every rule file against its reference example
//! - Formats output (human or JSONL)
//! - Returns appropriate exit code

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_FAILED, EXIT_SUCCESS, exit_code_for, load_config};
use crate::engine::{CorpusReport, CorpusRunner};
use crate::error::CheckError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::path::Path;

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: No rule file has errors (warnings allowed)
/// - 1: At least one rule file has errors
/// - 2: Run-level error (unreadable root, walk failure)
/// - 3: Invalid configuration file
pub fn run_check(
    root: &Path,
    format: OutputFormat,
    color: ColorChoice,
    config_path: Option<&Path>,
) -> i32 {
    match run_check_inner(root, format, color, config_path) {
        Ok(report) => {
            if report.has_errors() {
                EXIT_FAILED
            } else {
                EXIT_SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Internal implementation of check command
pub(crate) fn run_check_inner(
    root: &Path,
    format: OutputFormat,
    color: ColorChoice,
    config_path: Option<&Path>,
) -> Result<CorpusReport, CheckError> {
    let config = load_config(root, config_path)?;
    let runner = CorpusRunner::new(config);
    let report = runner.run(root)?;

    match format {
        OutputFormat::Human => {
            HumanFormatter::new().write_to_stdout(&report, color.for_stdout())?;
        }
        OutputFormat::Jsonl => JsonlFormatter::new().write_to_stdout(&report),
    }

    Ok(report)
}
