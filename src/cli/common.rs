//! Common helpers shared across CLI commands

use crate::config::Config;
use crate::error::{CheckError, ConfigError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// No rule file has errors (warnings allowed)
pub const EXIT_SUCCESS: i32 = 0;
/// At least one rule file has errors
pub const EXIT_FAILED: i32 = 1;
/// Run-level fault (unreadable corpus root, walk failure)
pub const EXIT_ERROR: i32 = 2;
/// Invalid configuration file
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load the configuration for a corpus
///
/// # Errors
///
/// Returns `ConfigError` if an explicit file is missing, or if the file in use
/// fails to parse or validate.
pub(crate) fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
    Config::resolve(root, explicit)
}

/// Map a run-level error to its exit code
pub(crate) fn exit_code_for(error: &CheckError) -> i32 {
    match error {
        CheckError::Config(ConfigError::Parse(_)) | CheckError::Config(ConfigError::Validation(_)) => {
            EXIT_PARSE_ERROR
        }
        _ => EXIT_ERROR,
    }
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
