//! Parsing and validation for rulecheck.toml configuration files
//!
//! The file is optional. Every key has a default, and the defaults describe the
//! standard corpus layout, so an absent file and an empty file behave the same.

use crate::error::ConfigError;
use crate::locator::{DEFAULT_EXAMPLES_DIR, LanguageRegistry, ReferenceLocator};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up at the corpus root
pub const CONFIG_FILE_NAME: &str = "rulecheck.toml";

/// On-disk shape of rulecheck.toml
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    corpus: CorpusSection,

    /// Language tag to extension, merged over the built-in registry
    #[serde(default)]
    languages: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CorpusSection {
    extensions: Option<Vec<String>>,
    skip_dirs: Option<Vec<String>>,
    examples_dir: Option<String>,
}

/// Corpus layout settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Extensions (without dot) that mark a file as a rule document
    pub extensions: Vec<String>,

    /// Directory names whose contents are never treated as rule documents
    pub skip_dirs: Vec<String>,

    /// Name of the reference example subdirectory next to each rule
    pub examples_dir: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["yaml".to_string()],
            skip_dirs: vec!["snippets".to_string(), "examples".to_string()],
            examples_dir: DEFAULT_EXAMPLES_DIR.to_string(),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub languages: LanguageRegistry,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(s)?;

        let defaults = CorpusConfig::default();
        let corpus = CorpusConfig {
            extensions: file
                .corpus
                .extensions
                .map(|exts| {
                    exts.into_iter()
                        .map(|ext| ext.trim_start_matches('.').to_string())
                        .collect()
                })
                .unwrap_or(defaults.extensions),
            skip_dirs: file.corpus.skip_dirs.unwrap_or(defaults.skip_dirs),
            examples_dir: file.corpus.examples_dir.unwrap_or(defaults.examples_dir),
        };

        let mut languages = LanguageRegistry::default();
        for (tag, extension) in file.languages {
            languages.insert(tag, extension);
        }

        let config = Config { corpus, languages };
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a corpus
    ///
    /// An explicit path must exist. Otherwise `rulecheck.toml` at the corpus
    /// root is used when present, and the defaults when not.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path: PathBuf = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!(root = %root.display(), "no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        debug!(path = %path.display(), "loading configuration");
        Self::load(path)
    }

    /// Builds the reference locator described by this configuration
    pub fn locator(&self) -> ReferenceLocator {
        ReferenceLocator::new(self.languages.clone(), self.corpus.examples_dir.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus.extensions.is_empty()
            || self.corpus.extensions.iter().any(|ext| ext.is_empty())
        {
            return Err(ConfigError::Validation(
                "corpus.extensions must list at least one non-empty extension".to_string(),
            ));
        }

        if self.corpus.skip_dirs.iter().any(|dir| dir.is_empty()) {
            return Err(ConfigError::Validation(
                "corpus.skip_dirs must not contain empty names".to_string(),
            ));
        }

        let examples_dir = &self.corpus.examples_dir;
        if examples_dir.is_empty() || examples_dir.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "corpus.examples_dir must be a single directory name, got '{}'",
                examples_dir
            )));
        }

        for (tag, extension) in self.languages.iter() {
            if tag.is_empty() || tag.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "Invalid language tag '{}'",
                    tag
                )));
            }
            if extension.len() < 2 || !extension.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "Extension for language '{}' must start with '.', got '{}'",
                    tag, extension
                )));
            }
        }

        Ok(())
    }
}
