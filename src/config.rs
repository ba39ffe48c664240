//! Configuration file parsing and validation

pub mod rulecheck_toml;

pub use rulecheck_toml::{CONFIG_FILE_NAME, Config, CorpusConfig};
