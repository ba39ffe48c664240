//! Rule file linting and corpus execution

pub mod file_walker;
pub mod linter;
pub mod runner;
pub mod verdict;

pub use linter::RuleLinter;
pub use runner::{CorpusReport, CorpusRunner, FileVerdict, Summary};
pub use verdict::Verdict;
