//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Output format for rulecheck commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolve to a termcolor choice for stdout
    pub fn for_stdout(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// rulecheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "rulecheck")]
#[command(about = "Validate detection rules against their reference code examples")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `check .`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Configuration file (defaults to rulecheck.toml in the corpus root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The command to run, with a bare invocation meaning `check .`
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check {
            root: PathBuf::from("."),
            format: OutputFormat::Human,
        })
    }
}

/// Available rulecheck subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lint every rule file under a corpus root
    Check {
        /// Corpus root directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List discovered rule files and their reference examples
    List {
        /// Corpus root directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
