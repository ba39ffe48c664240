//! rulecheck CLI entry point

use clap::Parser;
use rulecheck::cli::{Command, args::Cli, common::init_logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let exit_code = match cli.command_or_default() {
        Command::Check { root, format } => {
            rulecheck::cli::check::run_check(&root, format, cli.color, config)
        }
        Command::List { root, format } => rulecheck::cli::list::run_list(&root, format, config),
    };

    process::exit(exit_code);
}
