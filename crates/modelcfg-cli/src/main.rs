//! CLI entry point.
//!
//! Loads the environment, parses arguments, installs logging and hands the
//! command to [`handlers::run`]. Exit codes come from [`exit_code_for`].

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use modelcfg_cli::{Cli, CliConfig, exit_code_for, handlers, init_logging, load_env};

fn main() -> ExitCode {
    // `.env` must be loaded before parsing so env-backed flags see it.
    load_env();

    let cli = Cli::parse();
    let config = CliConfig::from_cli(&cli);
    init_logging(&config);

    let Some(command) = cli.command else {
        if let Err(err) = Cli::command().print_help() {
            eprintln!("Error: {err}");
            return ExitCode::from(74);
        }
        println!();
        return ExitCode::SUCCESS;
    };

    match handlers::run(&config, &command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
