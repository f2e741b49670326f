//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};

use crate::bootstrap::OutputFormat;
use crate::commands::Commands;

/// Command-line interface for inspecting model configuration payloads.
///
/// Global options may also come from the environment (or a `.env` file).
#[derive(Parser)]
#[command(name = "modelcfg")]
#[command(about = "Validate and inspect model configuration payloads")]
#[command(version)]
pub struct Cli {
    /// Output format for results
    #[arg(
        long,
        global = true,
        value_enum,
        env = "MODELCFG_FORMAT",
        default_value_t = OutputFormat::Table
    )]
    pub format: OutputFormat,

    /// Fail on the first invalid entry instead of skipping it
    #[arg(
        long,
        global = true,
        env = "MODELCFG_STRICT",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub strict: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
