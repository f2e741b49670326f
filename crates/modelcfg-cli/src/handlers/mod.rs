//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(config: &CliConfig, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Read the payload
//!   2. Call `modelcfg-core` for validation and filtering
//!   3. Format output for the terminal

pub mod list;
pub mod validate;

use anyhow::Result;

use crate::bootstrap::CliConfig;
use crate::commands::Commands;

/// Dispatch a parsed command to its handler.
pub fn run(config: &CliConfig, command: &Commands) -> Result<()> {
    match command {
        Commands::Validate { input, onnx } => validate::execute(config, input, *onnx),
        Commands::List { input, .. } => list::execute(config, input, &command.filter()),
    }
}
