//! List command handler.
//!
//! Displays the valid configurations of a list payload, optionally filtered.
//! Invalid entries are skipped with a warning unless `--strict` is set.

use anyhow::Result;
use modelcfg_core::{ModelConfig, ModelFilter, ModelList, validate_model_list};
use serde_json::Value;
use tracing::info;

use crate::bootstrap::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::presentation::print_model_table;
use crate::utils::input::read_payload;

/// Configurations selected for display, plus how many entries were skipped.
#[derive(Debug)]
pub struct ListOutcome {
    pub selected: Vec<ModelConfig>,
    pub skipped: usize,
}

/// Validate `payload` as a model list and apply `filter`.
///
/// # Errors
///
/// Returns [`CliError::Data`] if the payload is not a list, and
/// [`CliError::InvalidEntry`] in strict mode if any entry is invalid.
pub fn select(
    payload: &Value,
    filter: &ModelFilter,
    strict: bool,
) -> Result<ListOutcome, CliError> {
    let (models, skipped) = if strict {
        (ModelList::from_value(payload)?, 0)
    } else {
        let report = validate_model_list(payload)?;
        let skipped = report.rejected.len();
        (report.accepted, skipped)
    };

    let selected = models.filter(filter).cloned().collect();
    Ok(ListOutcome { selected, skipped })
}

/// Execute the list command.
pub fn execute(config: &CliConfig, input: &str, filter: &ModelFilter) -> Result<()> {
    let payload = read_payload(input)?;
    let outcome = select(&payload, filter, config.strict)?;
    info!(
        selected = outcome.selected.len(),
        skipped = outcome.skipped,
        "Listed model configs"
    );

    match config.format {
        OutputFormat::Json => {
            let list = ModelList::from(outcome.selected);
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Table => print_table(&outcome),
    }

    Ok(())
}

fn print_table(outcome: &ListOutcome) {
    if outcome.selected.is_empty() {
        println!("No matching model configs found.");
    } else {
        println!("Found {} model config(s):\n", outcome.selected.len());
        print_model_table(&outcome.selected);
    }

    if outcome.skipped > 0 {
        println!();
        println!(
            "Skipped {} invalid entr{}. Run 'modelcfg validate' for details.",
            outcome.skipped,
            if outcome.skipped == 1 { "y" } else { "ies" }
        );
    }
}
