//! Validate command handler.
//!
//! Checks every configuration in a payload and reports each one. Unlike
//! `list`, rejected entries are the point of this command, so they are
//! printed rather than logged.

use anyhow::Result;
use modelcfg_core::{ModelConfig, ShapeValidationError, list_entries, validate};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::bootstrap::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::utils::input::read_payload;

/// Validation outcome for one entry.
#[derive(Debug)]
pub struct EntryOutcome {
    /// Position in a list payload; `None` for a single-record payload.
    pub index: Option<usize>,
    pub name: Option<String>,
    pub result: Result<ModelConfig, ShapeValidationError>,
}

impl EntryOutcome {
    fn check(index: Option<usize>, entry: &Value, onnx_only: bool) -> Self {
        let result = if onnx_only {
            validate(entry).map(ModelConfig::from)
        } else {
            ModelConfig::from_value(entry)
        };
        let name = match &result {
            Ok(config) => Some(config.name().to_owned()),
            Err(_) => entry.get("name").and_then(Value::as_str).map(str::to_owned),
        };

        Self {
            index,
            name,
            result,
        }
    }

    fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("<unnamed>");
        match self.index {
            Some(index) => format!("[{index}] {name}"),
            None => name.to_string(),
        }
    }
}

/// JSON report printed with `--format json`.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub rejected: usize,
    pub errors: Vec<EntryErrorSummary>,
}

#[derive(Debug, Serialize)]
pub struct EntryErrorSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub field: &'static str,
    pub message: String,
}

impl ValidationSummary {
    pub fn from_outcomes(outcomes: &[EntryOutcome]) -> Self {
        let errors: Vec<_> = outcomes
            .iter()
            .filter_map(|outcome| {
                outcome.result.as_ref().err().map(|err| EntryErrorSummary {
                    index: outcome.index,
                    name: outcome.name.clone(),
                    field: err.field,
                    message: err.violation.to_string(),
                })
            })
            .collect();

        Self {
            total: outcomes.len(),
            valid: outcomes.len() - errors.len(),
            rejected: errors.len(),
            errors,
        }
    }
}

/// Validate every entry of `payload`.
///
/// List payloads are checked entry by entry; anything else is treated as a
/// single record.
pub fn check_payload(payload: &Value, onnx_only: bool) -> Vec<EntryOutcome> {
    match list_entries(payload) {
        Ok(entries) => entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryOutcome::check(Some(index), entry, onnx_only))
            .collect(),
        Err(_) => vec![EntryOutcome::check(None, payload, onnx_only)],
    }
}

/// Execute the validate command.
///
/// # Errors
///
/// Returns [`CliError::Rejected`] when any entry fails validation, after
/// printing the full report.
pub fn execute(config: &CliConfig, input: &str, onnx_only: bool) -> Result<()> {
    let payload = read_payload(input)?;
    let outcomes = check_payload(&payload, onnx_only);
    let summary = ValidationSummary::from_outcomes(&outcomes);
    debug!(
        total = summary.total,
        rejected = summary.rejected,
        onnx_only,
        "Validated payload"
    );

    match config.format {
        OutputFormat::Table => print_outcomes(&outcomes, &summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    if summary.rejected > 0 {
        return Err(CliError::Rejected {
            rejected: summary.rejected,
            total: summary.total,
        }
        .into());
    }
    Ok(())
}

fn print_outcomes(outcomes: &[EntryOutcome], summary: &ValidationSummary) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(config) => println!(
                "ok    {}  ({}, {}, {})",
                outcome.label(),
                config.model_type(),
                config.base_model(),
                config.variant()
            ),
            Err(err) => println!("FAIL  {}  {err}", outcome.label()),
        }
    }

    println!();
    println!(
        "{} entr{}: {} valid, {} rejected",
        summary.total,
        if summary.total == 1 { "y" } else { "ies" },
        summary.valid,
        summary.rejected
    );
}
