//! Payload input: a JSON file, or stdin when the path is `-`.

use anyhow::Result;
use serde_json::Value;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::error::CliError;

/// Path argument that selects stdin.
pub const STDIN_MARKER: &str = "-";

/// Read the raw text of `input`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file or stdin cannot be read.
pub fn read_input(input: &str) -> Result<String> {
    let text = if input == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::Io(format!("stdin: {e}")))?;
        buffer
    } else {
        std::fs::read_to_string(Path::new(input))
            .map_err(|e| CliError::Io(format!("{input}: {e}")))?
    };

    debug!(input, bytes = text.len(), "Read payload");
    Ok(text)
}

/// Parse payload text as JSON.
///
/// # Errors
///
/// Returns [`CliError::Data`] naming `source` if the text is not JSON.
pub fn parse_payload(text: &str, source: &str) -> Result<Value> {
    serde_json::from_str(text)
        .map_err(|e| CliError::Data(format!("{source}: malformed JSON: {e}")).into())
}

/// Read and parse `input` in one step.
pub fn read_payload(input: &str) -> Result<Value> {
    let text = read_input(input)?;
    parse_payload(&text, input)
}
