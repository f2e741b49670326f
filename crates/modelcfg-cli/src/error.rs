//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`. Errors that need a specific exit code
//! are raised as [`CliError`] and recovered with [`exit_code_for`].

use modelcfg_core::CatalogError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// The input is not JSON, or not the expected payload shape.
    #[error("Invalid input: {0}")]
    Data(String),

    /// One or more configurations failed validation.
    #[error("{rejected} of {total} model config(s) failed validation")]
    Rejected { rejected: usize, total: usize },

    /// A strict list stopped at its first invalid entry.
    #[error("Invalid model config: {0}")]
    InvalidEntry(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: Validation found invalid configurations
    /// - 2: Misuse of shell command (reported by clap before dispatch)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected { .. } | Self::InvalidEntry(_) => 1,
            Self::Data(_) => 65, // EX_DATAERR
            Self::Io(_) => 74,   // EX_IOERR
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Entry { .. } => Self::InvalidEntry(err.to_string()),
            CatalogError::Json(_) | CatalogError::NotAList | CatalogError::Shape(_) => {
                Self::Data(err.to_string())
            }
        }
    }
}

/// Exit code for any handler error. Errors that are not a [`CliError`]
/// map to 1.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}
