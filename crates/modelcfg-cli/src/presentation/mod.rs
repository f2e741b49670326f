//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no validation or filtering happens here.

pub mod model_display;
pub mod tables;

// Re-export commonly used items
pub use model_display::{MODEL_TABLE_WIDTH, format_model_row, print_model_table};
pub use tables::{format_optional, print_separator, truncate_string};
