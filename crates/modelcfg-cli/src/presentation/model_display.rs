//! Row rendering for model configurations.

use modelcfg_core::ModelConfig;

use super::tables::{format_optional, print_separator, truncate_string};

/// Total width of the model table, excluding the trailing path column.
pub const MODEL_TABLE_WIDTH: usize = 84;

/// One table row: name, type, format, base model, variant, error, path.
pub fn format_model_row(config: &ModelConfig) -> String {
    format!(
        "{:<28} {:<6} {:<11} {:<13} {:<8} {:<10} {}",
        truncate_string(config.name(), 27),
        config.model_type(),
        format_optional(config.model_format(), "--"),
        config.base_model(),
        config.variant(),
        format_optional(config.error(), "--"),
        config.path()
    )
}

/// Print a header and one row per configuration.
pub fn print_model_table<'a>(configs: impl IntoIterator<Item = &'a ModelConfig>) {
    println!(
        "{:<28} {:<6} {:<11} {:<13} {:<8} {:<10} Path",
        "Name", "Type", "Format", "Base", "Variant", "Error"
    );
    print_separator(MODEL_TABLE_WIDTH);

    for config in configs {
        println!("{}", format_model_row(config));
    }
}
