//! Main commands enum and primary subcommands.

use clap::Subcommand;
use modelcfg_core::{BaseModelType, ModelFilter, ModelType, ModelVariantType, SchemaEnum};

/// Available commands.
///
/// `INPUT` is a path to a JSON file, or `-` to read from stdin. It may hold
/// a single configuration, a `{"models": [...]}` payload or a bare array.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate every configuration in a payload
    Validate {
        /// JSON file to check (`-` for stdin)
        input: String,
        /// Check entries against the ONNX record contract only
        #[arg(long)]
        onnx: bool,
    },

    /// List the valid configurations in a payload
    List {
        /// JSON file to read (`-` for stdin)
        input: String,
        /// Only show models built on this base model
        #[arg(long, value_parser = parse_schema_value::<BaseModelType>)]
        base: Option<BaseModelType>,
        /// Only show models of this variant
        #[arg(long, value_parser = parse_schema_value::<ModelVariantType>)]
        variant: Option<ModelVariantType>,
        /// Only show models with this `type` tag
        #[arg(long = "type", value_parser = parse_schema_value::<ModelType>)]
        model_type: Option<ModelType>,
    },
}

impl Commands {
    /// Filter built from the `list` options. Empty for other commands.
    pub fn filter(&self) -> ModelFilter {
        match self {
            Self::List {
                base,
                variant,
                model_type,
                ..
            } => ModelFilter {
                base_model: *base,
                variant: *variant,
                model_type: *model_type,
            },
            Self::Validate { .. } => ModelFilter::default(),
        }
    }
}

/// Parse a wire value of a schema enumeration from the command line.
fn parse_schema_value<T: SchemaEnum>(raw: &str) -> Result<T, String> {
    T::parse(raw).ok_or_else(|| {
        format!(
            "invalid {} '{raw}' (expected one of: {})",
            T::NAME,
            T::expected_values()
        )
    })
}
