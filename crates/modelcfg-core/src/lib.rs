#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod validation;

// Re-export commonly used types for convenience
pub use catalog::{
    CatalogError, ModelFilter, ModelList, RejectedEntry, ValidationReport, list_entries,
    parse_model_config, parse_model_list, parse_onnx_config, validate_model_list,
};
pub use domain::{
    BaseModelType, CheckpointModelConfig, DiffusersModelConfig, ModelConfig, ModelError,
    ModelFormat, ModelType, ModelVariantType, NullFormat, OnnxSd1ModelConfig, OnnxTag, SchemaEnum,
};
pub use validation::{ShapeValidationError, ShapeViolation, validate};
