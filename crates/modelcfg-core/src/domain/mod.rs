//! Core domain types.
//!
//! These types describe model configurations as the model API reports them,
//! independent of how the payload was transported.
//!
//! # Structure
//!
//! - `enums` - Schema enumerations (`BaseModelType`, `ModelVariantType`, ...)
//! - `tags` - Zero-sized `type` / `model_format` discriminants
//! - `onnx` - The ONNX Stable Diffusion 1 record
//! - `main_model` - Diffusers and checkpoint records (`type = "main"`)
//! - `config` - The `ModelConfig` union over all records

mod config;
mod enums;
mod main_model;
mod onnx;
mod tags;

pub use config::ModelConfig;
pub use enums::{BaseModelType, ModelError, ModelFormat, ModelType, ModelVariantType, SchemaEnum};
pub use main_model::{CheckpointModelConfig, DiffusersModelConfig};
pub use onnx::OnnxSd1ModelConfig;
pub use tags::{CheckpointFormat, DiffusersFormat, MainTag, NullFormat, OnnxTag};
