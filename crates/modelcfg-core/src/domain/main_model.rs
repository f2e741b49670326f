//! Records tagged `type = "main"`.
//!
//! Both share the `"main"` type tag and differ only in `model_format`, which
//! is why [`ModelConfig`](super::ModelConfig) needs the second discriminant.

use serde::Serialize;

use super::enums::{BaseModelType, ModelError, ModelVariantType};
use super::tags::{CheckpointFormat, DiffusersFormat, MainTag};
use crate::validation::{Fields, ShapeValidationError};

/// A model stored as a diffusers directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffusersModelConfig {
    pub name: String,
    pub base_model: BaseModelType,
    #[serde(rename = "type")]
    pub model_type: MainTag,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_format: DiffusersFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ModelError>,
    pub variant: ModelVariantType,
}

/// A model stored as a single checkpoint file plus its config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckpointModelConfig {
    pub name: String,
    pub base_model: BaseModelType,
    #[serde(rename = "type")]
    pub model_type: MainTag,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_format: CheckpointFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ModelError>,
    pub variant: ModelVariantType,
    /// Path to the checkpoint's YAML config.
    pub config: String,
}

impl DiffusersModelConfig {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Result<Self, ShapeValidationError> {
        let name = fields.non_empty("name")?;
        let base_model = fields.member("base_model")?;
        fields.tag("type", MainTag::VALUE)?;
        let path = fields.string("path")?.to_owned();
        fields.tag("model_format", DiffusersFormat::VALUE)?;
        let variant = fields.member("variant")?;

        Ok(Self {
            name,
            base_model,
            model_type: MainTag,
            path,
            description: fields.optional_string("description")?,
            model_format: DiffusersFormat,
            error: fields.optional_member("error")?,
            variant,
        })
    }
}

impl CheckpointModelConfig {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Result<Self, ShapeValidationError> {
        let name = fields.non_empty("name")?;
        let base_model = fields.member("base_model")?;
        fields.tag("type", MainTag::VALUE)?;
        let path = fields.string("path")?.to_owned();
        fields.tag("model_format", CheckpointFormat::VALUE)?;
        let variant = fields.member("variant")?;
        let config = fields.non_empty("config")?;

        Ok(Self {
            name,
            base_model,
            model_type: MainTag,
            path,
            description: fields.optional_string("description")?,
            model_format: CheckpointFormat,
            error: fields.optional_member("error")?,
            variant,
            config,
        })
    }
}
