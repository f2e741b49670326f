//! The model-configuration union.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::enums::{
    BaseModelType, ModelError, ModelFormat, ModelType, ModelVariantType, SchemaEnum,
};
use super::main_model::{CheckpointModelConfig, DiffusersModelConfig};
use super::onnx::OnnxSd1ModelConfig;
use crate::validation::{Fields, ShapeValidationError, ShapeViolation};

/// Any model configuration the API can return.
///
/// Keyed by `type`, and by `model_format` where `type` alone is ambiguous.
/// Each arm serializes in its own wire shape with no wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelConfig {
    /// `type = "onnx"`, `model_format = null`
    Onnx(OnnxSd1ModelConfig),
    /// `type = "main"`, `model_format = "diffusers"`
    Diffusers(DiffusersModelConfig),
    /// `type = "main"`, `model_format = "checkpoint"`
    Checkpoint(CheckpointModelConfig),
}

impl ModelConfig {
    /// Validate a candidate against whichever variant its tags select.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modelcfg_core::{ModelConfig, ModelFormat};
    /// use serde_json::json;
    ///
    /// let config = ModelConfig::from_value(&json!({
    ///     "name": "sd1-diffusers",
    ///     "base_model": "sd-1",
    ///     "type": "main",
    ///     "path": "/models/sd1",
    ///     "model_format": "diffusers",
    ///     "variant": "normal"
    /// }))
    /// .unwrap();
    /// assert_eq!(config.model_format(), Some(ModelFormat::Diffusers));
    /// ```
    pub fn from_value(candidate: &Value) -> Result<Self, ShapeValidationError> {
        let fields = Fields::of(candidate)?;
        let raw_type = fields.string("type")?;

        match ModelType::parse_tag(raw_type)? {
            ModelType::Onnx => OnnxSd1ModelConfig::from_fields(&fields).map(Self::Onnx),
            ModelType::Main => match fields.member::<ModelFormat>("model_format")? {
                ModelFormat::Diffusers => {
                    DiffusersModelConfig::from_fields(&fields).map(Self::Diffusers)
                }
                ModelFormat::Checkpoint => {
                    CheckpointModelConfig::from_fields(&fields).map(Self::Checkpoint)
                }
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Onnx(c) => &c.name,
            Self::Diffusers(c) => &c.name,
            Self::Checkpoint(c) => &c.name,
        }
    }

    pub const fn base_model(&self) -> BaseModelType {
        match self {
            Self::Onnx(c) => c.base_model,
            Self::Diffusers(c) => c.base_model,
            Self::Checkpoint(c) => c.base_model,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Onnx(c) => &c.path,
            Self::Diffusers(c) => &c.path,
            Self::Checkpoint(c) => &c.path,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Onnx(c) => c.description.as_deref(),
            Self::Diffusers(c) => c.description.as_deref(),
            Self::Checkpoint(c) => c.description.as_deref(),
        }
    }

    pub const fn error(&self) -> Option<ModelError> {
        match self {
            Self::Onnx(c) => c.error,
            Self::Diffusers(c) => c.error,
            Self::Checkpoint(c) => c.error,
        }
    }

    pub const fn variant(&self) -> ModelVariantType {
        match self {
            Self::Onnx(c) => c.variant,
            Self::Diffusers(c) => c.variant,
            Self::Checkpoint(c) => c.variant,
        }
    }

    pub const fn model_type(&self) -> ModelType {
        match self {
            Self::Onnx(_) => ModelType::Onnx,
            Self::Diffusers(_) | Self::Checkpoint(_) => ModelType::Main,
        }
    }

    /// `None` for ONNX records, whose `model_format` is always null.
    pub const fn model_format(&self) -> Option<ModelFormat> {
        match self {
            Self::Onnx(_) => None,
            Self::Diffusers(_) => Some(ModelFormat::Diffusers),
            Self::Checkpoint(_) => Some(ModelFormat::Checkpoint),
        }
    }

    pub const fn as_onnx(&self) -> Option<&OnnxSd1ModelConfig> {
        match self {
            Self::Onnx(c) => Some(c),
            _ => None,
        }
    }
}

impl ModelType {
    fn parse_tag(raw: &str) -> Result<Self, ShapeValidationError> {
        Self::parse(raw).ok_or_else(|| {
            ShapeValidationError::new(
                "type",
                ShapeViolation::UnknownTag {
                    found: raw.to_owned(),
                },
            )
        })
    }
}

impl From<OnnxSd1ModelConfig> for ModelConfig {
    fn from(config: OnnxSd1ModelConfig) -> Self {
        Self::Onnx(config)
    }
}

impl TryFrom<Value> for ModelConfig {
    type Error = ShapeValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

impl Serialize for ModelConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Onnx(c) => c.serialize(serializer),
            Self::Diffusers(c) => c.serialize(serializer),
            Self::Checkpoint(c) => c.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ModelConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(serde::de::Error::custom)
    }
}
