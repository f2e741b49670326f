//! ONNX Stable Diffusion 1 model configuration record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{BaseModelType, ModelError, ModelVariantType};
use super::tags::{NullFormat, OnnxTag};
use crate::validation::{Fields, ShapeValidationError};

/// One catalogued ONNX model as returned by the model API.
///
/// The `type` and `model_format` discriminants are marker types, so a value
/// of this type is always tagged `"onnx"` / `null`. Deserializing runs the
/// full shape validation (see [`crate::validation::validate`]); `name` is
/// non-empty for every deserialized instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct OnnxSd1ModelConfig {
    /// Identifier of the model.
    pub name: String,
    pub base_model: BaseModelType,
    #[serde(rename = "type")]
    pub model_type: OnnxTag,
    /// Filesystem or resource path to the model artifact. Not checked.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_format: NullFormat,
    /// Set only when the backend failed to load or validate the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ModelError>,
    pub variant: ModelVariantType,
}

impl OnnxSd1ModelConfig {
    /// Create a record with all required fields and no description or error.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        base_model: BaseModelType,
        path: impl Into<String>,
        variant: ModelVariantType,
    ) -> Self {
        Self {
            name: name.into(),
            base_model,
            model_type: OnnxTag,
            path: path.into(),
            description: None,
            model_format: NullFormat,
            error: None,
            variant,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: ModelError) -> Self {
        self.error = Some(error);
        self
    }

    pub(crate) fn from_fields(fields: &Fields<'_>) -> Result<Self, ShapeValidationError> {
        let name = fields.non_empty("name")?;
        let base_model = fields.member("base_model")?;
        fields.tag("type", OnnxTag::VALUE)?;
        let path = fields.string("path")?.to_owned();
        fields.null("model_format")?;
        let variant = fields.member("variant")?;
        let description = fields.optional_string("description")?;
        let error = fields.optional_member("error")?;

        Ok(Self {
            name,
            base_model,
            model_type: OnnxTag,
            path,
            description,
            model_format: NullFormat,
            error,
            variant,
        })
    }
}

impl TryFrom<Value> for OnnxSd1ModelConfig {
    type Error = ShapeValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        crate::validation::validate(&value)
    }
}
