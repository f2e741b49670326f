//! Model-list payloads.
//!
//! The listing endpoint returns `{"models": [...]}`. A bare JSON array of
//! configurations is accepted as well. Parsing comes in two flavours:
//!
//! - strict ([`parse_model_list`]): the first invalid entry fails the list
//! - lenient ([`validate_model_list`]): every entry is checked and the
//!   result reports accepted and rejected entries separately

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{BaseModelType, ModelConfig, ModelType, ModelVariantType, OnnxSd1ModelConfig};
use crate::validation::{ShapeValidationError, validate};

/// Errors from parsing configuration payloads.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a model list (an object with a `models` array, or an array)")]
    NotAList,

    #[error("model entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: ShapeValidationError,
    },

    #[error(transparent)]
    Shape(#[from] ShapeValidationError),
}

/// A validated list of model configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    pub models: Vec<ModelConfig>,
}

impl ModelList {
    /// Validate a list payload, failing on the first invalid entry.
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let models = list_entries(value)?
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ModelConfig::from_value(entry)
                    .map_err(|source| CatalogError::Entry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = models.len(), "Parsed model list");
        Ok(Self { models })
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// ONNX records only.
    pub fn onnx(&self) -> impl Iterator<Item = &OnnxSd1ModelConfig> {
        self.models.iter().filter_map(ModelConfig::as_onnx)
    }

    /// Configurations matching every criterion set on `filter`.
    pub fn filter<'a>(&'a self, filter: &'a ModelFilter) -> impl Iterator<Item = &'a ModelConfig> {
        self.models.iter().filter(move |config| filter.matches(config))
    }
}

impl From<Vec<ModelConfig>> for ModelList {
    fn from(models: Vec<ModelConfig>) -> Self {
        Self { models }
    }
}

/// Criteria for selecting configurations from a [`ModelList`].
///
/// Unset criteria match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelFilter {
    pub base_model: Option<BaseModelType>,
    pub variant: Option<ModelVariantType>,
    pub model_type: Option<ModelType>,
}

impl ModelFilter {
    pub fn matches(&self, config: &ModelConfig) -> bool {
        self.base_model.is_none_or(|b| config.base_model() == b)
            && self.variant.is_none_or(|v| config.variant() == v)
            && self.model_type.is_none_or(|t| config.model_type() == t)
    }
}

/// An entry rejected by [`validate_model_list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Position in the input list.
    pub index: usize,
    /// The entry's `name`, when it has a string one.
    pub name: Option<String>,
    pub error: ShapeValidationError,
}

/// Outcome of validating every entry of a model list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub accepted: ModelList,
    pub rejected: Vec<RejectedEntry>,
}

impl ValidationReport {
    /// True when no entry was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

/// Parse one ONNX Stable Diffusion 1 configuration.
pub fn parse_onnx_config(json: &str) -> Result<OnnxSd1ModelConfig, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(validate(&value)?)
}

/// Parse one configuration of any variant.
pub fn parse_model_config(json: &str) -> Result<ModelConfig, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(ModelConfig::from_value(&value)?)
}

/// Parse a model list, failing on the first invalid entry.
pub fn parse_model_list(json: &str) -> Result<ModelList, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    ModelList::from_value(&value)
}

/// Validate every entry of a model list, collecting rejections instead of
/// stopping at the first one.
///
/// Only a payload that is not a list at all is an error.
pub fn validate_model_list(value: &Value) -> Result<ValidationReport, CatalogError> {
    let mut report = ValidationReport::default();

    for (index, entry) in list_entries(value)?.iter().enumerate() {
        match ModelConfig::from_value(entry) {
            Ok(config) => report.accepted.models.push(config),
            Err(error) => {
                let name = entry.get("name").and_then(Value::as_str).map(str::to_owned);
                warn!(index, name = name.as_deref(), %error, "Rejected model config entry");
                report.rejected.push(RejectedEntry { index, name, error });
            }
        }
    }

    debug!(
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "Validated model list"
    );
    Ok(report)
}

/// The raw entries of a list payload, unvalidated.
pub fn list_entries(value: &Value) -> Result<&[Value], CatalogError> {
    match value {
        Value::Array(entries) => Ok(entries.as_slice()),
        Value::Object(map) => match map.get("models") {
            Some(Value::Array(entries)) => Ok(entries.as_slice()),
            _ => Err(CatalogError::NotAList),
        },
        _ => Err(CatalogError::NotAList),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ShapeViolation;
    use serde_json::json;

    fn onnx(name: &str) -> Value {
        json!({
            "name": name,
            "base_model": "sd-1",
            "type": "onnx",
            "path": format!("/models/{name}.onnx"),
            "model_format": null,
            "variant": "normal"
        })
    }

    fn diffusers(name: &str, base: &str) -> Value {
        json!({
            "name": name,
            "base_model": base,
            "type": "main",
            "path": format!("/models/{name}"),
            "model_format": "diffusers",
            "variant": "normal"
        })
    }

    #[test]
    fn test_parse_onnx_config() {
        let config = parse_onnx_config(&onnx("a").to_string()).unwrap();
        assert_eq!(config.name, "a");
    }

    #[test]
    fn test_parse_onnx_config_malformed_json() {
        assert!(matches!(
            parse_onnx_config("{not json"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_parse_onnx_config_rejects_main() {
        let err = parse_onnx_config(&diffusers("d", "sd-1").to_string()).unwrap_err();
        let CatalogError::Shape(shape) = err else {
            panic!("expected shape error, got {err:?}");
        };
        assert_eq!(shape.field, "type");
    }

    #[test]
    fn test_parse_model_list_object_and_array() {
        let entries = json!([onnx("a"), diffusers("b", "sdxl")]);

        let from_array = parse_model_list(&entries.to_string()).unwrap();
        let from_object = parse_model_list(&json!({ "models": entries }).to_string()).unwrap();

        assert_eq!(from_object, from_array);
        assert_eq!(from_object.len(), 2);
        assert_eq!(from_object.onnx().count(), 1);
    }

    #[test]
    fn test_parse_model_list_reports_entry_index() {
        let mut bad = onnx("bad");
        bad["variant"] = json!("upscale");
        let payload = json!({ "models": [onnx("a"), bad] }).to_string();

        match parse_model_list(&payload) {
            Err(CatalogError::Entry { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.field, "variant");
            }
            other => panic!("expected entry error, got {other:?}"),
        }
    }

    #[test]
    fn test_not_a_list() {
        assert!(matches!(
            parse_model_list(r#"{"items": []}"#),
            Err(CatalogError::NotAList)
        ));
        assert!(matches!(
            validate_model_list(&json!("models")),
            Err(CatalogError::NotAList)
        ));
    }

    #[test]
    fn test_validate_model_list_collects_rejections() {
        let mut missing_path = onnx("no-path");
        missing_path.as_object_mut().unwrap().remove("path");

        let payload = json!({ "models": [onnx("a"), missing_path, json!(7), diffusers("b", "sd-2")] });
        let report = validate_model_list(&payload).unwrap();

        assert_eq!(report.total(), 4);
        assert_eq!(report.accepted.len(), 2);
        assert!(!report.is_clean());

        assert_eq!(report.rejected[0].index, 1);
        assert_eq!(report.rejected[0].name.as_deref(), Some("no-path"));
        assert!(report.rejected[0].error.is_missing());

        assert_eq!(report.rejected[1].index, 2);
        assert_eq!(report.rejected[1].name, None);
        assert!(matches!(
            report.rejected[1].error.violation,
            ShapeViolation::NotAnObject { found: "number" }
        ));
    }

    #[test]
    fn test_filter() {
        let list = ModelList::from(vec![
            ModelConfig::from_value(&onnx("a")).unwrap(),
            ModelConfig::from_value(&diffusers("b", "sdxl")).unwrap(),
            ModelConfig::from_value(&diffusers("c", "sd-1")).unwrap(),
        ]);

        let sd1 = ModelFilter {
            base_model: Some(BaseModelType::Sd1),
            ..Default::default()
        };
        let names: Vec<_> = list.filter(&sd1).map(ModelConfig::name).collect();
        assert_eq!(names, ["a", "c"]);

        let sd1_main = ModelFilter {
            model_type: Some(ModelType::Main),
            ..sd1
        };
        let names: Vec<_> = list.filter(&sd1_main).map(ModelConfig::name).collect();
        assert_eq!(names, ["c"]);

        assert_eq!(list.filter(&ModelFilter::default()).count(), 3);
    }

    #[test]
    fn test_model_list_serializes_as_payload() {
        let list = ModelList::from(vec![ModelConfig::from_value(&onnx("a")).unwrap()]);
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({ "models": [onnx("a")] })
        );
    }
}
