//! Shape validation for untyped model-configuration payloads.
//!
//! A candidate is any `serde_json::Value`. Validation either produces a typed
//! record or a [`ShapeValidationError`] naming the first offending field.
//! Nothing is coerced or defaulted: a wrong type, a wrong tag or a value
//! outside its enumeration is always an error.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::{OnnxSd1ModelConfig, SchemaEnum};

/// Field name reported when the candidate itself is not an object.
pub const ROOT_FIELD: &str = "$";

/// A candidate value does not have the shape of a model configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid model config field `{field}`: {violation}")]
pub struct ShapeValidationError {
    /// Wire name of the offending field, or [`ROOT_FIELD`].
    pub field: &'static str,
    /// What was wrong with it.
    pub violation: ShapeViolation,
}

/// Reason a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeViolation {
    #[error("expected an object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("required field is missing")]
    Missing,

    #[error("expected {expected}, got {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("must not be empty")]
    Empty,

    /// The tag is a valid string but names a different union variant.
    #[error("expected \"{expected}\", got \"{found}\"")]
    TagMismatch {
        expected: &'static str,
        found: String,
    },

    /// The `type` tag does not name any known variant.
    #[error("unknown model type \"{found}\"")]
    UnknownTag { found: String },

    #[error("must be null, got {found}")]
    NotNull { found: String },

    #[error("\"{value}\" is not a valid {enumeration} (expected one of: {expected})")]
    NotInEnum {
        enumeration: &'static str,
        value: String,
        expected: String,
    },
}

impl ShapeValidationError {
    pub(crate) const fn new(field: &'static str, violation: ShapeViolation) -> Self {
        Self { field, violation }
    }

    pub(crate) const fn missing(field: &'static str) -> Self {
        Self::new(field, ShapeViolation::Missing)
    }

    /// True when the failure is a missing required field.
    pub const fn is_missing(&self) -> bool {
        matches!(self.violation, ShapeViolation::Missing)
    }
}

/// Validate a candidate against the ONNX Stable Diffusion 1 record shape.
///
/// Required fields are checked in wire order (`name`, `base_model`, `type`,
/// `path`, `model_format`, `variant`), then the optional `description` and
/// `error`. Unknown extra fields are ignored.
///
/// # Examples
///
/// ```rust
/// use modelcfg_core::validation::{ShapeViolation, validate};
/// use serde_json::json;
///
/// let record = validate(&json!({
///     "name": "sd1-onnx",
///     "base_model": "sd-1",
///     "type": "onnx",
///     "path": "/models/sd1.onnx",
///     "model_format": null,
///     "variant": "normal"
/// }))
/// .unwrap();
/// assert!(record.description.is_none());
///
/// let err = validate(&json!({
///     "name": "sd1-onnx",
///     "base_model": "sd-1",
///     "type": "onnx",
///     "path": "/models/sd1.onnx",
///     "model_format": "diffusers",
///     "variant": "normal"
/// }))
/// .unwrap_err();
/// assert_eq!(err.field, "model_format");
/// assert!(matches!(err.violation, ShapeViolation::NotNull { .. }));
/// ```
pub fn validate(candidate: &Value) -> Result<OnnxSd1ModelConfig, ShapeValidationError> {
    let fields = Fields::of(candidate)?;
    OnnxSd1ModelConfig::from_fields(&fields)
}

/// JSON type name used in error messages.
pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Typed accessors over the fields of a candidate object.
///
/// Every accessor reports failures against the field it was asked for.
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn of(candidate: &'a Value) -> Result<Self, ShapeValidationError> {
        match candidate {
            Value::Object(map) => Ok(Self { map }),
            other => Err(ShapeValidationError::new(
                ROOT_FIELD,
                ShapeViolation::NotAnObject {
                    found: json_kind(other),
                },
            )),
        }
    }

    fn get(&self, field: &'static str) -> Result<&'a Value, ShapeValidationError> {
        self.map
            .get(field)
            .ok_or_else(|| ShapeValidationError::missing(field))
    }

    fn as_str(field: &'static str, value: &'a Value) -> Result<&'a str, ShapeValidationError> {
        value.as_str().ok_or_else(|| {
            ShapeValidationError::new(
                field,
                ShapeViolation::WrongType {
                    expected: "string",
                    found: json_kind(value),
                },
            )
        })
    }

    /// A required string field.
    pub(crate) fn string(&self, field: &'static str) -> Result<&'a str, ShapeValidationError> {
        Self::as_str(field, self.get(field)?)
    }

    /// A required string field that must not be empty.
    pub(crate) fn non_empty(&self, field: &'static str) -> Result<String, ShapeValidationError> {
        let value = self.string(field)?;
        if value.is_empty() {
            return Err(ShapeValidationError::new(field, ShapeViolation::Empty));
        }
        Ok(value.to_owned())
    }

    /// An optional string field. Absent is `None`; an explicit `null` is a
    /// type error.
    pub(crate) fn optional_string(
        &self,
        field: &'static str,
    ) -> Result<Option<String>, ShapeValidationError> {
        self.map
            .get(field)
            .map(|value| Self::as_str(field, value).map(str::to_owned))
            .transpose()
    }

    fn as_member<T: SchemaEnum>(
        field: &'static str,
        value: &'a Value,
    ) -> Result<T, ShapeValidationError> {
        let raw = Self::as_str(field, value)?;
        T::parse(raw).ok_or_else(|| {
            ShapeValidationError::new(
                field,
                ShapeViolation::NotInEnum {
                    enumeration: T::NAME,
                    value: raw.to_owned(),
                    expected: T::expected_values(),
                },
            )
        })
    }

    /// A required member of a schema enumeration.
    pub(crate) fn member<T: SchemaEnum>(
        &self,
        field: &'static str,
    ) -> Result<T, ShapeValidationError> {
        Self::as_member(field, self.get(field)?)
    }

    /// An optional member of a schema enumeration.
    pub(crate) fn optional_member<T: SchemaEnum>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, ShapeValidationError> {
        self.map
            .get(field)
            .map(|value| Self::as_member(field, value))
            .transpose()
    }

    /// A required string field with a fixed value.
    pub(crate) fn tag(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<(), ShapeValidationError> {
        let found = self.string(field)?;
        if found == expected {
            Ok(())
        } else {
            Err(ShapeValidationError::new(
                field,
                ShapeViolation::TagMismatch {
                    expected,
                    found: found.to_owned(),
                },
            ))
        }
    }

    /// A required field whose value must be an explicit `null`.
    pub(crate) fn null(&self, field: &'static str) -> Result<(), ShapeValidationError> {
        match self.get(field)? {
            Value::Null => Ok(()),
            other => Err(ShapeValidationError::new(
                field,
                ShapeViolation::NotNull {
                    found: other.to_string(),
                },
            )),
        }
    }
}
