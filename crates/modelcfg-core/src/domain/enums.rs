//! Schema enumerations shared by every model-configuration record.
//!
//! The string forms are the exact wire values emitted by the model API.
//! `serde` renames and [`SchemaEnum::as_str`] must agree; the tests below
//! check both directions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of wire identifiers.
///
/// Validation uses this to turn a JSON string into a member, and to name
/// the enumeration when the string is not part of it.
pub trait SchemaEnum: Sized + Copy + 'static {
    /// Name used in error messages (e.g. "base model type").
    const NAME: &'static str;

    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// The wire spelling of this member.
    fn as_str(self) -> &'static str;

    /// Parse a wire value. Matching is exact and case sensitive.
    fn parse(s: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == s)
    }

    /// All wire values joined with `", "`, for help and error text.
    fn expected_values() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

macro_rules! display_as_wire_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_str())
                }
            }
        )+
    };
}

/// Foundational model family a configuration is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseModelType {
    #[serde(rename = "sd-1")]
    Sd1,
    #[serde(rename = "sd-2")]
    Sd2,
    #[serde(rename = "sdxl")]
    Sdxl,
    #[serde(rename = "sdxl-refiner")]
    SdxlRefiner,
}

impl SchemaEnum for BaseModelType {
    const NAME: &'static str = "base model type";
    const VARIANTS: &'static [Self] = &[Self::Sd1, Self::Sd2, Self::Sdxl, Self::SdxlRefiner];

    fn as_str(self) -> &'static str {
        match self {
            Self::Sd1 => "sd-1",
            Self::Sd2 => "sd-2",
            Self::Sdxl => "sdxl",
            Self::SdxlRefiner => "sdxl-refiner",
        }
    }
}

/// Sub-role classification of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariantType {
    Normal,
    Inpaint,
    Depth,
}

impl SchemaEnum for ModelVariantType {
    const NAME: &'static str = "model variant type";
    const VARIANTS: &'static [Self] = &[Self::Normal, Self::Inpaint, Self::Depth];

    fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Inpaint => "inpaint",
            Self::Depth => "depth",
        }
    }
}

/// Load failure reported by the backend for a catalogued model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelError {
    /// The model artifact was not found at its recorded path.
    NotFound,
}

impl SchemaEnum for ModelError {
    const NAME: &'static str = "model error";
    const VARIANTS: &'static [Self] = &[Self::NotFound];

    fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
        }
    }
}

/// Value of the `type` tag, the first discriminant of [`ModelConfig`](super::ModelConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Onnx,
    Main,
}

impl SchemaEnum for ModelType {
    const NAME: &'static str = "model type";
    const VARIANTS: &'static [Self] = &[Self::Onnx, Self::Main];

    fn as_str(self) -> &'static str {
        match self {
            Self::Onnx => "onnx",
            Self::Main => "main",
        }
    }
}

/// Non-null values of the `model_format` tag.
///
/// ONNX records carry `null` in this position instead, see
/// [`NullFormat`](super::NullFormat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    Diffusers,
    Checkpoint,
}

impl SchemaEnum for ModelFormat {
    const NAME: &'static str = "model format";
    const VARIANTS: &'static [Self] = &[Self::Diffusers, Self::Checkpoint];

    fn as_str(self) -> &'static str {
        match self {
            Self::Diffusers => "diffusers",
            Self::Checkpoint => "checkpoint",
        }
    }
}

display_as_wire_value!(
    BaseModelType,
    ModelVariantType,
    ModelError,
    ModelType,
    ModelFormat,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_serde_matches_as_str<T>()
    where
        T: SchemaEnum + Serialize + for<'de> Deserialize<'de> + PartialEq + fmt::Debug,
    {
        for &variant in T::VARIANTS {
            let json = serde_json::to_value(variant).unwrap();
            assert_eq!(json, serde_json::Value::from(variant.as_str()));
            let back: T = serde_json::from_value(json).unwrap();
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn test_serde_spelling_matches_wire_values() {
        assert_serde_matches_as_str::<BaseModelType>();
        assert_serde_matches_as_str::<ModelVariantType>();
        assert_serde_matches_as_str::<ModelError>();
        assert_serde_matches_as_str::<ModelType>();
        assert_serde_matches_as_str::<ModelFormat>();
    }

    #[test]
    fn test_parse_known_values() {
        assert_eq!(BaseModelType::parse("sdxl-refiner"), Some(BaseModelType::SdxlRefiner));
        assert_eq!(ModelVariantType::parse("depth"), Some(ModelVariantType::Depth));
        assert_eq!(ModelError::parse("not_found"), Some(ModelError::NotFound));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(BaseModelType::parse("SD-1"), None);
        assert_eq!(BaseModelType::parse("sd1"), None);
        assert_eq!(ModelVariantType::parse(" normal"), None);
        assert_eq!(ModelFormat::parse(""), None);
    }

    #[test]
    fn test_display_uses_wire_value() {
        assert_eq!(BaseModelType::Sd2.to_string(), "sd-2");
        assert_eq!(ModelType::Onnx.to_string(), "onnx");
    }

    #[test]
    fn test_expected_values() {
        assert_eq!(ModelVariantType::expected_values(), "normal, inpaint, depth");
    }
}
