//! Integration tests for the ONNX model-configuration contract.
//!
//! Each test exercises the public validation entry points the way an API
//! client would: untyped JSON in, typed record or field-naming error out.

mod common;

use common::fixtures::{
    ONNX_REQUIRED_FIELDS, full_onnx_payload, onnx_payload, set, unset,
};
use modelcfg_core::{
    BaseModelType, ModelConfig, ModelError, ModelVariantType, OnnxSd1ModelConfig, SchemaEnum,
    ShapeViolation, validate,
};
use serde_json::{Value, json};

#[test]
fn test_example_payload_validates() {
    let record = validate(&onnx_payload("sd1-onnx")).unwrap();

    assert_eq!(record.name, "sd1-onnx");
    assert_eq!(record.base_model, BaseModelType::Sd1);
    assert_eq!(record.path, "/models/sd1-onnx.onnx");
    assert_eq!(record.variant, ModelVariantType::Normal);
    assert!(record.description.is_none());
    assert!(record.error.is_none());
}

#[test]
fn test_example_with_diffusers_format_fails() {
    let mut payload = onnx_payload("sd1-onnx");
    set(&mut payload, "model_format", json!("diffusers"));

    let err = validate(&payload).unwrap_err();
    assert_eq!(err.field, "model_format");
    assert!(matches!(err.violation, ShapeViolation::NotNull { .. }));
}

#[test]
fn test_round_trip_preserves_every_field() {
    for payload in [onnx_payload("minimal"), full_onnx_payload("full")] {
        let record = validate(&payload).unwrap();
        let serialized = serde_json::to_value(&record).unwrap();

        assert_eq!(serialized, payload);
        assert_eq!(validate(&serialized).unwrap(), record);
    }
}

#[test]
fn test_every_enum_combination_validates() {
    for &base in BaseModelType::VARIANTS {
        for &variant in ModelVariantType::VARIANTS {
            let mut payload = onnx_payload("combo");
            set(&mut payload, "base_model", json!(base.as_str()));
            set(&mut payload, "variant", json!(variant.as_str()));

            let record = validate(&payload).unwrap();
            assert_eq!(record.base_model, base);
            assert_eq!(record.variant, variant);
        }
    }
}

#[test]
fn test_missing_required_field_is_named() {
    for field in ONNX_REQUIRED_FIELDS {
        let mut payload = onnx_payload("sd1-onnx");
        unset(&mut payload, field);

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.violation, ShapeViolation::Missing);
    }
}

#[test]
fn test_required_fields_wrong_json_type_fail() {
    for field in ["name", "base_model", "path", "variant"] {
        for (replacement, found) in [
            (json!(7), "number"),
            (json!(["x"]), "array"),
            (json!({}), "object"),
        ] {
            let mut payload = onnx_payload("sd1-onnx");
            set(&mut payload, field, replacement);

            let err = validate(&payload).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(
                err.violation,
                ShapeViolation::WrongType {
                    expected: "string",
                    found
                },
                "{field} as {found}"
            );
        }
    }
}

#[test]
fn test_non_onnx_type_fails() {
    for other in ["main", "lora", "ONNX", ""] {
        let mut payload = onnx_payload("sd1-onnx");
        set(&mut payload, "type", json!(other));

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "type", "type {other:?}");
    }
}

#[test]
fn test_non_null_model_format_fails() {
    for other in [json!("checkpoint"), json!(""), json!(0), json!({})] {
        let mut payload = onnx_payload("sd1-onnx");
        set(&mut payload, "model_format", other.clone());

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, "model_format", "model_format {other}");
    }
}

#[test]
fn test_enum_members_outside_set_fail() {
    for (field, value) in [
        ("base_model", "sd-3"),
        ("base_model", "SDXL"),
        ("variant", "upscale"),
        ("variant", ""),
    ] {
        let mut payload = onnx_payload("sd1-onnx");
        set(&mut payload, field, json!(value));

        let err = validate(&payload).unwrap_err();
        assert_eq!(err.field, field);
        assert!(
            matches!(err.violation, ShapeViolation::NotInEnum { .. }),
            "{field}={value:?}: {err}"
        );
    }
}

#[test]
fn test_optional_fields_wrong_types_rejected() {
    for (field, value) in [
        ("description", json!(1)),
        ("description", json!(["a"])),
        ("description", Value::Null),
        ("error", json!(true)),
        ("error", json!("timeout")),
        ("error", Value::Null),
    ] {
        let mut payload = onnx_payload("sd1-onnx");
        set(&mut payload, field, value);

        assert_eq!(validate(&payload).unwrap_err().field, field);
    }
}

#[test]
fn test_optional_fields_present_accepted() {
    let record = validate(&full_onnx_payload("full")).unwrap();
    assert_eq!(
        record.description.as_deref(),
        Some("Stable Diffusion 1.5 ONNX export")
    );
    assert_eq!(record.error, Some(ModelError::NotFound));
}

#[test]
fn test_empty_description_is_not_absent() {
    let mut payload = onnx_payload("sd1-onnx");
    set(&mut payload, "description", json!(""));

    let record = validate(&payload).unwrap();
    assert_eq!(record.description.as_deref(), Some(""));
}

#[test]
fn test_serde_and_validate_agree() {
    let payload = full_onnx_payload("agree");
    let via_serde: OnnxSd1ModelConfig = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(via_serde, validate(&payload).unwrap());

    let mut broken = payload;
    unset(&mut broken, "variant");
    assert!(serde_json::from_value::<OnnxSd1ModelConfig>(broken).is_err());
}

#[test]
fn test_onnx_is_an_arm_of_the_union() {
    let config = ModelConfig::from_value(&onnx_payload("sd1-onnx")).unwrap();
    match config {
        ModelConfig::Onnx(record) => assert_eq!(record.name, "sd1-onnx"),
        ModelConfig::Diffusers(_) | ModelConfig::Checkpoint(_) => {
            panic!("onnx payload selected the wrong arm")
        }
    }
}
