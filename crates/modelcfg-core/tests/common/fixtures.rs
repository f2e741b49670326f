//! Test fixtures for building model-configuration payloads.
//!
//! Builders return `serde_json::Value` so tests can remove or replace
//! individual fields before validating.

#![allow(dead_code)]

use serde_json::{Value, json};

/// Required fields of every ONNX record, in wire order.
pub const ONNX_REQUIRED_FIELDS: [&str; 6] =
    ["name", "base_model", "type", "path", "model_format", "variant"];

/// The minimal valid ONNX payload.
pub fn onnx_payload(name: &str) -> Value {
    json!({
        "name": name,
        "base_model": "sd-1",
        "type": "onnx",
        "path": format!("/models/{name}.onnx"),
        "model_format": null,
        "variant": "normal"
    })
}

/// An ONNX payload with both optional fields set.
pub fn full_onnx_payload(name: &str) -> Value {
    let mut value = onnx_payload(name);
    set(&mut value, "description", json!("Stable Diffusion 1.5 ONNX export"));
    set(&mut value, "error", json!("not_found"));
    value
}

pub fn diffusers_payload(name: &str, base_model: &str) -> Value {
    json!({
        "name": name,
        "base_model": base_model,
        "type": "main",
        "path": format!("/models/{name}"),
        "model_format": "diffusers",
        "variant": "normal"
    })
}

pub fn checkpoint_payload(name: &str) -> Value {
    json!({
        "name": name,
        "base_model": "sd-2",
        "type": "main",
        "path": format!("/models/{name}.ckpt"),
        "model_format": "checkpoint",
        "variant": "depth",
        "config": "configs/v2-midas-inference.yaml"
    })
}

/// Insert or replace one field.
pub fn set(value: &mut Value, field: &str, replacement: Value) {
    value
        .as_object_mut()
        .expect("fixture payloads are objects")
        .insert(field.to_string(), replacement);
}

/// Remove one field.
pub fn unset(value: &mut Value, field: &str) {
    value
        .as_object_mut()
        .expect("fixture payloads are objects")
        .remove(field);
}
