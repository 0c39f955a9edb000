//! Input validation for callers of the converter
//!
//! The conversion pipeline itself never fails. Hosts (the CLI, the WASM
//! binding) use these helpers to reject unusable input before converting.

use crate::{Result, TemplateError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parse override data from JSON text
///
/// Blank input means "no overrides" and yields an empty object.
pub fn parse_data(json: &str) -> Result<Value> {
    if json.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(TemplateError::InvalidData(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }

    Ok(value)
}

/// Reject blank templates
pub fn require_template(template: &str) -> Result<&str> {
    if template.trim().is_empty() {
        return Err(TemplateError::EmptyTemplate);
    }
    Ok(template)
}

/// Read a template file fully into memory
pub fn read_template<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = fs::read_to_string(path)?;
    require_template(&content)?;
    Ok(content)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
