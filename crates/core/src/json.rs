//! Bridge from reconstructed values to JSON.
//!
//! The demonstration flow is reconstruct-then-pretty-print; this module
//! supplies the second half.

use crate::render;
use crate::value::Value;
use serde_json::{Map, Number};

/// Converts a reconstructed value into a `serde_json::Value`.
///
/// Temporal values become strings in the fixed rendering layout; mapping
/// keys are stringified the same way the renderer writes them. Non-finite
/// floats have no JSON representation and become null.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Char(c) => serde_json::Value::String(c.to_string()),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Short(n) => serde_json::Value::from(*n),
        Value::Int(n) => serde_json::Value::from(*n),
        Value::Long(n) => serde_json::Value::from(*n),
        Value::Float(n) => float_json(f64::from(*n)),
        Value::Double(n) => float_json(*n),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Temporal(_) => serde_json::Value::String(render::render(value)),
        Value::Array(items) | Value::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Mapping(entries) => {
            let mut map = Map::new();
            for (key, entry) in entries {
                map.insert(render::render(key), to_json(entry));
            }
            serde_json::Value::Object(map)
        }
        Value::Object { fields, .. } => {
            let mut map = Map::new();
            for (name, field) in fields {
                map.insert(name.clone(), to_json(field));
            }
            serde_json::Value::Object(map)
        }
    }
}

/// Pretty-prints a reconstructed value as JSON.
pub fn to_json_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(&to_json(value)).unwrap_or_default()
}

fn float_json(n: f64) -> serde_json::Value {
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
