//! The dynamic value tree produced by reconstruction.
//!
//! A `Value`'s shape is fixed by the [`TypeDescriptor`] that directed the
//! parse, so callers that built the descriptor know exactly which variants
//! to expect and can use the typed accessors below without defensive
//! matching.
//!
//! [`TypeDescriptor`]: crate::descriptor::TypeDescriptor

use time::OffsetDateTime;

/// A reconstructed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Char(char),
    Bool(bool),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Temporal(OffsetDateTime),
    Array(Vec<Value>),
    Sequence(Vec<Value>),
    /// Insertion-ordered entries; a duplicate key in the input overwrites
    /// the earlier entry in place (last-wins).
    Mapping(Vec<(Value, Value)>),
    Object {
        class: String,
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Human-readable type name for error messages and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Char(_) => "Char",
            Value::Bool(_) => "Bool",
            Value::Short(_) => "Short",
            Value::Int(_) => "Int",
            Value::Long(_) => "Long",
            Value::Float(_) => "Float",
            Value::Double(_) => "Double",
            Value::Str(_) => "Str",
            Value::Temporal(_) => "Temporal",
            Value::Array(_) => "Array",
            Value::Sequence(_) => "Sequence",
            Value::Mapping(_) => "Mapping",
            Value::Object { .. } => "Object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a field on an Object value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object { fields, .. } => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Looks up a mapping entry by key.
    pub fn entry(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
