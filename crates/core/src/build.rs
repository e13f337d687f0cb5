//! The type director and value builders.
//!
//! [`build_value`] selects the builder matching a target descriptor and runs
//! it over the raw text. Container builders recurse through the object
//! reconstructor for their elements, so arbitrarily nested shapes fall out
//! of the same dispatch.

use crate::descriptor::{PrimitiveKind, TypeDescriptor};
use crate::error::ReprError;
use crate::reconstruct::reconstruct;
use crate::token;
use crate::value::Value;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// The one accepted temporal layout, a US-locale rendering such as
/// `Wed Dec 15 10:30:00 +0000 2021`. Any other layout is a parse error.
const TEMPORAL_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute] [year]"
);

// ──────────────────────────────────────────────
// Type director
// ──────────────────────────────────────────────

/// Builds a value for `raw` as directed by `descriptor`.
///
/// Blank text and the case-insensitive literal `null` both build
/// [`Value::Null`] — except for a `Str` target, where the raw text itself is
/// the result. That asymmetry lets empty strings survive a round trip.
pub fn build_value(descriptor: &TypeDescriptor, raw: &str) -> Result<Value, ReprError> {
    if raw.trim().is_empty() || raw.eq_ignore_ascii_case("null") {
        return Ok(match descriptor {
            TypeDescriptor::Primitive(PrimitiveKind::Str) => Value::Str(raw.to_owned()),
            _ => Value::Null,
        });
    }

    match descriptor {
        TypeDescriptor::Primitive(_) => primitive_value(descriptor, raw),
        TypeDescriptor::Temporal => temporal_value(raw),
        TypeDescriptor::Array(element) => array_value(element, raw),
        TypeDescriptor::Sequence(element) => sequence_value(element, raw),
        TypeDescriptor::Mapping(key, value) => mapping_value(key, value, raw),
        TypeDescriptor::Object(_) => reconstruct(descriptor, raw),
    }
}

// ──────────────────────────────────────────────
// Primitive and temporal builders
// ──────────────────────────────────────────────

/// Parses `raw` by the primitive kind's canonical literal rule.
///
/// Mapping keys route through here with the mapping's declared key
/// descriptor, so a non-primitive descriptor is reachable and reports
/// itself as unsupported rather than panicking.
pub(crate) fn primitive_value(
    descriptor: &TypeDescriptor,
    raw: &str,
) -> Result<Value, ReprError> {
    let kind = match descriptor {
        TypeDescriptor::Primitive(kind) => *kind,
        other => {
            return Err(ReprError::UnsupportedType {
                kind: other.kind_name().to_owned(),
            })
        }
    };

    match kind {
        PrimitiveKind::Char => raw
            .chars()
            .next()
            .map(Value::Char)
            .ok_or_else(|| parse_error(kind, raw)),
        PrimitiveKind::Bool => raw
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Short => raw
            .parse::<i16>()
            .map(Value::Short)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Int => raw
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Long => raw
            .parse::<i64>()
            .map(Value::Long)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Float => raw
            .parse::<f32>()
            .map(Value::Float)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Double => raw
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|_| parse_error(kind, raw)),
        PrimitiveKind::Str => Ok(Value::Str(raw.to_owned())),
    }
}

fn parse_error(kind: PrimitiveKind, raw: &str) -> ReprError {
    ReprError::Parse {
        kind: kind.name().to_owned(),
        text: raw.to_owned(),
    }
}

fn temporal_value(raw: &str) -> Result<Value, ReprError> {
    OffsetDateTime::parse(raw, TEMPORAL_FORMAT)
        .map(Value::Temporal)
        .map_err(|_| ReprError::Parse {
            kind: "Temporal".to_owned(),
            text: raw.to_owned(),
        })
}

// ──────────────────────────────────────────────
// Container builders
// ──────────────────────────────────────────────

fn array_value(element: &TypeDescriptor, raw: &str) -> Result<Value, ReprError> {
    let body = token::strip_pair(raw, '[', ']');
    // Pre-scan for the element count, mirroring fixed-size allocation.
    let mut count = 0usize;
    for token in token::tokens(body) {
        token?;
        count += 1;
    }

    let mut items = Vec::with_capacity(count);
    for token in token::tokens(body) {
        items.push(reconstruct(element, token?)?);
    }
    Ok(Value::Array(items))
}

fn sequence_value(element: &TypeDescriptor, raw: &str) -> Result<Value, ReprError> {
    let body = token::strip_pair(raw, '[', ']');
    let mut items = Vec::new();
    for token in token::tokens(body) {
        items.push(reconstruct(element, token?)?);
    }
    Ok(Value::Sequence(items))
}

fn mapping_value(
    key_descriptor: &TypeDescriptor,
    value_descriptor: &TypeDescriptor,
    raw: &str,
) -> Result<Value, ReprError> {
    let body = token::strip_pair(raw, '{', '}');
    let mut entries: Vec<(Value, Value)> = Vec::new();
    for token in token::tokens(body) {
        let (key_text, value_text) = token::parse_assignment(token?)?;
        // Keys are parsed by the primitive builder against the declared key
        // descriptor; values take the full reconstruction path even when the
        // value type is itself primitive.
        let key = primitive_value(key_descriptor, key_text.trim())?;
        let value = reconstruct(value_descriptor, value_text.trim())?;
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }
    Ok(Value::Mapping(entries))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
