//! The recursive object reconstructor — the universal parse entry point.
//!
//! Callers hand in raw text plus the descriptor of the target type and get
//! back a fully populated [`Value`] or the first error encountered. Nothing
//! partially built ever escapes: a failure while any field is being
//! resolved aborts the entire call.

use crate::build;
use crate::descriptor::{ObjectShape, PrimitiveKind, TypeDescriptor};
use crate::error::ReprError;
use crate::token;
use crate::value::Value;

/// Reconstructs a value of the described type from `text`.
///
/// Blank text yields [`Value::Null`], except a `Str` target which yields the
/// text unchanged. A primitive target delegates straight to the primitive
/// builder — note the `null` literal is not special-cased on this path, so
/// `reconstruct(Int, "null")` is a parse error while an object field or
/// container element rendered as `null` builds [`Value::Null`].
pub fn reconstruct(descriptor: &TypeDescriptor, text: &str) -> Result<Value, ReprError> {
    if text.trim().is_empty() {
        return Ok(match descriptor {
            TypeDescriptor::Primitive(PrimitiveKind::Str) => Value::Str(text.to_owned()),
            _ => Value::Null,
        });
    }

    match descriptor {
        TypeDescriptor::Primitive(_) => build::primitive_value(descriptor, text.trim()),
        TypeDescriptor::Object(shape) => reconstruct_object(shape, text.trim()),
        // Temporal and container targets go straight to their builders.
        _ => build::build_value(descriptor, text),
    }
}

fn reconstruct_object(shape: &ObjectShape, text: &str) -> Result<Value, ReprError> {
    let text = token::strip_class_prefix(shape.rendered_name(), text);
    let mut rest = token::strip_enclosing_brackets(text);

    if !shape.is_constructible() {
        return Err(ReprError::Instantiation {
            class: shape.rendered_name().to_owned(),
        });
    }

    // Fresh instance: every declared slot starts out null, in declaration
    // order, and input assignments overwrite slots by position.
    let mut fields: Vec<(String, Value)> = shape
        .fields()
        .iter()
        .map(|slot| (slot.name.clone(), Value::Null))
        .collect();

    while !rest.is_empty() {
        let token = token::split_token(rest)?;
        if token.trim().is_empty() {
            break;
        }
        rest = token::consume_token(rest, token);

        let (name, raw_value) = token::parse_assignment(token)?;
        let position = match shape.slot_index(name) {
            Some(position) => position,
            None => {
                return Err(ReprError::UnknownField {
                    class: shape.rendered_name().to_owned(),
                    field: name.to_owned(),
                })
            }
        };
        let slot = &shape.fields()[position];
        if !slot.writable {
            return Err(ReprError::Write {
                class: shape.rendered_name().to_owned(),
                field: name.to_owned(),
            });
        }

        fields[position].1 = build::build_value(&slot.descriptor, raw_value)?;
    }

    Ok(Value::Object {
        class: shape.rendered_name().to_owned(),
        fields,
    })
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
