//! The paired textual renderer.
//!
//! Produces exactly the rendering convention the reconstructor reverses:
//! `ClassName(field=value, ...)` objects, `[a, b]` arrays and sequences,
//! `{k=v}` mappings, bare unquoted strings, `null` for null fields. Any
//! value built by [`reconstruct`] against a descriptor renders back to text
//! that reconstructs equal under the same descriptor.
//!
//! [`reconstruct`]: crate::reconstruct::reconstruct

use crate::value::Value;
use time::{Month, OffsetDateTime, Weekday};

/// Renders a value in the debug-representation convention.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Char(c) => c.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Short(n) => n.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Long(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Double(n) => n.to_string(),
        Value::Str(s) => s.clone(),
        Value::Temporal(t) => render_temporal(t),
        Value::Array(items) | Value::Sequence(items) => {
            let inner: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Mapping(entries) => {
            let inner: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}={}", render(key), render(value)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
        Value::Object { class, fields } => {
            let inner: Vec<String> = fields
                .iter()
                .map(|(name, value)| format!("{}={}", name, render(value)))
                .collect();
            format!("{}({})", class, inner.join(", "))
        }
    }
}

// Formatted by hand rather than through a format description so rendering
// stays infallible.
fn render_temporal(t: &OffsetDateTime) -> String {
    let offset_minutes = t.offset().whole_minutes();
    let sign = if offset_minutes < 0 { '-' } else { '+' };
    format!(
        "{} {} {:02} {:02}:{:02}:{:02} {}{:02}{:02} {}",
        weekday_abbrev(t.weekday()),
        month_abbrev(t.month()),
        t.day(),
        t.hour(),
        t.minute(),
        t.second(),
        sign,
        (offset_minutes / 60).abs(),
        (offset_minutes % 60).abs(),
        t.year()
    )
}

fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
