//! Polars `AnyValue` helpers for the reconciliation engines.
//!
//! Two equality strategies live here. The positional comparator matches
//! values by rendered string form, so `1`, `1.0`, and `"1"` agree; the
//! key-join reconciler uses typed equality, where a number never equals its
//! string rendering.

use polars::prelude::AnyValue;

use recon_model::Equality;

/// True when a cell counts as missing: null, or a blank string.
pub fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Render a cell for display and for loose string comparison.
///
/// Nulls render as the empty string; floats drop trailing zeros so that
/// `25.0` and the integer `25` share one form.
pub fn render_value(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(*v)),
        AnyValue::Float64(v) => format_numeric(*v),
        AnyValue::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Format a float without trailing zeros: `1.50` renders as `1.5`, `1.0` as `1`.
pub fn format_numeric(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        rendered
    }
}

/// Numeric view of a cell. Strings parse (`"2.5"` is numeric); everything
/// else that is not a numeric dtype is `None`.
pub fn as_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Numeric view restricted to numeric dtypes; string cells never qualify.
fn numeric_dtype_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::String(_) | AnyValue::StringOwned(_) => None,
        other => as_f64(other),
    }
}

fn text<'a>(value: &'a AnyValue<'a>) -> Option<&'a str> {
    match value {
        AnyValue::String(s) => Some(s),
        AnyValue::StringOwned(s) => Some(s.as_str()),
        _ => None,
    }
}

pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Typed equality over two cells. Missing never equals anything, numeric
/// dtypes compare by value across int/float width, strings compare as text,
/// and the classes never mix.
pub fn typed_equal(left: &AnyValue<'_>, right: &AnyValue<'_>) -> bool {
    if is_missing(left) || is_missing(right) {
        return false;
    }
    match (numeric_dtype_f64(left), numeric_dtype_f64(right)) {
        (Some(a), Some(b)) => a == b,
        (None, None) => match (text(left), text(right)) {
            (Some(a), Some(b)) => a.trim() == b.trim(),
            _ => match (left, right) {
                (AnyValue::Boolean(a), AnyValue::Boolean(b)) => a == b,
                _ => render_value(left) == render_value(right),
            },
        },
        _ => false,
    }
}

/// Dispatch on the named equality strategy.
pub fn values_equal(strategy: Equality, left: &AnyValue<'_>, right: &AnyValue<'_>) -> bool {
    match strategy {
        Equality::LooseString => render_value(left) == render_value(right),
        Equality::Typed => typed_equal(left, right),
    }
}
