//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions, numeric parsing and missing-value detection.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use estate_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) if v.is_nan() => String::new(),
        AnyValue::Float64(v) if v.is_nan() => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Returns true when the value is absent: a null, or a floating-point NaN.
pub fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        _ => false,
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use estate_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or missing values.
///
/// Handles integer types, floating-point types, and string parsing.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    };
    number.filter(|v| !v.is_nan())
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Reads a column as optional strings, one entry per row.
///
/// Returns `None` when the column does not exist. Missing cells are `None`.
pub fn column_string_values(df: &DataFrame, name: &str) -> Option<Vec<Option<String>>> {
    let column = df.column(name).ok()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Some(values)
}

/// Reads a column as optional numbers, one entry per row.
///
/// Returns `None` when the column does not exist. Cells that are missing or
/// cannot be read as a number are `None`.
pub fn column_f64_values(df: &DataFrame, name: &str) -> Option<Vec<Option<f64>>> {
    let column = df.column(name).ok()?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Some(values)
}
