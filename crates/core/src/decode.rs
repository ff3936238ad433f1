//! Tolerant JSON field access for loosely-typed backend payloads.
//!
//! The backend's field values are inconsistent across server versions and
//! locales: a quantity may arrive as `3`, `"3"`, `3.0`, or be missing; a
//! dimension may use `.` or `,` as decimal separator. The coercion helpers
//! here absorb those shapes so row mappers never fail on a single odd field.
//!
//! List decoding follows the same philosophy one level up: a list payload may
//! be a JSON array, a single bare object, or blank, and individual malformed
//! elements are skipped rather than failing the whole parse. A top-level
//! syntax error, however, is reported as [`DecodeError::Syntax`] so callers
//! can tell a corrupt payload apart from a legitimately empty dataset.

use serde_json::Value;

/// Errors from the decoding layer.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The top-level payload is not valid JSON at all.
    #[error("malformed JSON payload: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Read `key` as an `i32`, accepting numbers and integer strings.
///
/// Absent, null, or unparseable values yield `default`. Never fails.
pub fn coerce_i32(obj: &Value, key: &str, default: i32) -> i32 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|v| v as i32)
            .or_else(|| n.as_f64().map(|v| v as i32))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Read `key` as an `i64`, accepting numbers and integer strings.
///
/// Absent, null, or unparseable values yield `default`. Never fails.
pub fn coerce_i64(obj: &Value, key: &str, default: i64) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Read `key` as an `f64`, distinguishing present from absent.
///
/// Numeric strings are trimmed and may use `,` as decimal separator
/// (older server locales). Absent, null, or unparseable values yield `None`.
pub fn coerce_f64(obj: &Value, key: &str) -> Option<f64> {
    match obj.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Like [`coerce_f64`], but tries several keys and returns the first hit.
///
/// Used for fields whose name drifted across server versions
/// (e.g. `laenge` vs. `length`).
pub fn coerce_f64_any(obj: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| coerce_f64(obj, k))
}

/// Read `key` as a string; absent, null, or non-string values yield `""`.
pub fn string_of(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Like [`string_of`], but tries several keys and returns the first
/// non-empty hit.
pub fn string_of_any(obj: &Value, keys: &[&str]) -> String {
    keys.iter()
        .map(|k| string_of(obj, k))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Read `key` as a bool; absent, null, or non-bool values yield `default`.
pub fn bool_of(obj: &Value, key: &str, default: bool) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        _ => default,
    }
}

/// Decode a raw payload that may be a JSON array or a single bare object
/// into a list of rows.
///
/// `row` maps one JSON object to a record; returning `None` skips that
/// element. Non-object array elements are skipped as well, preserving the
/// order of the survivors. A blank payload decodes to an empty list; a
/// top-level syntax error is returned as [`DecodeError::Syntax`].
pub fn decode_list<T>(
    raw: &str,
    row: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>, DecodeError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(text)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .filter(|v| v.is_object())
            .filter_map(&row)
            .collect(),
        obj @ Value::Object(_) => row(&obj).into_iter().collect(),
        // Valid JSON but not a usable shape (scalar at top level).
        _ => Vec::new(),
    })
}

/// Historical variant of [`decode_list`]: a top-level syntax error decodes
/// to an empty list instead of an error.
///
/// This preserves the original client's partial-availability contract.
/// Prefer [`decode_list`] anywhere the caller can surface the failure;
/// "empty" and "corrupt" are indistinguishable through this function.
pub fn decode_list_or_empty<T>(raw: &str, row: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    decode_list(raw, row).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
