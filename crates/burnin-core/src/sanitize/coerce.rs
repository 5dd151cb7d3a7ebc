//! Total coercion helpers: `(value, default) -> value`.
//!
//! Each function accepts an optional loosely-typed JSON value and always
//! returns something usable — never an error.  The sanitizer composes these
//! per field so that each fallback stays independently testable.

use serde_json::{Map, Value};

/// Attempts a float conversion of a loosely-typed value.
///
/// Accepted sources: JSON numbers, numeric strings (trimmed before parsing),
/// and booleans (`true` → 1.0, `false` → 0.0).  Non-finite results are
/// rejected so callers can clamp the output without NaN leaking through.
fn try_float(value: Option<&Value>) -> Option<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Coerces `value` to a float, falling back to `default` on any conversion
/// failure.
pub fn float_or(value: Option<&Value>, default: f64) -> f64 {
    try_float(value).unwrap_or(default)
}

/// Coerces `value` to an integer via float-then-truncate-toward-zero, so
/// `"24.9"` becomes 24 rather than being rejected.  Falls back to `default`
/// on conversion failure.  Range clamping is the caller's concern.
pub fn int_via_float_or(value: Option<&Value>, default: i64) -> i64 {
    match try_float(value) {
        // `as` saturates at the i64 bounds for out-of-range floats.
        Some(f) => f.trunc() as i64,
        None => default,
    }
}

/// Coerces `value` to a trimmed string.
///
/// Strings are trimmed; numbers and booleans take their display form; null,
/// arrays, and objects are unrecoverable and fall back to `default`.
///
/// The default applies only when coercion fails — a present-but-blank string
/// stays blank, which lets callers distinguish "missing" from "cleared".
pub fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

/// Resolves a string from an ordered list of candidate source keys.
///
/// The first key whose coerced value is non-empty after trimming wins;
/// otherwise `default` is returned.  This is how legacy field aliases are
/// modelled — adding another alias is a one-entry change at the call site.
pub fn first_string_of(map: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    for key in keys {
        let candidate = string_or(map.get(*key), "");
        if !candidate.is_empty() {
            return candidate;
        }
    }
    default.to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
