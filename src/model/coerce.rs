//! The uniform numeric coercion rule.

use serde_json::Value;

/// Returns `value` unchanged if it is finite, otherwise `0.0`.
#[must_use]
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces an optional JSON value to a finite number.
///
/// Only JSON numbers count. Strings, booleans, `null`, containers and
/// missing values all map to `0.0`, even when a string looks numeric.
#[must_use]
pub fn coerce_value(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).map_or(0.0, coerce)
}
