//! Recording adapters that capture interactions to cassettes.

pub mod source;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use source::RecordingSource;

/// Record a `Result<T, E>` interaction using the ok/err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": e.to_string()}`
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);

    let output_json = match result {
        Ok(v) => match serde_json::to_value(v) {
            Ok(inner) => serde_json::json!({ "ok": inner }),
            Err(e) => serde_json::json!({ "err": format!("unrecordable output: {e}") }),
        },
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    if let Ok(mut guard) = recorder.lock() {
        guard.record(port, method, input_json, output_json);
    }
}
