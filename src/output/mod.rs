pub mod human;

use serde_json::{Value, json};

/// Standard JSON envelope.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

/// Success envelope that also carries non-fatal warnings (e.g. a failed
/// save). Warnings land in `data.warnings` and only when there are any.
pub fn success_with_warnings(command: &str, mut data: Value, warnings: &[String]) -> Value {
    if !warnings.is_empty()
        && let Some(obj) = data.as_object_mut()
    {
        obj.insert("warnings".into(), json!(warnings));
    }
    success(command, data)
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}
