use serde_json::Value;

use crate::models::result::NormalizedResult;

/// Flattens a raw remote reply into the uniform result shape. The service
/// wraps the true payload in a single outer key; that envelope is unwrapped
/// here. Any reply that does not carry a canonical integer `ReturnCode`
/// (missing, string-typed, wrong shape) normalizes to a failure, never to a
/// silently repaired success.
pub fn normalize(raw: Value) -> NormalizedResult {
    let payload = match unwrap_envelope(raw) {
        Some(payload) => payload,
        None => return NormalizedResult::transport_failure("unexpected reply shape"),
    };

    match serde_json::from_value::<NormalizedResult>(payload) {
        Ok(result) => result,
        Err(e) => NormalizedResult::transport_failure(format!("unexpected reply shape: {}", e)),
    }
}

fn unwrap_envelope(raw: Value) -> Option<Value> {
    let object = match raw {
        Value::Object(object) => object,
        _ => return None,
    };
    let mut values = object.into_iter().map(|(_, value)| value);
    let payload = values.next()?;
    payload.is_object().then_some(payload)
}
