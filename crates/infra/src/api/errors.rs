//! Platform failure responses
//!
//! Builds a [`RequestError`] from a non-2xx response. Reading the body is
//! best effort: a body that is missing or not JSON still yields an error
//! carrying the status code.

use qbgeo_domain::RequestError;
use serde_json::Value;

/// Request error for `status` with whatever detail `body` carries.
///
/// `errors` is the body's `errors` array when present, else the body itself
/// when it is an array, else the body object as the single entry.
#[must_use]
pub fn request_error(status: u16, body: &[u8]) -> RequestError {
    let mut error = RequestError::from_status(status);

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(mut object)) => {
            error.message = text_member(&object, "message");
            error.description = text_member(&object, "description");
            error.errors = match object.remove("errors") {
                Some(Value::Array(errors)) => Some(errors),
                Some(other) => {
                    object.insert("errors".into(), other);
                    Some(vec![Value::Object(object)])
                }
                None => Some(vec![Value::Object(object)]),
            };
        }
        Ok(Value::Array(errors)) => error.errors = Some(errors),
        Ok(_) | Err(_) => {}
    }

    error
}

fn text_member(object: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}
