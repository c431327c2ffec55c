//! Query-string rendering of request parameters

use serde_json::{Map, Value};
use url::Url;

/// Request query parameters, rendered in key order.
pub type Query = Map<String, Value>;

/// Append every non-null entry of `query` to `url`.
pub fn append_query(url: &mut Url, query: &Query) {
    let rendered: Vec<(&String, String)> =
        query.iter().filter_map(|(key, value)| Some((key, query_text(value)?))).collect();
    if rendered.is_empty() {
        return;
    }

    let mut pairs = url.query_pairs_mut();
    for (key, text) in rendered {
        pairs.append_pair(key, &text);
    }
}

/// Text form of a query value: strings verbatim, scalars via their display
/// form, arrays comma-joined, objects as compact JSON. `null` has no form.
#[must_use]
pub fn query_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> =
                items.iter().map(|item| query_text(item).unwrap_or_default()).collect();
            Some(parts.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}
