//! Credential and handshake message types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::AUTHENTICATE_ACTION;

/// Temporary bearer credential issued for one entity id.
///
/// The token is opaque. The expiration travels as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expiration: DateTime<Utc>,
}

impl Credential {
    /// Whether the credential can still be used at `now`.
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expiration
    }
}

/// Parameters of an authenticate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeParameters {
    pub id: String,
}

/// Request sent to the owning process: `{action: "authenticate", parameters: {id}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandshakeRequest {
    pub action: String,
    pub parameters: HandshakeParameters,
}

impl HandshakeRequest {
    pub fn authenticate(entity_id: impl Into<String>) -> Self {
        Self {
            action: AUTHENTICATE_ACTION.to_string(),
            parameters: HandshakeParameters { id: entity_id.into() },
        }
    }
}

/// Reply from the owning process.
///
/// A non-empty `error` member wins over `parameters`; an empty, `false` or
/// `null` error counts as absent. Anything that is neither shape is kept as
/// [`HandshakeReply::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HandshakeReply {
    Failure { error: String },
    Issued { parameters: Credential },
    Unrecognized(Value),
}

impl From<Value> for HandshakeReply {
    fn from(value: Value) -> Self {
        if let Some(error) = value.get("error").filter(|error| is_set(error)) {
            let error = error.as_str().map_or_else(|| error.to_string(), str::to_string);
            return Self::Failure { error };
        }

        let issued = value
            .get("parameters")
            .and_then(|parameters| Credential::deserialize(parameters).ok());
        match issued {
            Some(parameters) => Self::Issued { parameters },
            None => Self::Unrecognized(value),
        }
    }
}

impl<'de> Deserialize<'de> for HandshakeReply {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}

fn is_set(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64() != Some(0.0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn request_uses_the_authenticate_action() {
        let request = HandshakeRequest::authenticate("bqx7yz");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "action": "authenticate", "parameters": { "id": "bqx7yz" } })
        );
    }

    #[test]
    fn reply_shapes_are_distinguished() {
        let failure: HandshakeReply =
            serde_json::from_value(json!({ "error": "Not signed in" })).unwrap();
        assert_eq!(failure, HandshakeReply::Failure { error: "Not signed in".into() });

        let issued: HandshakeReply = serde_json::from_value(
            json!({ "parameters": { "token": "abc", "expiration": 1_700_000_000_000_i64 } }),
        )
        .unwrap();
        let expected = Credential {
            token: "abc".into(),
            expiration: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        };
        assert_eq!(issued, HandshakeReply::Issued { parameters: expected });

        let other: HandshakeReply = serde_json::from_value(json!({ "status": "ok" })).unwrap();
        assert!(matches!(other, HandshakeReply::Unrecognized(_)));
    }

    #[test]
    fn error_member_wins_over_parameters() {
        let reply: HandshakeReply = serde_json::from_value(json!({
            "error": "denied",
            "parameters": { "token": "abc", "expiration": 1 }
        }))
        .unwrap();
        assert_eq!(reply, HandshakeReply::Failure { error: "denied".into() });
    }

    #[test]
    fn empty_error_member_is_ignored() {
        let reply: HandshakeReply = serde_json::from_value(json!({
            "error": "",
            "parameters": { "token": "abc", "expiration": 1 }
        }))
        .unwrap();
        let HandshakeReply::Issued { parameters } = reply else {
            panic!("expected an issued credential, got {reply:?}");
        };
        assert_eq!(parameters.token, "abc");

        let reply: HandshakeReply = serde_json::from_value(json!({ "error": null })).unwrap();
        assert!(matches!(reply, HandshakeReply::Unrecognized(_)));
    }

    #[test]
    fn credential_validity_is_strictly_before_expiration() {
        let expiration = Utc.timestamp_millis_opt(10_000).unwrap();
        let credential = Credential { token: "t".into(), expiration };
        assert!(credential.is_valid_at(Utc.timestamp_millis_opt(9_999).unwrap()));
        assert!(!credential.is_valid_at(expiration));
    }
}
