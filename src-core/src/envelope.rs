//! Two-stage decoding of gateway replies.
//!
//! The face detection and text extraction endpoints wrap their result as a
//! JSON string inside the JSON reply:
//!
//! ```json
//! { "statusCode": 200, "body": "{\"FaceDetails\": [...]}" }
//! ```
//!
//! Stage one reads the outer object, stage two parses the `body` string.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::DecodeError;

#[derive(Debug, Deserialize)]
struct Envelope {
    body: String,
}

/// Decode the inner result carried in the envelope's `body` field.
pub fn decode_inner<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let envelope: Envelope = serde_json::from_str(raw).map_err(DecodeError::Envelope)?;
    serde_json::from_str(&envelope.body).map_err(DecodeError::Inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_decodes_nested_body() {
        let raw = r#"{"statusCode": 200, "body": "{\"Blocks\": []}"}"#;
        let inner: Value = decode_inner(raw).unwrap();
        assert_eq!(inner, serde_json::json!({ "Blocks": [] }));
    }

    #[test]
    fn test_outer_stage_failure() {
        let err = decode_inner::<Value>("not json").unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn test_missing_body_is_envelope_failure() {
        let err = decode_inner::<Value>(r#"{"statusCode": 200}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn test_body_must_be_a_string() {
        // An already-decoded object is not the contract the gateways follow.
        let err = decode_inner::<Value>(r#"{"body": {"Blocks": []}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Envelope(_)));
    }

    #[test]
    fn test_inner_stage_failure() {
        let err = decode_inner::<Value>(r#"{"body": "{broken"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Inner(_)));
        assert!(err.to_string().starts_with("Malformed result payload"));
    }
}
