//! Transport layer: wire-format details (JSON encoding/decoding).

mod balance;
mod money;
mod send;

pub use balance::decode_balance_json_response;
pub use send::{encode_send_campaign_json, encode_send_sms_json};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

/// Decode a body that is handed back to the caller as-is.
///
/// An empty or non-JSON body (e.g. an HTML maintenance page) decodes to `null`.
pub fn decode_raw_json_response(json: &str) -> serde_json::Value {
    if json.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(json).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "response body is not JSON; returning null");
        serde_json::Value::Null
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn raw_decode_preserves_body() {
        let json = r#"{ "status": "error", "message": "not found", "data": null }"#;
        assert_eq!(
            decode_raw_json_response(json),
            json!({ "status": "error", "message": "not found", "data": null })
        );
    }

    #[test]
    fn raw_decode_maps_empty_body_to_null() {
        assert_eq!(decode_raw_json_response("  \n"), serde_json::Value::Null);
    }

    #[test]
    fn raw_decode_maps_non_json_body_to_null() {
        assert_eq!(
            decode_raw_json_response("<html>maintenance</html>"),
            serde_json::Value::Null
        );
        assert_eq!(decode_raw_json_response("{ not json }"), serde_json::Value::Null);
    }
}
