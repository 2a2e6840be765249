//! The response envelope shared by every tikwm endpoint.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Query parameters, sent verbatim. Ordered only so diagnostics are stable.
pub type QueryParams = BTreeMap<String, String>;

/// Wire envelope: `{code, msg, processed_time, data}`.
///
/// `code == 0` means success. On any other code the payload is ignored. A
/// missing `code` reads as `0`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub processed_time: f64,
    pub data: Option<T>,
}

/// Envelope with the payload left as untyped JSON.
pub type RawEnvelope = Envelope<serde_json::Value>;

impl RawEnvelope {
    /// Decode raw bytes, leaving the payload untyped until the code is checked.
    pub fn from_slice(body: &[u8]) -> SdkResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check the status code and decode the payload as `T`.
    pub fn into_payload<T: DeserializeOwned>(
        self,
        method: &str,
        params: &QueryParams,
    ) -> SdkResult<T> {
        if self.code != 0 {
            return Err(SdkError::Api {
                msg: self.msg,
                code: self.code,
                method: method.to_string(),
                query: render_query(params),
            });
        }

        match self.data {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ => Err(SdkError::Decode(<serde_json::Error as serde::de::Error>::custom(format!(
                "envelope for {:?} has code 0 but no data",
                method
            )))),
        }
    }
}

/// Whether `body` is a JSON object that states its own integer `code`.
///
/// Used on non-success HTTP statuses: such a body is an application answer
/// and goes to the envelope check instead of the fallback.
pub(crate) fn has_code(body: &[u8]) -> bool {
    serde_json::from_slice::<serde_json::Value>(body)
        .map(|value| value.get("code").is_some_and(|code| code.is_i64()))
        .unwrap_or(false)
}

/// JSON rendering of the params for error messages, `???` if that fails.
pub(crate) fn render_query(params: &QueryParams) -> String {
    serde_json::to_string(params).unwrap_or_else(|_| "???".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: String,
    }

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_success_envelope_yields_payload() {
        let body = br#"{"code":0,"msg":"ok","processed_time":0.12,"data":{"id":"42"}}"#;
        let envelope = RawEnvelope::from_slice(body).unwrap();
        assert_eq!(envelope.processed_time, 0.12);
        let payload: Payload = envelope.into_payload("", &QueryParams::new()).unwrap();
        assert_eq!(payload, Payload { id: "42".to_string() });
    }

    #[test]
    fn test_error_envelope_carries_msg_code_method_and_query() {
        let body = br#"{"code":1,"msg":"not found","data":null}"#;
        let envelope = RawEnvelope::from_slice(body).unwrap();
        let err = envelope
            .into_payload::<Payload>("user/info", &params(&[("unique_id", "ghost")]))
            .unwrap_err();

        match &err {
            SdkError::Api { msg, code, method, query } => {
                assert_eq!(msg, "not found");
                assert_eq!(*code, 1);
                assert_eq!(method, "user/info");
                assert_eq!(query, r#"{"unique_id":"ghost"}"#);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        let text = err.to_string();
        assert!(text.contains("not found"));
        assert!(text.contains("(1)"));
        assert!(text.contains("user/info"));
    }

    #[test]
    fn test_error_envelope_ignores_mismatched_payload() {
        let body = br#"{"code":-1,"msg":"Url parsing is failed!","data":[]}"#;
        let err = RawEnvelope::from_slice(body)
            .unwrap()
            .into_payload::<Payload>("", &QueryParams::new())
            .unwrap_err();
        assert_eq!(err.api_code(), Some(-1));
    }

    #[test]
    fn test_success_without_data_is_decode_error() {
        let body = br#"{"code":0,"msg":"ok","data":null}"#;
        let err = RawEnvelope::from_slice(body)
            .unwrap()
            .into_payload::<Payload>("", &QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));

        let body = br#"{"code":0,"msg":"ok"}"#;
        let err = RawEnvelope::from_slice(body)
            .unwrap()
            .into_payload::<Payload>("", &QueryParams::new())
            .unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = RawEnvelope::from_slice(b"<html>busy</html>").unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[test]
    fn test_missing_code_reads_as_success() {
        let body = br#"{"msg":"ok","data":{"id":"7"}}"#;
        let envelope = RawEnvelope::from_slice(body).unwrap();
        assert_eq!(envelope.code, 0);
        let payload: Payload = envelope.into_payload("", &QueryParams::new()).unwrap();
        assert_eq!(payload.id, "7");
    }

    #[test]
    fn test_has_code() {
        assert!(has_code(br#"{"code":-1,"msg":"User doesn't exist","data":null}"#));
        assert!(has_code(br#"{"code":0}"#));
        assert!(!has_code(br#"{"error":"busy"}"#));
        assert!(!has_code(br#"{"code":"x"}"#));
        assert!(!has_code(b"<html>502 Bad Gateway</html>"));
        assert!(!has_code(b""));
    }

    #[test]
    fn test_render_query_is_sorted_json() {
        let rendered = render_query(&params(&[("url", "x"), ("hd", "1")]));
        assert_eq!(rendered, r#"{"hd":"1","url":"x"}"#);
    }
}
