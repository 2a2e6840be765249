//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The body was fetched but is not a valid envelope, or the payload does
    /// not match the endpoint's record type.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope `code` was non-zero.
    #[error("tikwm error: {msg} ({code}) [{method}, query: {query}]")]
    Api {
        msg: String,
        code: i64,
        method: String,
        query: String,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl SdkError {
    /// Upstream status code for application errors.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            SdkError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Transport-layer errors. Any of these triggers the fallback attempt.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}: {body}")]
    Status { status: u16, url: String, body: String },

    #[error("Request panicked: {0}")]
    Panic(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_context() {
        let err = SdkError::Api {
            msg: "not found".to_string(),
            code: 1,
            method: "user/info".to_string(),
            query: r#"{"unique_id":"nobody"}"#.to_string(),
        };
        let text = err.to_string();
        assert_eq!(
            text,
            r#"tikwm error: not found (1) [user/info, query: {"unique_id":"nobody"}]"#
        );
        assert_eq!(err.api_code(), Some(1));
    }

    #[test]
    fn test_http_error_wraps_into_sdk_error() {
        let err: SdkError = HttpError::Panic("boom".to_string()).into();
        assert!(matches!(err, SdkError::Http(HttpError::Panic(_))));
        assert_eq!(err.to_string(), "HTTP error: Request panicked: boom");
        assert_eq!(err.api_code(), None);
    }
}
