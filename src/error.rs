//! Error types for network and DOM operations.

/// Errors raised while talking to the backend, the lookup service or the page.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required element or script global is missing from the page
    #[error("DOM error: {0}")]
    Dom(String),
}

impl ClientError {
    /// Wrap any displayable transport error.
    pub fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    /// Wrap a DOM failure, typically a `JsValue` formatted with `{:?}`.
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ClientError::Status {
            status: 503,
            url: "/submit_choice".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from /submit_choice");

        let err = ClientError::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
