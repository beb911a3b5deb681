//! Error taxonomy for backend calls.
//!
//! Transport failures (no response, unexpected status, unreadable body) are
//! kept apart from domain failures, which arrive as `{"error": ...}` inside a
//! successful response.

use thiserror::Error;

pub const NO_RESPONSE_MESSAGE: &str = "Unable to connect to server";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The request never produced a response (network down, CORS, aborted)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("no response received: {0}")]
    NoResponse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Unable to connect to server")]
    NoResponse,
    #[error("An error occurred")]
    Status {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },
    #[error("An error occurred")]
    Decode(String),
}

impl From<TransportError> for HttpError {
    fn from(_: TransportError) -> Self {
        HttpError::NoResponse
    }
}

/// Failure of an operator action such as a disk space check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Transport(#[from] HttpError),
    #[error("{0}")]
    Domain(String),
}

/// Operator-facing text for a failed load, preferring the server's own message
pub fn describe(error: &HttpError) -> String {
    match error {
        HttpError::Status {
            message: Some(message),
            ..
        } if !message.trim().is_empty() => message.clone(),
        other => other.to_string(),
    }
}

/// Pull a `message` field out of an error response body
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_failure_messages() {
        assert_eq!(HttpError::NoResponse.to_string(), NO_RESPONSE_MESSAGE);
        assert_eq!(
            HttpError::Status {
                status: 500,
                message: None
            }
            .to_string(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            HttpError::Decode("expected value".to_string()).to_string(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_action_error_display() {
        assert_eq!(ActionError::Domain("bad path".to_string()).to_string(), "bad path");
        assert_eq!(
            ActionError::from(HttpError::NoResponse).to_string(),
            NO_RESPONSE_MESSAGE
        );
    }

    #[test]
    fn test_describe_prefers_server_message() {
        let error = HttpError::Status {
            status: 412,
            message: Some("Heap dump is not supported on this JVM".to_string()),
        };
        assert_eq!(describe(&error), "Heap dump is not supported on this JVM");

        let blank = HttpError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(describe(&blank), GENERIC_ERROR_MESSAGE);
        assert_eq!(describe(&HttpError::NoResponse), NO_RESPONSE_MESSAGE);
    }

    #[test]
    fn test_server_message() {
        assert_eq!(
            server_message(r#"{"message":"boom","stackTrace":"..."}"#),
            Some("boom".to_string())
        );
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
        assert_eq!(server_message(r#"{"message":3}"#), None);
    }
}
