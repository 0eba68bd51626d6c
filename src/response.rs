//! Typed decoding of completed HTTP responses.
//!
//! The transport buffers status, headers and body before decoding, so this
//! module is a pure transform: `(HttpResponse, shape) -> Result<T>`. A
//! failure status or an undecodable body becomes a [`ServiceError`] carrying
//! the status code; callers never see a bare serde error or a panic.

use crate::error::ServiceError;
use crate::{Error, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8 text, lossily converted.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// First header with the given name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Decode a response body into the expected result shape.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if !response.is_success() {
        return Err(failure(response));
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        tracing::debug!(status = response.status, error = %e, "response body did not match expected shape");
        Error::Service(ServiceError {
            status: response.status,
            message: format!("failed to decode response body: {e}"),
        })
    })
}

/// Decode an operation that returns no payload (DELETE and friends).
pub fn decode_unit(response: &HttpResponse) -> Result<()> {
    if !response.is_success() {
        return Err(failure(response));
    }
    Ok(())
}

fn failure(response: &HttpResponse) -> Error {
    let message = error_message(&response.body);
    tracing::debug!(status = response.status, message = %message, "service returned a failure status");
    Error::Service(ServiceError {
        status: response.status,
        message,
    })
}

/// Extract a human-readable message from a failure body.
///
/// The platform services are inconsistent about the field name, so the
/// conventional candidates are probed in order before falling back to the
/// raw body text.
fn error_message(body: &Bytes) -> String {
    if body.is_empty() {
        return "no response body".to_string();
    }
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        for field in ["error", "error_message", "message", "code_description"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Greeting {
        text: String,
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Bytes::from(body.to_string().into_bytes()),
        }
    }

    #[test]
    fn success_body_decodes_into_shape() {
        let greeting: Greeting = decode(&response(200, r#"{"text":"hello"}"#)).unwrap();
        assert_eq!(greeting.text, "hello");
    }

    #[test]
    fn failure_status_becomes_service_error() {
        let err = decode::<Greeting>(&response(400, r#"{"error":"bad version"}"#)).unwrap_err();
        match err {
            Error::Service(service) => {
                assert_eq!(service.status, 400);
                assert_eq!(service.message, "bad version");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn failure_with_arbitrary_body_still_carries_status() {
        let err = decode::<Greeting>(&response(400, "<html>nope</html>")).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("<html>nope</html>"));
    }

    #[test]
    fn unparseable_success_body_is_a_service_error_not_a_panic() {
        let err = decode::<Greeting>(&response(200, "not json")).unwrap_err();
        match err {
            Error::Service(service) => {
                assert_eq!(service.status, 200);
                assert!(service.message.contains("failed to decode"));
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[test]
    fn message_extraction_probes_conventional_fields() {
        let err =
            decode::<Greeting>(&response(500, r#"{"code_description":"server melted"}"#))
                .unwrap_err();
        assert!(err.to_string().contains("server melted"));
    }

    #[test]
    fn empty_failure_body_reports_placeholder() {
        let err = decode_unit(&response(503, "")).unwrap_err();
        assert!(err.to_string().contains("no response body"));
    }

    #[test]
    fn decode_unit_accepts_empty_success() {
        decode_unit(&response(204, "")).unwrap();
    }
}
