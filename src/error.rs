use crate::transport::TransportError;
use thiserror::Error;

/// Structured failure reported by a remote service endpoint.
///
/// Produced whenever the platform answers with a non-2xx status, or when a
/// 2xx body cannot be decoded into the expected result shape. The message is
/// extracted from the conventional error fields of the response body when
/// present, otherwise it carries the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// HTTP status code returned by the service.
    pub status: u16,
    /// Human-readable description extracted from the response.
    pub message: String,
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service error (HTTP {}): {}", self.status, self.message)
    }
}

/// Unified error type for the SDK.
///
/// Every fallible call surfaces exactly one of these variants; there is no
/// aggregated or wrapped multi-cause error. Input validation fails
/// synchronously before dispatch, transport and service failures are raised
/// where the call is awaited.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was malformed (empty credential field,
    /// empty required text, conflicting body representations). Raised before
    /// any network activity.
    #[error("invalid argument `{name}`: {message}")]
    InvalidArgument { name: String, message: String },

    /// The HTTP transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service answered with a failure status or an
    /// undecodable body.
    #[error("{0}")]
    Service(ServiceError),

    /// The call was cancelled through its cancel handle before completion.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    /// Invalid-argument error for the named parameter.
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Shorthand for the pervasive "must not be empty" validation.
    pub fn empty_argument(name: impl Into<String>) -> Self {
        Error::invalid_argument(name, "must not be empty")
    }

    /// Service failure with the given status and message.
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Error::Service(ServiceError {
            status,
            message: message.into(),
        })
    }

    /// Status code of the underlying service failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service(e) => Some(e.status),
            _ => None,
        }
    }
}
