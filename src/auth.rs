//! Credential holder attached to every request issued by a configured client.

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Authentication material for a service client.
///
/// Immutable once constructed; empty fields are rejected up front so a
/// client can never dispatch with half-configured auth. Secrets are redacted
/// from `Debug` output and are never logged.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP Basic username/password pair.
    Basic { username: String, password: String },
    /// Single API key. Most services carry it as a Basic header with the key
    /// as username and an empty password; Visual Recognition carries it as
    /// an `api_key` query argument instead.
    ApiKey(String),
}

impl Credential {
    /// Basic-auth credential. Fails when either field is empty.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(Error::empty_argument("username"));
        }
        if password.is_empty() {
            return Err(Error::empty_argument("password"));
        }
        Ok(Credential::Basic { username, password })
    }

    /// API-key credential. Fails when the key is empty.
    pub fn api_key(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::empty_argument("api_key"));
        }
        Ok(Credential::ApiKey(key))
    }

    /// Render the `Authorization` header value for this credential.
    ///
    /// API keys use the key-as-username convention with an empty password.
    pub fn authorization_header(&self) -> String {
        let raw = match self {
            Credential::Basic { username, password } => format!("{username}:{password}"),
            Credential::ApiKey(key) => format!("{key}:"),
        };
        format!("Basic {}", BASE64.encode(raw))
    }

    /// The bare API key, when this credential is one.
    pub fn api_key_value(&self) -> Option<&str> {
        match self {
            Credential::ApiKey(key) => Some(key),
            Credential::Basic { .. } => None,
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credential::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
        }
    }
}
