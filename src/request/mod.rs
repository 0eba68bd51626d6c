//! Fluent construction of outgoing requests.
//!
//! A [`RequestBuilder`] accumulates verb, target, query arguments, headers
//! and at most one body representation, then freezes into an immutable
//! [`RequestDescriptor`] for dispatch. Malformed input (empty argument key,
//! conflicting bodies, invalid URL) is reported synchronously from
//! [`RequestBuilder::build`], before any network activity.

mod multipart;
mod value;

pub use multipart::{media_type_from_extension, sniff_media_type, Part, OCTET_STREAM};
pub use value::ArgValue;

use crate::auth::Credential;
use crate::{Error, Result};
use bytes::Bytes;
use serde::Serialize;
use url::Url;

/// HTTP verbs the platform endpoints use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Exactly one body representation per request.
#[derive(Debug, Clone)]
pub enum Body {
    /// JSON document sent as `application/json`.
    Json(serde_json::Value),
    /// Raw byte payload with an explicit content type.
    Raw { data: Bytes, content_type: String },
    /// Multipart form of named parts.
    Form(Vec<Part>),
}

impl Body {
    fn kind(&self) -> &'static str {
        match self {
            Body::Json(_) => "JSON body",
            Body::Raw { .. } => "raw body",
            Body::Form(_) => "form data",
        }
    }
}

/// A fully specified, not-yet-dispatched request.
///
/// Immutable; produced by [`RequestBuilder::build`] and consumed by the
/// transport.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    url: Url,
    arguments: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Body>,
}

impl RequestDescriptor {
    pub fn method(&self) -> Method {
        self.method
    }

    /// Target URL, without the query arguments (those are attached at
    /// dispatch).
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Query arguments in insertion order, one entry per key.
    pub fn arguments(&self) -> &[(String, String)] {
        &self.arguments
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Value of the named query argument, if set.
    pub fn argument(&self, key: &str) -> Option<&str> {
        self.arguments
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Incremental request construction.
///
/// Setter order does not matter. The first malformed input is remembered and
/// reported from [`build`](Self::build), which keeps the fluent chain free
/// of `Result` plumbing while still failing before dispatch.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    arguments: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Body>,
    error: Option<Error>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        RequestBuilder {
            method,
            url: url.into(),
            arguments: Vec::new(),
            headers: Vec::new(),
            body: None,
            error: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Attach the `Authorization` header for this credential.
    pub fn with_authentication(self, credential: &Credential) -> Self {
        self.with_header("Authorization", credential.authorization_header())
    }

    /// Append a query argument.
    ///
    /// Repeating a key overwrites the previous value in place; an empty
    /// collection value omits the argument entirely.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        let key = key.into();
        if key.is_empty() {
            self.record_error(Error::empty_argument("argument key"));
            return self;
        }
        let Some(rendered) = value.into().into_inner() else {
            return self;
        };
        match self.arguments.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = rendered,
            None => self.arguments.push((key, rendered)),
        }
        self
    }

    /// Set a header; repeating a name overwrites.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Set a JSON body serialized from a typed record.
    pub fn with_json_body<T: Serialize>(mut self, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.set_body(Body::Json(value)),
            Err(e) => self.record_error(Error::invalid_argument("body", e.to_string())),
        }
        self
    }

    /// Set a raw byte body with the given content type.
    pub fn with_raw_body(mut self, data: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        self.set_body(Body::Raw {
            data: data.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Set a multipart form body from the given parts.
    pub fn with_form_data(mut self, parts: Vec<Part>) -> Self {
        if parts.is_empty() {
            self.record_error(Error::invalid_argument(
                "form data",
                "at least one part is required",
            ));
            return self;
        }
        self.set_body(Body::Form(parts));
        self
    }

    /// Append one part to the multipart form, starting one if necessary.
    pub fn add_part(mut self, part: Part) -> Self {
        match self.body.take() {
            None => self.body = Some(Body::Form(vec![part])),
            Some(Body::Form(mut parts)) => {
                parts.push(part);
                self.body = Some(Body::Form(parts));
            }
            Some(other) => {
                let message = format!("cannot add form data to a request with a {}", other.kind());
                self.body = Some(other);
                self.record_error(Error::invalid_argument("body", message));
            }
        }
        self
    }

    /// Freeze into an immutable descriptor, surfacing any construction
    /// error recorded along the way.
    pub fn build(self) -> Result<RequestDescriptor> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let url = Url::parse(&self.url)
            .map_err(|e| Error::invalid_argument("url", format!("{}: {e}", self.url)))?;
        Ok(RequestDescriptor {
            method: self.method,
            url,
            arguments: self.arguments,
            headers: self.headers,
            body: self.body,
        })
    }

    fn set_body(&mut self, body: Body) {
        if let Some(existing) = &self.body {
            self.record_error(Error::invalid_argument(
                "body",
                format!(
                    "request already has a {}; cannot also set a {}",
                    existing.kind(),
                    body.kind()
                ),
            ));
            return;
        }
        self.body = Some(body);
    }

    fn record_error(&mut self, error: Error) {
        // First error wins; later ones are symptoms of the same misuse.
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_write_wins_for_repeated_argument_keys() {
        let descriptor = RequestBuilder::get("https://example.test/v1/models")
            .with_argument("version", "2016-01-01")
            .with_argument("version", "2016-05-19")
            .build()
            .unwrap();
        assert_eq!(descriptor.argument("version"), Some("2016-05-19"));
        assert_eq!(descriptor.arguments().len(), 1);
    }

    #[test]
    fn empty_collection_argument_is_omitted() {
        let empty: &[&str] = &[];
        let descriptor = RequestBuilder::get("https://example.test/v3/tone")
            .with_argument("tones", empty)
            .build()
            .unwrap();
        assert_eq!(descriptor.argument("tones"), None);
    }

    #[test]
    fn json_and_form_bodies_are_mutually_exclusive() {
        let err = RequestBuilder::post("https://example.test/v1/recognize")
            .with_json_body(&json!({"text": "hello"}))
            .with_form_data(vec![Part::bytes("upload", vec![1, 2, 3])])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "body"));
    }

    #[test]
    fn add_part_refuses_to_mix_with_raw_body() {
        let err = RequestBuilder::post("https://example.test/v1/recognize")
            .with_raw_body(vec![0u8; 4], "audio/wav")
            .add_part(Part::bytes("upload", vec![1, 2, 3]))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "body"));
    }

    #[test]
    fn add_part_accumulates_form_parts() {
        let descriptor = RequestBuilder::post("https://example.test/v1/recognize")
            .add_part(Part::json("metadata", &json!({"part_content_type": "audio/wav"})))
            .add_part(Part::bytes("upload", vec![1, 2, 3]))
            .build()
            .unwrap();
        match descriptor.body() {
            Some(Body::Form(parts)) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0].name(), "metadata");
                assert_eq!(parts[1].name(), "upload");
            }
            other => panic!("expected form body, got {other:?}"),
        }
    }

    #[test]
    fn invalid_url_fails_at_build() {
        let err = RequestBuilder::get("not a url").build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { ref name, .. } if name == "url"));
    }

    #[test]
    fn empty_argument_key_fails_at_build() {
        let err = RequestBuilder::get("https://example.test/")
            .with_argument("", "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn authentication_attaches_basic_header() {
        let cred = Credential::basic("user", "pass").unwrap();
        let descriptor = RequestBuilder::get("https://example.test/v1/models")
            .with_authentication(&cred)
            .build()
            .unwrap();
        let auth = descriptor
            .headers()
            .iter()
            .find(|(n, _)| n == "Authorization")
            .map(|(_, v)| v.as_str());
        assert_eq!(auth, Some("Basic dXNlcjpwYXNz"));
    }
}
