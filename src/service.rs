//! Shared state and plumbing behind every service facade.
//!
//! A facade owns one [`ServiceClient`]: the service name, its endpoint base
//! URL (defaulted per service, overridable before the first request), the
//! optional credential, and the transport. Facade methods borrow it
//! immutably, so concurrent calls share only read-only configuration.

use crate::auth::Credential;
use crate::request::{Method, RequestBuilder};
use crate::response;
use crate::transport::{CancelToken, HttpTransport};
use crate::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub struct ServiceClient {
    name: &'static str,
    endpoint: String,
    credential: Option<Credential>,
    /// Attach an ApiKey credential as the `api_key` query argument instead
    /// of an Authorization header. Visual Recognition wants this.
    api_key_as_query: bool,
    transport: Arc<HttpTransport>,
}

impl ServiceClient {
    pub fn new(name: &'static str, default_endpoint: &str) -> Result<Self> {
        Ok(ServiceClient {
            name,
            endpoint: default_endpoint.trim_end_matches('/').to_string(),
            credential: None,
            api_key_as_query: false,
            transport: Arc::new(HttpTransport::new()?),
        })
    }

    /// Share an existing transport (one connection pool across facades).
    pub fn with_transport(
        name: &'static str,
        default_endpoint: &str,
        transport: Arc<HttpTransport>,
    ) -> Self {
        ServiceClient {
            name,
            endpoint: default_endpoint.trim_end_matches('/').to_string(),
            credential: None,
            api_key_as_query: false,
            transport,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Override the endpoint base URL. Call before issuing requests.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Store a validated basic-auth pair.
    pub fn set_basic_credentials(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<()> {
        self.credential = Some(Credential::basic(username, password)?);
        Ok(())
    }

    /// Store a validated API key.
    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.credential = Some(Credential::api_key(key)?);
        Ok(())
    }

    pub(crate) fn api_key_as_query(&mut self, enabled: bool) {
        self.api_key_as_query = enabled;
    }

    /// Start a request against `path`, pre-joined to the endpoint and with
    /// the credential attached per the service's convention.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.endpoint, path);
        let builder = match method {
            Method::Get => RequestBuilder::get(url),
            Method::Post => RequestBuilder::post(url),
            Method::Put => RequestBuilder::put(url),
            Method::Delete => RequestBuilder::delete(url),
        };
        match &self.credential {
            Some(credential) => match credential.api_key_value() {
                Some(key) if self.api_key_as_query => builder.with_argument("api_key", key),
                _ => builder.with_authentication(credential),
            },
            None => builder,
        }
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::Post, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::Delete, path)
    }

    /// Dispatch and decode into the expected result shape.
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let descriptor = builder.build()?;
        let response = self.transport.dispatch(&descriptor).await?;
        response::decode(&response)
    }

    /// Dispatch an operation with no response payload.
    pub async fn send_unit(&self, builder: RequestBuilder) -> Result<()> {
        let descriptor = builder.build()?;
        let response = self.transport.dispatch(&descriptor).await?;
        response::decode_unit(&response)
    }

    /// Dispatch and decode, racing the call against a cancel token.
    pub async fn send_cancellable<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        token: &mut CancelToken,
    ) -> Result<T> {
        let descriptor = builder.build()?;
        let response = self
            .transport
            .dispatch_cancellable(&descriptor, token)
            .await?;
        response::decode(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_override_trims_trailing_slash() {
        let mut client = ServiceClient::new("tone_analyzer", "https://example.test/api/").unwrap();
        assert_eq!(client.endpoint(), "https://example.test/api");
        client.set_endpoint("https://other.test/api/");
        assert_eq!(client.endpoint(), "https://other.test/api");
    }

    #[test]
    fn request_attaches_basic_credential_header() {
        let mut client = ServiceClient::new("speech_to_text", "https://example.test/api").unwrap();
        client.set_basic_credentials("user", "pass").unwrap();
        let descriptor = client.get("/v1/models").build().unwrap();
        assert_eq!(descriptor.url().as_str(), "https://example.test/api/v1/models");
        assert!(descriptor
            .headers()
            .iter()
            .any(|(n, v)| n == "Authorization" && v.starts_with("Basic ")));
    }

    #[test]
    fn api_key_goes_to_query_when_configured() {
        let mut client = ServiceClient::new("visual_recognition", "https://example.test/api").unwrap();
        client.api_key_as_query(true);
        client.set_api_key("k123").unwrap();
        let descriptor = client.get("/v3/classify").build().unwrap();
        assert_eq!(descriptor.argument("api_key"), Some("k123"));
        assert!(descriptor.headers().iter().all(|(n, _)| n != "Authorization"));
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let mut client = ServiceClient::new("speech_to_text", "https://example.test/api").unwrap();
        assert!(client.set_basic_credentials("", "pass").is_err());
        assert!(client.set_api_key("").is_err());
        assert!(client.credential().is_none());
    }
}
