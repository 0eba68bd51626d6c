use crate::request::{Body, Method, RequestDescriptor};
use crate::response::HttpResponse;
use crate::{Error, Result};
use std::time::Duration;

/// Default per-request timeout, matching the service clients' expectations.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Failure at the network layer, before a response was received.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}

/// Reqwest-backed dispatcher shared by all service clients.
///
/// Holds a connection-pooled `reqwest::Client`; cheap to clone via the
/// `Arc` the service client wraps it in. Dispatch never retries; transport
/// failures surface verbatim and retry policy stays with the caller.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
        Ok(HttpTransport { client })
    }

    /// Send the request and buffer the complete response.
    pub async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<HttpResponse> {
        let request = self.assemble(descriptor)?;

        tracing::debug!(
            method = descriptor.method().as_str(),
            url = %descriptor.url(),
            "dispatching request"
        );

        let response = request.send().await.map_err(map_send_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().await.map_err(map_send_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Send the request, racing it against the given cancel token.
    ///
    /// A fired token surfaces as [`Error::Cancelled`], distinct from any
    /// transport failure. The in-flight reqwest future is dropped, which
    /// aborts the underlying connection work.
    pub async fn dispatch_cancellable(
        &self,
        descriptor: &RequestDescriptor,
        token: &mut CancelToken,
    ) -> Result<HttpResponse> {
        tokio::select! {
            _ = token.cancelled() => Err(Error::Cancelled),
            result = self.dispatch(descriptor) => result,
        }
    }

    fn assemble(&self, descriptor: &RequestDescriptor) -> Result<reqwest::RequestBuilder> {
        let url = descriptor.url().clone();
        let mut request = match descriptor.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if !descriptor.arguments().is_empty() {
            request = request.query(descriptor.arguments());
        }
        for (name, value) in descriptor.headers() {
            request = request.header(name, value);
        }

        match descriptor.body() {
            None => {}
            Some(Body::Json(value)) => {
                request = request.json(value);
            }
            Some(Body::Raw { data, content_type }) => {
                request = request
                    .header(reqwest::header::CONTENT_TYPE, content_type)
                    .body(data.clone());
            }
            Some(Body::Form(parts)) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = form.part(part.name().to_string(), to_reqwest_part(part)?);
                }
                request = request.multipart(form);
            }
        }

        Ok(request)
    }
}

fn to_reqwest_part(part: &crate::request::Part) -> Result<reqwest::multipart::Part> {
    let content_type = part.effective_content_type();
    let mut out = reqwest::multipart::Part::bytes(part.data.to_vec())
        .mime_str(&content_type)
        .map_err(|e| {
            Error::invalid_argument(
                "content_type",
                format!("`{content_type}` is not a valid media type: {e}"),
            )
        })?;
    if let Some(file_name) = &part.file_name {
        out = out.file_name(file_name.clone());
    }
    Ok(out)
}

fn map_send_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Transport(TransportError::Timeout)
    } else {
        Error::Transport(TransportError::Http(e))
    }
}

/// Create a linked cancel handle/token pair.
///
/// The handle side is handed to whoever may abort the call; the token side
/// is threaded into [`HttpTransport::dispatch_cancellable`].
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = tokio::sync::watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

/// Caller-side switch that aborts an in-flight dispatch.
#[derive(Debug)]
pub struct CancelHandle {
    tx: tokio::sync::watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// Transport-side receiver for cancellation.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: tokio::sync::watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves once the paired handle fires. If the handle is dropped
    /// without firing, this never resolves.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
