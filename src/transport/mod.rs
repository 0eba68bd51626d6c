//! HTTP transport boundary.
//!
//! The core pipeline delegates all socket/TLS work to `reqwest`; this module
//! wraps it behind [`HttpTransport`], which turns an immutable
//! [`RequestDescriptor`](crate::request::RequestDescriptor) into a fully
//! buffered [`HttpResponse`](crate::response::HttpResponse).

mod http;

pub use http::{cancel_pair, CancelHandle, CancelToken, HttpTransport, TransportError};
