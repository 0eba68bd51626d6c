//! # cognitive-services-rust
//!
//! Typed async Rust client for a Watson-style cognitive services platform,
//! exposing its REST endpoints (tone analysis, speech to text, visual
//! recognition) as method calls that return deserialized result records.
//!
//! ## Overview
//!
//! Every service facade is a thin consumer of one shared pipeline:
//! credential attachment, fluent request construction, dispatch through a
//! reqwest-backed transport, and JSON-to-model decoding with structured
//! error unwrapping. There is no retry, caching, or rate-limiting policy in
//! the core; failures surface verbatim and policy stays with the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cognitive_services::tone::ToneAnalyzer;
//!
//! #[tokio::main]
//! async fn main() -> cognitive_services::Result<()> {
//!     let analyzer = ToneAnalyzer::with_credentials("username", "password")?;
//!     let analysis = analyzer.analyze_tone("hello world").await?;
//!     for category in &analysis.document_tone.tone_categories {
//!         for tone in &category.tones {
//!             println!("{}: {:.2}", tone.tone_name, tone.score);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Credential holder (basic auth or API key) |
//! | [`request`] | Fluent request builder and descriptors |
//! | [`response`] | Typed response decoding and service errors |
//! | [`transport`] | Reqwest-backed dispatch and cancellation |
//! | [`service`] | Shared service-client base for the facades |
//! | [`tone`] | Tone Analyzer service |
//! | [`speech`] | Speech to Text service |
//! | [`vision`] | Visual Recognition service |

pub mod auth;
pub mod request;
pub mod response;
pub mod service;
pub mod speech;
pub mod tone;
pub mod transport;
pub mod vision;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ServiceError};

// Re-export the pieces most callers touch directly.
pub use auth::Credential;
pub use request::{Method, Part, RequestBuilder, RequestDescriptor};
pub use response::HttpResponse;
pub use service::ServiceClient;
pub use transport::{cancel_pair, CancelHandle, CancelToken, HttpTransport};
