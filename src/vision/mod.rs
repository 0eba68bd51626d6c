//! Visual Recognition service (v3).

mod client;
mod types;

pub use client::VisualRecognition;
pub use types::{ClassResult, ClassifiedImage, ClassifierResult, ClassifyOptions, ClassifyResult};
