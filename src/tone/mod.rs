//! Tone Analyzer service (v3).

mod client;
mod types;

pub use client::ToneAnalyzer;
pub use types::{
    DocumentAnalysis, SentenceAnalysis, ToneAnalysis, ToneCategory, ToneCategoryScore,
    ToneOptions, ToneScore,
};
