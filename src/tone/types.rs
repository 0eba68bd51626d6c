//! Tone Analyzer types.

use serde::{Deserialize, Serialize};

/// Tone category filter for an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneCategory {
    Emotion,
    Language,
    Social,
}

impl ToneCategory {
    /// Lowercase wire name, as the `tones` query argument expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneCategory::Emotion => "emotion",
            ToneCategory::Language => "language",
            ToneCategory::Social => "social",
        }
    }
}

/// Options for a tone analysis call.
#[derive(Debug, Clone)]
pub struct ToneOptions {
    /// Analyze individual sentences in addition to the whole document.
    pub sentences: bool,
    /// Restrict scoring to these categories; empty means all.
    pub tones: Vec<ToneCategory>,
}

impl Default for ToneOptions {
    fn default() -> Self {
        ToneOptions {
            sentences: true,
            tones: Vec::new(),
        }
    }
}

/// Request body for `/v3/tone`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ToneInput {
    pub text: String,
}

/// Complete analysis of the input document.
#[derive(Debug, Clone, Deserialize)]
pub struct ToneAnalysis {
    pub document_tone: DocumentAnalysis,
    #[serde(default)]
    pub sentences_tone: Option<Vec<SentenceAnalysis>>,
}

/// Document-level tone scores.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentAnalysis {
    pub tone_categories: Vec<ToneCategoryScore>,
}

/// Per-sentence tone scores with the sentence's position in the input.
#[derive(Debug, Clone, Deserialize)]
pub struct SentenceAnalysis {
    pub sentence_id: i32,
    pub text: String,
    #[serde(default)]
    pub input_from: Option<i32>,
    #[serde(default)]
    pub input_to: Option<i32>,
    pub tone_categories: Vec<ToneCategoryScore>,
}

/// Scores for all tones within one category.
#[derive(Debug, Clone, Deserialize)]
pub struct ToneCategoryScore {
    pub category_id: String,
    pub category_name: String,
    pub tones: Vec<ToneScore>,
}

/// One scored tone.
#[derive(Debug, Clone, Deserialize)]
pub struct ToneScore {
    pub score: f64,
    pub tone_id: String,
    pub tone_name: String,
}
