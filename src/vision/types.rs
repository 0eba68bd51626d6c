//! Visual Recognition types.

use serde::Deserialize;

/// Options for classifying an uploaded image.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// File name used for extension-based content-type inference.
    pub file_name: Option<String>,
    /// Explicit content type, bypassing inference.
    pub content_type: Option<String>,
    /// Restrict classification to these classifier ids; empty means the
    /// default classifier.
    pub classifier_ids: Vec<String>,
}

/// Classification output for one or more images.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyResult {
    pub images: Vec<ClassifiedImage>,
    #[serde(default)]
    pub images_processed: Option<i32>,
    #[serde(default)]
    pub custom_classes: Option<i32>,
}

/// Results for a single input image.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifiedImage {
    pub classifiers: Vec<ClassifierResult>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub resolved_url: Option<String>,
}

/// Scores produced by one classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierResult {
    pub classes: Vec<ClassResult>,
    #[serde(default)]
    pub classifier_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// One recognized class.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassResult {
    #[serde(rename = "class")]
    pub class_name: String,
    pub score: f64,
    #[serde(default)]
    pub type_hierarchy: Option<String>,
}
