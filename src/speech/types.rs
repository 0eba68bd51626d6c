//! Speech to Text types.

use crate::request::{sniff_media_type, Part};
use crate::{Error, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The set of base models available for recognition.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechModelSet {
    pub models: Vec<SpeechModel>,
}

/// One recognition base model.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechModel {
    pub name: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub rate: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub supported_features: Option<SupportedFeatures>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupportedFeatures {
    #[serde(default)]
    pub custom_language_model: Option<bool>,
    #[serde(default)]
    pub speaker_labels: Option<bool>,
}

/// A recognition session bound to one model.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSession {
    pub session_id: String,
    #[serde(default)]
    pub new_session_uri: Option<String>,
    #[serde(default)]
    pub recognize: Option<String>,
    #[serde(default)]
    pub observe_result: Option<String>,
}

/// Status report for an open session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionStatus {
    pub session: SessionState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionState {
    /// `initialized` when the session is idle and ready for audio.
    pub state: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub recognize: Option<String>,
    #[serde(default)]
    pub observe_result: Option<String>,
}

/// Recognition output for a stretch of audio.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionResults {
    pub results: Vec<SpeechRecognitionResult>,
    #[serde(default)]
    pub result_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionResult {
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    #[serde(rename = "final", default)]
    pub is_final: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// JSON `metadata` part accompanying a multipart recognition upload.
#[derive(Debug, Clone, Serialize)]
pub struct RecognizeMetadata {
    pub part_content_type: String,
}

/// How the audio payload travels to the service.
#[derive(Debug, Clone)]
pub(crate) enum AudioSource {
    /// Raw body with a resolved content type.
    Raw { data: Bytes, content_type: String },
    /// Multipart form: JSON metadata part plus the audio upload part.
    Form { metadata: RecognizeMetadata, upload: Part },
}

/// Options for a recognition call: exactly one audio source, built fluently.
#[derive(Debug, Clone)]
pub struct RecognizeOptions {
    pub(crate) source: AudioSource,
    pub(crate) model: Option<String>,
}

impl RecognizeOptions {
    pub fn builder() -> RecognizeOptionsBuilder {
        RecognizeOptionsBuilder::default()
    }
}

/// Builder for [`RecognizeOptions`].
///
/// A raw body and a multipart form are mutually exclusive; configuring both
/// fails at [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RecognizeOptionsBuilder {
    raw: Option<Bytes>,
    form_metadata: Option<RecognizeMetadata>,
    upload: Option<Bytes>,
    content_type: Option<String>,
    file_name: Option<String>,
    model: Option<String>,
}

impl RecognizeOptionsBuilder {
    /// Send the audio as the request body.
    pub fn with_body(mut self, data: impl Into<Bytes>) -> Self {
        self.raw = Some(data.into());
        self
    }

    /// Pin the audio content type explicitly instead of inferring it.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Send the audio as a multipart form with this metadata part.
    pub fn with_form_data(mut self, metadata: RecognizeMetadata) -> Self {
        self.form_metadata = Some(metadata);
        self
    }

    /// The audio payload for the multipart form.
    pub fn upload(mut self, data: impl Into<Bytes>) -> Self {
        self.upload = Some(data.into());
        self
    }

    /// File name used for extension-based content-type inference.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Base model to recognize against.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn build(self) -> Result<RecognizeOptions> {
        let source = match (self.raw, self.form_metadata, self.upload) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                return Err(Error::invalid_argument(
                    "audio",
                    "a raw body and form data are mutually exclusive",
                ));
            }
            (Some(data), None, None) => {
                let content_type = self
                    .content_type
                    .unwrap_or_else(|| sniff_media_type(&data, self.file_name.as_deref()));
                AudioSource::Raw { data, content_type }
            }
            (None, metadata, Some(data)) => {
                let content_type = self
                    .content_type
                    .unwrap_or_else(|| sniff_media_type(&data, self.file_name.as_deref()));
                let metadata = metadata.unwrap_or(RecognizeMetadata {
                    part_content_type: content_type.clone(),
                });
                let mut upload = Part::bytes("upload", data).content_type(content_type);
                if let Some(file_name) = self.file_name {
                    upload = upload.file_name(file_name);
                }
                AudioSource::Form { metadata, upload }
            }
            (None, Some(_), None) => {
                return Err(Error::invalid_argument(
                    "audio",
                    "form data requires an upload",
                ));
            }
            (None, None, None) => {
                return Err(Error::invalid_argument(
                    "audio",
                    "either a raw body or form data is required",
                ));
            }
        };
        Ok(RecognizeOptions {
            source,
            model: self.model,
        })
    }
}
