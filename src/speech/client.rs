//! Speech to Text client.

use super::types::{
    AudioSource, RecognizeOptions, SessionStatus, SpeechModel, SpeechModelSet,
    SpeechRecognitionResults, SpeechSession,
};
use crate::auth::Credential;
use crate::request::{Part, RequestBuilder};
use crate::service::ServiceClient;
use crate::{Error, Result};

const SERVICE_NAME: &str = "speech_to_text";
const DEFAULT_ENDPOINT: &str = "https://stream.watsonplatform.net/speech-to-text/api";
const PATH_MODELS: &str = "/v1/models";
const PATH_SESSIONS: &str = "/v1/sessions";
const PATH_RECOGNIZE: &str = "/v1/recognize";

/// Client for the Speech to Text service.
pub struct SpeechToText {
    client: ServiceClient,
}

impl SpeechToText {
    pub fn new() -> Result<Self> {
        Ok(SpeechToText {
            client: ServiceClient::new(SERVICE_NAME, DEFAULT_ENDPOINT)?,
        })
    }

    /// Client pre-configured with basic-auth credentials.
    pub fn with_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut service = Self::new()?;
        service.client.set_basic_credentials(username, password)?;
        Ok(service)
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.client.set_endpoint(endpoint);
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.client.set_credential(credential);
    }

    /// List the base models available for recognition.
    pub async fn list_models(&self) -> Result<SpeechModelSet> {
        self.client.send(self.client.get(PATH_MODELS)).await
    }

    /// Fetch one base model by name.
    pub async fn get_model(&self, name: &str) -> Result<SpeechModel> {
        if name.is_empty() {
            return Err(Error::empty_argument("name"));
        }
        let path = format!("{PATH_MODELS}/{name}");
        self.client.send(self.client.get(&path)).await
    }

    /// Open a recognition session against the given base model.
    pub async fn create_session(&self, model: &str) -> Result<SpeechSession> {
        if model.is_empty() {
            return Err(Error::empty_argument("model"));
        }
        let request = self.client.post(PATH_SESSIONS).with_argument("model", model);
        self.client.send(request).await
    }

    /// Poll the state of an open session; `initialized` means idle.
    pub async fn session_status(&self, session: &SpeechSession) -> Result<SessionStatus> {
        let path = format!("{PATH_SESSIONS}/{}/recognize", session.session_id);
        self.client.send(self.client.get(&path)).await
    }

    /// Close an open session.
    pub async fn delete_session(&self, session: &SpeechSession) -> Result<()> {
        let path = format!("{PATH_SESSIONS}/{}", session.session_id);
        self.client.send_unit(self.client.delete(&path)).await
    }

    /// Recognize audio sessionlessly.
    pub async fn recognize(&self, options: RecognizeOptions) -> Result<SpeechRecognitionResults> {
        let request = self.recognize_request(PATH_RECOGNIZE, options)?;
        self.client.send(request).await
    }

    /// Recognize audio within an open session.
    pub async fn recognize_with_session(
        &self,
        session_id: &str,
        options: RecognizeOptions,
    ) -> Result<SpeechRecognitionResults> {
        if session_id.is_empty() {
            return Err(Error::empty_argument("session_id"));
        }
        let path = format!("{PATH_SESSIONS}/{session_id}/recognize");
        let request = self.recognize_request(&path, options)?;
        self.client.send(request).await
    }

    fn recognize_request(&self, path: &str, options: RecognizeOptions) -> Result<RequestBuilder> {
        let mut request = self.client.post(path);
        if let Some(model) = &options.model {
            request = request.with_argument("model", model.as_str());
        }
        let request = match options.source {
            AudioSource::Raw { data, content_type } => request.with_raw_body(data, content_type),
            AudioSource::Form { metadata, upload } => {
                let metadata_json = serde_json::to_value(&metadata)
                    .map_err(|e| Error::invalid_argument("metadata", e.to_string()))?;
                request
                    .add_part(Part::json("metadata", &metadata_json))
                    .add_part(upload)
            }
        };
        Ok(request)
    }
}
