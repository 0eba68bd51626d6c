//! Tone Analyzer client.

use super::types::{ToneAnalysis, ToneInput, ToneOptions};
use crate::auth::Credential;
use crate::service::ServiceClient;
use crate::{Error, Result};

const SERVICE_NAME: &str = "tone_analyzer";
const DEFAULT_ENDPOINT: &str = "https://gateway.watsonplatform.net/tone-analyzer/api";
const PATH_TONE: &str = "/v3/tone";
const VERSION_DATE: &str = "2016-05-19";

/// Client for the Tone Analyzer service.
pub struct ToneAnalyzer {
    client: ServiceClient,
}

impl ToneAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(ToneAnalyzer {
            client: ServiceClient::new(SERVICE_NAME, DEFAULT_ENDPOINT)?,
        })
    }

    /// Client pre-configured with basic-auth credentials.
    pub fn with_credentials(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let mut analyzer = Self::new()?;
        analyzer.client.set_basic_credentials(username, password)?;
        Ok(analyzer)
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.client.set_endpoint(endpoint);
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.client.set_credential(credential);
    }

    /// Analyze `text` with default options (sentence scoring on, all tone
    /// categories).
    pub async fn analyze_tone(&self, text: &str) -> Result<ToneAnalysis> {
        self.analyze_tone_with(text, &ToneOptions::default()).await
    }

    /// Analyze `text` with explicit options.
    pub async fn analyze_tone_with(
        &self,
        text: &str,
        options: &ToneOptions,
    ) -> Result<ToneAnalysis> {
        if text.is_empty() {
            return Err(Error::empty_argument("text"));
        }

        let tone_names: Vec<&str> = options.tones.iter().map(|t| t.as_str()).collect();
        let request = self
            .client
            .post(PATH_TONE)
            .with_argument("version", VERSION_DATE)
            .with_argument("sentences", options.sentences)
            .with_argument("tones", tone_names.as_slice())
            .with_json_body(&ToneInput {
                text: text.to_string(),
            });

        self.client.send(request).await
    }
}
