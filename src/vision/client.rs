//! Visual Recognition client.

use super::types::{ClassifyOptions, ClassifyResult};
use crate::service::ServiceClient;
use crate::{Error, Result};

const SERVICE_NAME: &str = "visual_recognition";
const DEFAULT_ENDPOINT: &str = "https://gateway-a.watsonplatform.net/visual-recognition/api";
const PATH_CLASSIFY: &str = "/v3/classify";
const VERSION_DATE: &str = "2016-05-20";

/// Client for the Visual Recognition service.
///
/// This service authenticates with an API key carried as the `api_key`
/// query argument rather than an Authorization header.
pub struct VisualRecognition {
    client: ServiceClient,
}

impl VisualRecognition {
    pub fn new() -> Result<Self> {
        let mut client = ServiceClient::new(SERVICE_NAME, DEFAULT_ENDPOINT)?;
        client.api_key_as_query(true);
        Ok(VisualRecognition { client })
    }

    /// Client pre-configured with an API key.
    pub fn with_api_key(key: impl Into<String>) -> Result<Self> {
        let mut vision = Self::new()?;
        vision.client.set_api_key(key)?;
        Ok(vision)
    }

    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.client.set_endpoint(endpoint);
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
        self.client.set_api_key(key)
    }

    /// Classify an image referenced by URL.
    pub async fn classify_url(&self, image_url: &str) -> Result<ClassifyResult> {
        if image_url.is_empty() {
            return Err(Error::empty_argument("image_url"));
        }
        let request = self
            .client
            .get(PATH_CLASSIFY)
            .with_argument("version", VERSION_DATE)
            .with_argument("url", image_url);
        self.client.send(request).await
    }

    /// Classify an uploaded image.
    pub async fn classify_image(
        &self,
        image: impl Into<bytes::Bytes>,
        options: &ClassifyOptions,
    ) -> Result<ClassifyResult> {
        let image = image.into();
        if image.is_empty() {
            return Err(Error::empty_argument("image"));
        }

        let mut part = crate::request::Part::bytes("images_file", image);
        if let Some(file_name) = &options.file_name {
            part = part.file_name(file_name.clone());
        }
        if let Some(content_type) = &options.content_type {
            part = part.content_type(content_type.clone());
        }

        let ids: Vec<&str> = options.classifier_ids.iter().map(String::as_str).collect();
        let request = self
            .client
            .post(PATH_CLASSIFY)
            .with_argument("version", VERSION_DATE)
            .with_argument("classifier_ids", ids.as_slice())
            .with_form_data(vec![part]);
        self.client.send(request).await
    }
}
