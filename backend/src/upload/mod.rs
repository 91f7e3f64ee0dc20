//! Image upload to the storage provider.
//!
//! Event background images arrive inline as base64 data URLs; the uploader
//! pushes the decoded bytes to a Firebase-Storage-compatible bucket and
//! hands back the public download URL that gets stamped on the event.

use async_trait::async_trait;
use base64::Engine as _;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// Decoded image bytes plus their MIME type.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub content_type: String,
}

impl ImagePayload {
    /// Parse a `data:image/png;base64,...` data URL. A bare base64 string
    /// is accepted too and treated as `image/png`.
    pub fn from_data_url(payload: &str) -> Result<Self> {
        let (content_type, encoded) = match payload.strip_prefix("data:") {
            Some(rest) => {
                let (mime, data) = rest.split_once(";base64,").ok_or_else(|| {
                    AppError::BadRequest("image payload is not a base64 data URL".into())
                })?;
                (mime.to_string(), data)
            }
            None => ("image/png".to_string(), payload),
        };

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|_| AppError::BadRequest("image payload is not valid base64".into()))?;

        Ok(Self { data, content_type })
    }

    fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "bin",
        }
    }
}

#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload the image and return its public URL.
    async fn upload(&self, image: &ImagePayload) -> Result<String>;
}

/// Firebase-Storage-style REST uploader.
pub struct StorageUploader {
    client: reqwest::Client,
    api_base: String,
    bucket: String,
    token: Option<String>,
}

impl StorageUploader {
    pub fn new(api_base: String, bucket: String, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            bucket,
            token,
        }
    }
}

#[async_trait]
impl ImageUploader for StorageUploader {
    async fn upload(&self, image: &ImagePayload) -> Result<String> {
        let object = format!("{}.{}", Uuid::new_v4(), image.extension());
        let upload_url = format!(
            "{}/v0/b/{}/o?uploadType=media&name={}",
            self.api_base, self.bucket, object
        );

        let mut request = self
            .client
            .post(&upload_url)
            .header(reqwest::header::CONTENT_TYPE, &image.content_type)
            .body(image.data.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Upload(format!(
                "storage provider returned {}",
                response.status()
            )));
        }

        tracing::debug!(object = %object, "uploaded event background image");

        Ok(format!(
            "{}/v0/b/{}/o/{}?alt=media",
            self.api_base, self.bucket, object
        ))
    }
}
