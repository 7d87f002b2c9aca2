//! Image hosting for event uploads.
//!
//! Events store only the hosted URL; the bytes from the multipart form are
//! pushed to Cloudinary's unsigned upload endpoint before the document is
//! persisted.

use crate::error::{EventError, Result};
use crate::models::ImageUpload;
use async_trait::async_trait;
use core_config::media::MediaConfig;
use serde::Deserialize;
use tracing::{info, instrument};

/// Abstraction over the external asset host.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload an image and return its hosted URL.
    async fn upload(&self, image: ImageUpload) -> Result<String>;
}

/// Cloudinary-backed media store using the unsigned upload API.
pub struct CloudinaryMediaStore {
    client: reqwest::Client,
    config: MediaConfig,
}

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl CloudinaryMediaStore {
    pub fn new(config: MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl MediaStore for CloudinaryMediaStore {
    #[instrument(skip(self, image), fields(filename = %image.filename, size = image.bytes.len()))]
    async fn upload(&self, image: ImageUpload) -> Result<String> {
        let part = reqwest::multipart::Part::bytes(image.bytes)
            .file_name(image.filename)
            .mime_str(&image.content_type)
            .map_err(|e| EventError::Upload(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.config.upload_preset.clone())
            .text("folder", self.config.folder.clone())
            .part("file", part);

        let response = self
            .client
            .post(self.config.upload_url())
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EventError::Upload(format!(
                "asset host returned {}: {}",
                status, body
            )));
        }

        let upload: UploadResponse = response.json().await?;
        info!(url = %upload.secure_url, "Image uploaded");
        Ok(upload.secure_url)
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub MediaStore {}

        #[async_trait]
        impl MediaStore for MediaStore {
            async fn upload(&self, image: ImageUpload) -> Result<String>;
        }
    }
}
