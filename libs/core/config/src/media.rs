use crate::{env_required, ConfigError, FromEnv};

/// Asset host (Cloudinary) configuration for event image uploads.
///
/// Uploads use the unsigned upload API, so only the cloud name and an
/// unsigned upload preset are needed.
#[derive(Clone, Debug)]
pub struct MediaConfig {
    /// Cloudinary cloud name (account identifier)
    pub cloud_name: String,

    /// Unsigned upload preset authorizing the upload
    pub upload_preset: String,

    /// Folder to place uploaded images in
    pub folder: String,
}

impl MediaConfig {
    pub fn new(cloud_name: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            upload_preset: upload_preset.into(),
            folder: "events".to_string(),
        }
    }

    /// Full URL of the image upload endpoint
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

/// Load MediaConfig from environment variables
///
/// Environment variables:
/// - `CLOUDINARY_CLOUD_NAME` (required) - account identifier
/// - `CLOUDINARY_UPLOAD_PRESET` (required) - unsigned upload preset
/// - `CLOUDINARY_FOLDER` (optional, default: "events")
impl FromEnv for MediaConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let cloud_name = env_required("CLOUDINARY_CLOUD_NAME")?;
        let upload_preset = env_required("CLOUDINARY_UPLOAD_PRESET")?;
        let folder = crate::env_or_default("CLOUDINARY_FOLDER", "events");

        Ok(Self {
            cloud_name,
            upload_preset,
            folder,
        })
    }
}
