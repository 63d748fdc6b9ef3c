/*!
 * Image payloads carried as data URLs.
 *
 * Exam images and the clinic letterhead arrive as `data:<mime>;base64,<payload>`
 * strings. `ImageData` keeps the decoded bytes plus the declared MIME type and
 * serializes back to the same data URL form.
 */

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::DynamicImage;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ImageDataError;

/// Raw image bytes with their declared MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ImageData {
    /// Declared MIME type (e.g. `image/png`), if any
    pub mime_type: Option<String>,

    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// Wrap raw bytes without a declared MIME type.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { mime_type: None, bytes }
    }

    /// Wrap raw bytes with a declared MIME type.
    pub fn with_mime(mime_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: Some(mime_type.to_string()),
            bytes,
        }
    }

    /// Parse a `data:` URL.
    pub fn from_data_url(url: &str) -> Result<Self, ImageDataError> {
        let rest = url.trim().strip_prefix("data:").ok_or(ImageDataError::NotDataUrl)?;
        let (meta, payload) = rest.split_once(',').ok_or(ImageDataError::NotDataUrl)?;

        let mut params = meta.split(';');
        let mime_type = params
            .next()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
            return Err(ImageDataError::UnsupportedEncoding(meta.to_string()));
        }

        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| ImageDataError::Base64(e.to_string()))?;

        Ok(Self { mime_type, bytes })
    }

    /// Encode back to a `data:` URL.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type.as_deref().unwrap_or("application/octet-stream"),
            BASE64.encode(&self.bytes)
        )
    }

    /// Whether the payload claims to be an image.
    ///
    /// A declared MIME type decides; without one the bytes are sniffed.
    pub fn is_image_typed(&self) -> bool {
        match &self.mime_type {
            Some(mime) => mime.to_ascii_lowercase().starts_with("image/"),
            None => image::guess_format(&self.bytes).is_ok(),
        }
    }

    /// Fully decode the payload.
    pub fn decode(&self) -> image::ImageResult<DynamicImage> {
        image::load_from_memory(&self.bytes)
    }

    /// Whether the payload decodes as an image.
    pub fn decodes(&self) -> bool {
        match self.decode() {
            Ok(_) => true,
            Err(e) => {
                debug!("Image payload failed to decode ({} bytes): {}", self.bytes.len(), e);
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Malformed strings become an empty payload so an exam with one broken
// upload still loads; the compiler renders it as an invalid image.
impl From<String> for ImageData {
    fn from(url: String) -> Self {
        match Self::from_data_url(&url) {
            Ok(data) => data,
            Err(e) => {
                debug!("Keeping empty image payload for malformed data URL: {}", e);
                Self::default()
            }
        }
    }
}

impl From<ImageData> for String {
    fn from(data: ImageData) -> Self {
        data.to_data_url()
    }
}
