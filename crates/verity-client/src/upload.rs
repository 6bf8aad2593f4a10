//! Validated image uploads.

use std::path::Path;

use verity_core::validation::{ImageKind, validate_image};

use crate::error::ClientError;

/// An image that passed pre-flight checks and is ready to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    filename: String,
    bytes: Vec<u8>,
    kind: ImageKind,
}

impl ImageUpload {
    /// Validate `bytes` as a PNG or JPEG upload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Invalid`] for empty or unsupported images.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ClientError> {
        let filename = filename.into();
        let kind = validate_image(&filename, &bytes)?;
        Ok(Self {
            filename,
            bytes,
            kind,
        })
    }

    /// Read and validate an image from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Io`] if the file cannot be read and
    /// [`ClientError::Invalid`] if it is not an acceptable image.
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let filename = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Self::new(filename, bytes)
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub const fn kind(&self) -> ImageKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, ClientError> {
        Ok(reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.filename)
            .mime_str(self.kind.mime_type())?)
    }
}
