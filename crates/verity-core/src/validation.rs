//! Pre-flight validation of user input.
//!
//! Text must reach [`MIN_TEXT_CHARS`] characters after trimming before it is
//! worth a backend call. Images must be PNG or JPEG.

use std::path::Path;

use crate::errors::ValidationError;

/// Minimum trimmed length, in characters, of an analysable text.
pub const MIN_TEXT_CHARS: usize = 50;

/// Validate a text submission.
///
/// # Errors
///
/// Returns [`ValidationError::TooShort`] when the trimmed input has fewer than
/// [`MIN_TEXT_CHARS`] characters.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    let actual = text.trim().chars().count();
    if actual < MIN_TEXT_CHARS {
        return Err(ValidationError::TooShort {
            min: MIN_TEXT_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Rough number of claims in `text`: sentence-like segments split on runs of
/// `.`, `!` and `?`, never less than one.
#[must_use]
pub fn estimate_claims(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.is_empty())
        .count()
        .max(1)
}

/// Text composer state for a submission form.
///
/// The error set by a failed [`TextInput::submit`] clears as soon as an edit
/// brings the text over the threshold.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    error: Option<ValidationError>,
}

impl TextInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.error.is_some() && validate(&self.text).is_ok() {
            self.error = None;
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn estimated_claims(&self) -> usize {
        estimate_claims(&self.text)
    }

    /// Validate the current text. Runs on every attempt.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, which is also kept as the composer's
    /// error state until the text becomes valid.
    pub fn submit(&mut self) -> Result<&str, ValidationError> {
        match validate(&self.text) {
            Ok(()) => {
                self.error = None;
                Ok(&self.text)
            }
            Err(error) => {
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }
}

/// Image formats the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn sniff(bytes: &[u8]) -> Option<Self> {
        const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
        if bytes.starts_with(PNG_MAGIC) {
            Some(Self::Png)
        } else if bytes.starts_with(JPEG_MAGIC) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }

    fn from_extension(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }
}

/// Validate an image upload and pick the MIME type to send.
///
/// Content sniffing wins; the file extension is only consulted when the
/// magic bytes are inconclusive.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyImage`] for an empty file and
/// [`ValidationError::UnsupportedImage`] for anything not PNG or JPEG.
pub fn validate_image(filename: &str, bytes: &[u8]) -> Result<ImageKind, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::EmptyImage);
    }
    ImageKind::sniff(bytes)
        .or_else(|| ImageKind::from_extension(filename))
        .ok_or_else(|| ValidationError::UnsupportedImage {
            filename: filename.to_string(),
        })
}
