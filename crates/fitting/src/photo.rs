use thiserror::Error;

/// Limits applied to uploaded or captured photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoLimits {
    max_bytes: usize,
}

/// Errors that can occur when validating photo limits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LimitsError {
    #[error("max_bytes must be at least one")]
    MaxBytes,
}

impl PhotoLimits {
    /// Largest accepted photo: 5 MiB.
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;

    /// Creates validated limits.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_bytes` is zero.
    pub fn new(max_bytes: usize) -> Result<Self, LimitsError> {
        if max_bytes == 0 {
            return Err(LimitsError::MaxBytes);
        }
        Ok(Self { max_bytes })
    }

    /// Returns the largest accepted photo size in bytes.
    #[must_use]
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

impl Default for PhotoLimits {
    fn default() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }
}

/// Reasons a photo is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PhotoError {
    #[error("photo is empty")]
    Empty,

    #[error("`{mime_type}` is not an image type")]
    NotAnImage { mime_type: String },

    #[error("photo is {size} bytes, larger than the {max} byte limit")]
    TooLarge { size: usize, max: usize },
}

/// A photo of the person being fitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl Photo {
    /// Creates a photo from raw bytes and their MIME type.
    #[must_use]
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Checks the photo against `limits`.
    ///
    /// # Errors
    ///
    /// Returns a [`PhotoError`] if the photo is empty, not an `image/*`
    /// type, or over the size limit.
    pub fn validate(&self, limits: &PhotoLimits) -> Result<(), PhotoError> {
        if !self.mime_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(PhotoError::NotAnImage {
                mime_type: self.mime_type.clone(),
            });
        }
        if self.bytes.is_empty() {
            return Err(PhotoError::Empty);
        }
        if self.bytes.len() > limits.max_bytes() {
            return Err(PhotoError::TooLarge {
                size: self.bytes.len(),
                max: limits.max_bytes(),
            });
        }
        Ok(())
    }
}
