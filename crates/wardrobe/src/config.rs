use thiserror::Error;

/// Configuration for a [`Wardrobe`](crate::Wardrobe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WardrobeConfig {
    capacity: usize,
    key: String,
}

/// Errors that can occur when validating a wardrobe config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("capacity must be at least one")]
    Capacity,

    #[error("storage key must not be empty")]
    Key,
}

impl WardrobeConfig {
    /// Most fits kept before the oldest are dropped.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Store key holding the saved fits.
    pub const DEFAULT_KEY: &'static str = "patternfit_ai_wardrobe";

    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero or `key` is empty.
    pub fn new(capacity: usize, key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if capacity == 0 {
            return Err(ConfigError::Capacity);
        }
        if key.is_empty() {
            return Err(ConfigError::Key);
        }
        Ok(Self { capacity, key })
    }

    /// Returns the maximum number of saved fits.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the store key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for WardrobeConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            key: Self::DEFAULT_KEY.to_string(),
        }
    }
}
