//! Key-value blob storage.
//!
//! A [`Store`] holds string values under string keys, like browser local
//! storage. Stores may enforce a byte quota, in which case a `put` that would
//! exceed it fails with [`StoreError::QuotaExceeded`] and leaves the previous
//! value untouched.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key-value store.
pub trait Store {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] if the value does not fit,
    /// or another [`StoreError`] if the backend cannot be written.
    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Removes the value under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns all keys, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Lets several services share one store by mutable reference.
impl<S: Store + ?Sized> Store for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        (**self).keys()
    }
}

/// Errors returned by a [`Store`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The write would take the store over its byte quota.
    #[error("storage quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    /// The key cannot be used by this backend.
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    /// The backend failed to read or write.
    #[error("storage I/O failed for `{key}`")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns `true` for quota failures, which callers may recover from by
    /// storing less.
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

/// Checks a write of `new_size` bytes against an optional quota, given the
/// bytes already used by everything else.
pub(crate) fn check_quota(
    quota: Option<usize>,
    used_by_others: usize,
    new_size: usize,
) -> Result<(), StoreError> {
    match quota {
        Some(quota) if used_by_others + new_size > quota => Err(StoreError::QuotaExceeded {
            needed: new_size,
            available: quota.saturating_sub(used_by_others),
        }),
        _ => Ok(()),
    }
}
