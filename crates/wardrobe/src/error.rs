use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by the wardrobe and the fabric shelf.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WardrobeError {
    /// The new fit does not fit in storage, even without the `evicted` oldest
    /// fits. Storage is left as it was before the save.
    #[error("wardrobe is full: the new fit could not be saved after dropping {evicted} older fits")]
    Full {
        evicted: usize,
        #[source]
        source: StoreError,
    },

    /// Only fabrics with inline image data can be kept on the shelf.
    #[error("fabric `{id}` has no inline image data to save")]
    NotInline { id: String },

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record could not be encoded as JSON.
    #[error("failed to encode records")]
    Encode(#[source] serde_json::Error),
}
