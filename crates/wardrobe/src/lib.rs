//! Bounded persistence for PatternFit.
//!
//! - [`Store`]: the key-value contract, with [`MemoryStore`] and
//!   [`FileStore`] backends
//! - [`Wardrobe`]: saved fittings, newest first, evicting the oldest when
//!   capacity or quota runs out
//! - [`FabricShelf`]: the user's uploaded fabrics

mod config;
mod error;
mod fabrics;
mod record;
mod wardrobe;

pub mod store;

pub use config::{ConfigError, WardrobeConfig};
pub use error::WardrobeError;
pub use fabrics::FabricShelf;
pub use record::{FabricRef, SavedFit};
pub use store::{FileStore, MemoryStore, Store, StoreError};
pub use wardrobe::{SaveOutcome, Wardrobe};
