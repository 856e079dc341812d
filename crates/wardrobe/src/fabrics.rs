use base64::{Engine, engine::general_purpose::STANDARD};
use patternfit_core::{Fabric, FabricImage};
use serde::{Deserialize, Serialize};

use crate::{WardrobeError, store::Store};

/// Stored form of a custom fabric. Every field must be non-empty.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFabric {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    base64: String,
    #[serde(default)]
    mime_type: String,
}

impl StoredFabric {
    fn encode(fabric: &Fabric) -> Result<Self, WardrobeError> {
        let FabricImage::Inline { mime_type, data } = &fabric.image else {
            return Err(WardrobeError::NotInline {
                id: fabric.id.clone(),
            });
        };
        Ok(Self {
            id: fabric.id.clone(),
            name: fabric.name.clone(),
            base64: STANDARD.encode(data),
            mime_type: mime_type.clone(),
        })
    }

    fn decode(self) -> Option<Fabric> {
        if self.id.is_empty()
            || self.name.is_empty()
            || self.base64.is_empty()
            || self.mime_type.is_empty()
        {
            return None;
        }
        let data = STANDARD.decode(&self.base64).ok()?;
        Some(Fabric {
            id: self.id,
            name: self.name,
            image: FabricImage::Inline {
                mime_type: self.mime_type,
                data,
            },
        })
    }
}

/// The user's collection of uploaded fabrics.
///
/// The collection is stored as a single JSON array. If any entry is
/// incomplete the whole collection is treated as corrupt and cleared.
#[derive(Debug)]
pub struct FabricShelf<S> {
    store: S,
    key: String,
}

impl<S: Store> FabricShelf<S> {
    /// Store key holding the saved fabrics.
    pub const DEFAULT_KEY: &'static str = "patternfit_ai_saved_fabrics";

    /// Creates a shelf under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, Self::DEFAULT_KEY)
    }

    /// Creates a shelf under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the saved fabrics in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::Store`] if the store cannot be read.
    pub fn list(&mut self) -> Result<Vec<Fabric>, WardrobeError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let decoded = serde_json::from_str::<Vec<StoredFabric>>(&raw)
            .ok()
            .and_then(|stored| stored.into_iter().map(StoredFabric::decode).collect());

        match decoded {
            Some(fabrics) => Ok(fabrics),
            None => {
                tracing::warn!(key = %self.key, "discarding unreadable fabric data");
                self.store.delete(&self.key)?;
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the saved collection with `fabrics`.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::NotInline`] if a fabric has no image data,
    /// or a store or encoding error if the write fails.
    pub fn save(&mut self, fabrics: &[Fabric]) -> Result<(), WardrobeError> {
        let stored = fabrics
            .iter()
            .map(StoredFabric::encode)
            .collect::<Result<Vec<_>, _>>()?;
        let json = serde_json::to_string(&stored).map_err(WardrobeError::Encode)?;
        self.store.put(&self.key, json)?;
        Ok(())
    }

    /// Adds a fabric, replacing any saved fabric with the same id.
    ///
    /// # Errors
    ///
    /// See [`FabricShelf::save`].
    pub fn add(&mut self, fabric: Fabric) -> Result<(), WardrobeError> {
        let mut fabrics = self.list()?;
        match fabrics.iter_mut().find(|f| f.id == fabric.id) {
            Some(existing) => *existing = fabric,
            None => fabrics.push(fabric),
        }
        self.save(&fabrics)
    }

    /// Removes the fabric with `id`. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// See [`FabricShelf::save`].
    pub fn remove(&mut self, id: &str) -> Result<bool, WardrobeError> {
        let mut fabrics = self.list()?;
        let before = fabrics.len();
        fabrics.retain(|f| f.id != id);
        if fabrics.len() == before {
            return Ok(false);
        }
        self.save(&fabrics)?;
        Ok(true)
    }
}
