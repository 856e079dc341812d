use uuid::Uuid;

use crate::{SavedFit, WardrobeConfig, WardrobeError, store::Store};

/// What a successful [`Wardrobe::save`] had to drop to make room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Ids of older fits removed by this save, oldest last.
    pub evicted: Vec<Uuid>,
}

/// A bounded, newest-first collection of saved fits.
///
/// All fits are stored as one JSON array under the configured key. When the
/// wardrobe reaches capacity, or the store runs out of quota, the oldest fits
/// are evicted first.
#[derive(Debug)]
pub struct Wardrobe<S> {
    store: S,
    config: WardrobeConfig,
}

impl<S: Store> Wardrobe<S> {
    /// Creates a wardrobe with the default config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, WardrobeConfig::default())
    }

    /// Creates a wardrobe with the given config.
    pub fn with_config(store: S, config: WardrobeConfig) -> Self {
        Self { store, config }
    }

    /// Returns the config.
    pub fn config(&self) -> &WardrobeConfig {
        &self.config
    }

    /// Consumes the wardrobe and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns all saved fits, newest first.
    ///
    /// Stored data that cannot be decoded is removed and treated as an empty
    /// wardrobe.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::Store`] if the store cannot be read.
    pub fn list(&mut self) -> Result<Vec<SavedFit>, WardrobeError> {
        let key = self.config.key();
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<SavedFit>>(&raw) {
            Ok(mut fits) => {
                fits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                Ok(fits)
            }
            Err(error) => {
                tracing::warn!(%key, %error, "discarding unreadable wardrobe data");
                self.store.delete(key)?;
                Ok(Vec::new())
            }
        }
    }

    /// Returns the fit with `id`, if saved.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::Store`] if the store cannot be read.
    pub fn get(&mut self, id: Uuid) -> Result<Option<SavedFit>, WardrobeError> {
        Ok(self.list()?.into_iter().find(|fit| fit.id == id))
    }

    /// Saves a new fit at the front of the wardrobe.
    ///
    /// Fits beyond the configured capacity are dropped, oldest first. If the
    /// store reports a quota error, the oldest remaining fit is dropped and
    /// the write is retried once.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError::Full`] if the fit still does not fit after
    /// the retry, or if there was nothing older to drop. Other store
    /// failures are returned as [`WardrobeError::Store`].
    pub fn save(&mut self, fit: SavedFit) -> Result<SaveOutcome, WardrobeError> {
        let mut fits = self.list()?;
        fits.insert(0, fit);

        let mut outcome = SaveOutcome::default();
        if fits.len() > self.config.capacity() {
            outcome.evicted = fits
                .split_off(self.config.capacity())
                .into_iter()
                .map(|f| f.id)
                .collect();
        }

        let source = match self.write(&fits) {
            Err(WardrobeError::Store(source)) if source.is_quota_exceeded() => source,
            result => return result.map(|()| outcome),
        };

        let Some(oldest) = fits.pop().filter(|_| !fits.is_empty()) else {
            tracing::error!(error = %source, "wardrobe is full and the new fit could not be saved");
            return Err(WardrobeError::Full {
                evicted: 0,
                source,
            });
        };

        tracing::warn!(evicted = %oldest.id, "storage quota exceeded, evicting oldest fit");
        match self.write(&fits) {
            Ok(()) => {
                outcome.evicted.push(oldest.id);
                Ok(outcome)
            }
            Err(WardrobeError::Store(source)) if source.is_quota_exceeded() => {
                tracing::error!(error = %source, "wardrobe is full even after evicting the oldest fit");
                Err(WardrobeError::Full { evicted: 1, source })
            }
            Err(error) => Err(error),
        }
    }

    /// Deletes the fit with `id`. Returns whether a fit was removed.
    ///
    /// # Errors
    ///
    /// Returns [`WardrobeError`] if the store cannot be read or written.
    pub fn delete(&mut self, id: Uuid) -> Result<bool, WardrobeError> {
        let mut fits = self.list()?;
        let before = fits.len();
        fits.retain(|fit| fit.id != id);

        if fits.len() == before {
            return Ok(false);
        }
        self.write(&fits)?;
        Ok(true)
    }

    fn write(&mut self, fits: &[SavedFit]) -> Result<(), WardrobeError> {
        let json = serde_json::to_string(fits).map_err(WardrobeError::Encode)?;
        self.store.put(self.config.key(), json)?;
        Ok(())
    }
}
