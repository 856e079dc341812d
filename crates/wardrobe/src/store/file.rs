use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{Store, StoreError, check_quota};

const EXTENSION: &str = "json";

/// A [`Store`] that keeps each key in its own file under a directory.
///
/// Keys may contain ASCII letters, digits, `-`, `_` and `.`, and must not
/// start with a dot. Usage is counted as the total size of the stored files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir, quota: None })
    }

    /// Returns a copy limited to `quota` bytes.
    #[must_use]
    pub fn with_quota(self, quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..self
        }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }

    fn entries(&self) -> Result<Vec<(String, u64)>, StoreError> {
        let io_err = |source| StoreError::Io {
            key: self.dir.display().to_string(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let size = entry.metadata().map_err(io_err)?.len();
                entries.push((stem.to_string(), size));
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn usage_excluding(&self, key: &str) -> Result<usize, StoreError> {
        let used: u64 = self
            .entries()?
            .into_iter()
            .filter(|(k, _)| k != key)
            .map(|(_, size)| size)
            .sum();
        Ok(usize::try_from(used).unwrap_or(usize::MAX))
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn put(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path(key)?;
        if self.quota.is_some() {
            check_quota(self.quota, self.usage_excluding(key)?, value.len())?;
        }

        // Write beside the target, then rename, so readers never see a partial file.
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| {
                if let Err(error) = fs::remove_file(&tmp) {
                    if error.kind() != io::ErrorKind::NotFound {
                        tracing::warn!(path = %tmp.display(), %error, "failed to remove temporary file");
                    }
                }
                StoreError::Io {
                    key: key.to_string(),
                    source,
                }
            })
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.entries()?.into_iter().map(|(k, _)| k).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("wardrobe").unwrap(), None);
        store.put("wardrobe", "[]".into()).unwrap();
        store.put("fabrics", "[1]".into()).unwrap();

        assert_eq!(store.get("wardrobe").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.keys().unwrap(), ["fabrics", "wardrobe"]);

        store.delete("wardrobe").unwrap();
        store.delete("wardrobe").unwrap();
        assert_eq!(store.keys().unwrap(), ["fabrics"]);
    }

    #[test]
    fn persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path())
            .unwrap()
            .put("k", "v".into())
            .unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        for key in ["", "../escape", "a/b", ".hidden"] {
            assert!(matches!(
                store.put(key, "x".into()),
                Err(StoreError::InvalidKey(_))
            ));
        }
    }

    #[test]
    fn failed_write_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        // A directory in the target's place makes the final rename fail.
        fs::create_dir(dir.path().join("k.json")).unwrap();

        let err = store.put("k", "v".into()).unwrap_err();
        assert!(matches!(err, StoreError::Io { ref key, .. } if key == "k"), "{err:?}");
        assert!(!dir.path().join("k.tmp").exists());
    }

    #[test]
    fn enforces_quota_on_file_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap().with_quota(8);

        store.put("a", "12345".into()).unwrap();
        // Overwriting does not count the old file against the new one.
        store.put("a", "12345678".into()).unwrap();

        let err = store.put("b", "1".into()).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.get("b").unwrap(), None);
    }
}
