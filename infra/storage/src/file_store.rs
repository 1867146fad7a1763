//! The [`FileStore`] handle and its atomic persistence.

use crate::builder::FileStoreBuilder;
use crate::error::{StorageError, StorageErrorExt};
use crate::maintenance::TMP_MARKER;
use fam_kernel::error::StoreError;
use fam_kernel::store::KeyValueStore;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

pub const DEFAULT_FILE_NAME: &str = "local_storage.json";

#[derive(Debug)]
struct FileStoreInner {
    path: PathBuf,
    entries: RwLock<FxHashMap<String, String>>,
    tmp_counter: AtomicU64,
}

/// Shared handle to one store file. Clones see the same entries.
#[derive(Debug, Clone)]
pub struct FileStore {
    inner: Arc<FileStoreInner>,
}

impl FileStore {
    #[must_use = "The store is not opened until you call .open()"]
    pub fn builder() -> FileStoreBuilder {
        FileStoreBuilder::new()
    }

    pub(crate) fn load(path: PathBuf) -> Result<Self, StorageError> {
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<FxHashMap<String, String>>(&bytes)
                .context(format!("parsing {}", path.display()))?,
            Err(err) if err.kind() == ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err).context(format!("reading {}", path.display())),
        };
        debug!(path = %path.display(), entries = entries.len(), "Opened file store");

        Ok(Self {
            inner: Arc::new(FileStoreInner {
                path,
                entries: RwLock::new(entries),
                tmp_counter: AtomicU64::new(1),
            }),
        })
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.read().is_empty()
    }

    /// Removes `key`, persisting the change. Returns whether it existed.
    ///
    /// # Errors
    /// Returns [`StorageError`] if the file cannot be rewritten; the entry is kept then.
    pub fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = self.inner.entries.write();
        let Some(previous) = entries.remove(key) else {
            return Ok(false);
        };
        if let Err(err) = self.persist(&entries) {
            entries.insert(key.to_owned(), previous);
            return Err(err);
        }
        Ok(true)
    }

    fn insert(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.inner.entries.write();
        if entries.get(key).is_some_and(|current| current == value) {
            return Ok(());
        }
        let previous = entries.insert(key.to_owned(), value.to_owned());
        if let Err(err) = self.persist(&entries) {
            // Leave memory matching the file, like a rejected localStorage write.
            match previous {
                Some(previous) => entries.insert(key.to_owned(), previous),
                None => entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    /// Rewrites the whole file: unique temp file, `fsync`, `rename`.
    fn persist(&self, entries: &FxHashMap<String, String>) -> Result<(), StorageError> {
        let sorted: BTreeMap<&str, &str> = entries.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let bytes = serde_json::to_vec_pretty(&sorted).context("encoding store")?;

        let temp = self.tmp_path();
        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .context(format!("creating {}", temp.display()))?;
            file.write_all(&bytes).context("writing store")?;
            file.sync_all().context("syncing store")?;
        }

        if let Err(err) = fs::rename(&temp, &self.inner.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(err).context(format!("replacing {}", self.inner.path.display()));
        }

        if let Some(parent) = self.inner.path.parent() {
            sync_dir(parent);
        }
        debug!(path = %self.inner.path.display(), entries = entries.len(), "Store saved atomically");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let counter = self.inner.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = self.inner.path.file_name().and_then(|s| s.to_str()).unwrap_or("store");
        self.inner.path.with_file_name(format!("{file_name}{TMP_MARKER}{}.{counter}", std::process::id()))
    }
}

#[cfg(unix)]
fn sync_dir(path: &Path) {
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                warn!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => warn!(path = %path.display(), error = %err, "Directory open failed"),
    }
}

#[cfg(not(unix))]
const fn sync_dir(_path: &Path) {}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert(key, value).map_err(StoreError::from)
    }
}
