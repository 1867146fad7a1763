//! Persistent key-value storage for the desktop shell.
//!
//! [`FileStore`] keeps every entry of one origin in a single JSON object on disk
//! and mirrors it in memory, giving the synchronous get/set semantics of browser
//! `localStorage` through the [`fam_kernel::store::KeyValueStore`] trait.
//!
//! - **Atomic writes**: each `set` rewrites the file through a unique temp file,
//!   `fsync` and `rename`, so a crash leaves either the old or the new file.
//! - **Self-healing**: temp files orphaned by a crash are removed on open.
//!
//! ```rust
//! use fam_kernel::store::KeyValueStore;
//! use fam_storage::FileStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let tmp = tempfile::tempdir()?;
//! let store = FileStore::builder().root(tmp.path().join("data")).open()?;
//! store.set("fam_age_verified_v1", "true")?;
//! assert_eq!(store.get("fam_age_verified_v1")?.as_deref(), Some("true"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;
mod file_store;
mod maintenance;

pub use builder::FileStoreBuilder;
pub use error::{StorageError, StorageErrorExt};
pub use file_store::{DEFAULT_FILE_NAME, FileStore};
