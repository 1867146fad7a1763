use crate::error::{StorageError, StorageErrorExt};
use crate::file_store::{DEFAULT_FILE_NAME, FileStore};
use private::Sealed;
use std::borrow::Cow;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[derive(Debug)]
struct Options {
    create: bool,
    file_name: Cow<'static, str>,
}

impl Default for Options {
    fn default() -> Self {
        Self { create: true, file_name: Cow::Borrowed(DEFAULT_FILE_NAME) }
    }
}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct FileStoreBuilder<S: Sealed = NoRoot> {
    state: S,
    options: Options,
}

#[allow(private_bounds)]
impl<S: Sealed> FileStoreBuilder<S> {
    #[must_use = "Sets whether the root directory is created when missing"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.options.create = enable;
        self
    }

    #[must_use = "Sets the name of the store file inside the root"]
    pub fn file_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.options.file_name = name.into();
        self
    }
}

impl FileStoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default options"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the directory holding the store file"]
    pub fn root(self, path: impl Into<PathBuf>) -> FileStoreBuilder<WithRoot> {
        FileStoreBuilder { state: WithRoot(path.into()), options: self.options }
    }
}

impl FileStoreBuilder<WithRoot> {
    /// Opens the store: prepares the root, clears orphaned temp files and loads
    /// the existing entries, if any.
    ///
    /// # Errors
    /// - [`StorageError::InvalidName`] if the file name is not a single plain component.
    /// - [`StorageError::Io`] if the root is missing (with `create(false)`) or unreadable.
    /// - [`StorageError::Serialization`] if the existing file is not a JSON object of strings.
    pub fn open(self) -> Result<FileStore, StorageError> {
        let Self { state: WithRoot(root), options } = self;
        validate_file_name(&options.file_name)?;

        if options.create {
            fs::create_dir_all(&root).context(format!("creating store root {}", root.display()))?;
            info!(path = %root.display(), "Prepared storage root");
        }
        let root = fs::canonicalize(&root).context(format!("resolving store root {}", root.display()))?;

        crate::maintenance::purge_tmp(&root);
        FileStore::load(root.join(options.file_name.as_ref()))
    }
}

fn validate_file_name(name: &str) -> Result<(), StorageError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(StorageError::InvalidName { message: name.to_owned().into(), context: None }),
    }
}
