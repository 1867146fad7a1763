use fam_kernel::error::{StoreError, format_context};
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The store file exists but is not a JSON object of strings.
    #[error("Storage file is malformed{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The configured file name is not a plain file name.
    #[error("Invalid storage file name{}: {message}", format_context(.context))]
    InvalidName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal storage error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl StorageError {
    const fn context_mut(&mut self) -> &mut Option<Cow<'static, str>> {
        match self {
            Self::Io { context, .. }
            | Self::Serialization { context, .. }
            | Self::InvalidName { context, .. }
            | Self::Internal { context, .. } => context,
        }
    }
}

pub trait StorageErrorExt<T> {
    /// Converts the error into a [`StorageError`] carrying `context`.
    ///
    /// # Errors
    /// Returns the converted error with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StorageError>;
}

impl<T, E: Into<StorageError>> StorageErrorExt<T> for Result<T, E> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StorageError> {
        self.map_err(|e| {
            let mut e = e.into();
            *e.context_mut() = Some(context.into());
            e
        })
    }
}

impl From<std::io::Error> for StorageError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source, context: None }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source, context: None }
    }
}

impl From<&'static str> for StorageError {
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

/// Disk trouble reads as an unavailable store; anything else is internal.
impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        let message = Cow::Owned(err.to_string());
        match err {
            StorageError::Io { .. } => Self::Unavailable { message, context: None },
            _ => Self::Internal { message, context: None },
        }
    }
}
