use std::borrow::Cow;

/// Renders an optional context as ` (context)` for error messages.
#[must_use]
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Failures of a [`crate::store::KeyValueStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing storage cannot be reached (disabled, quota, permissions).
    #[error("Store unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal logic errors.
    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait StoreErrorExt<T> {
    /// Attaches a human-readable context to the error, if any.
    ///
    /// # Errors
    /// Returns the original error with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, StoreError>;
}

impl<T> StoreErrorExt<T> for Result<T, StoreError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                StoreError::Unavailable { context: c, .. } | StoreError::Internal { context: c, .. } => {
                    *c = Some(context.into());
                },
            }
            e
        })
    }
}

impl From<&'static str> for StoreError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for StoreError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let result: Result<(), StoreError> = Err("boom".into());
        let err = result.context("writing flag").unwrap_err();
        assert_eq!(err.to_string(), "Internal store error (writing flag): boom");
    }

    #[test]
    fn message_without_context_has_no_suffix() {
        let err = StoreError::Unavailable { message: "quota exceeded".into(), context: None };
        assert_eq!(err.to_string(), "Store unavailable: quota exceeded");
    }
}
