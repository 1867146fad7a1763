#[cfg(not(target_arch = "wasm32"))]
use fam_kernel::config::ConfigError;
use fam_kernel::error::format_context;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The configuration sources could not be read or deserialized.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Site config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    /// The configuration loaded but holds values the features cannot work with.
    #[error("Invalid site configuration{}: {message}", format_context(.context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait SiteErrorExt<T> {
    /// Attaches a human-readable context to the error.
    ///
    /// # Errors
    /// Returns the original error with the context set.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, SiteError>;
}

impl<T> SiteErrorExt<T> for Result<T, SiteError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                #[cfg(not(target_arch = "wasm32"))]
                SiteError::Config { context: c, .. } => *c = Some(context.into()),
                SiteError::InvalidConfig { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<ConfigError> for SiteError {
    fn from(source: ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_replaces_the_previous_one() {
        let result: Result<(), SiteError> = Err(SiteError::InvalidConfig {
            message: Cow::Borrowed("must be positive"),
            context: Some(Cow::Borrowed("nav.breakpoint")),
        });

        let err = result.context("site.toml").unwrap_err();
        assert_eq!(err.to_string(), "Invalid site configuration (site.toml): must be positive");
    }
}
