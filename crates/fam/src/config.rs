//! Loading and validating [`SiteConfig`].

use crate::error::SiteError;
use fam_domain::config::SiteConfig;
use std::borrow::Cow;

/// Loads the site config from `path` (default `site.*`, optional) plus `FAM__*` overrides,
/// then validates it.
///
/// # Errors
/// Returns [`SiteError::Config`] if the sources cannot be read and
/// [`SiteError::InvalidConfig`] if a value is out of range.
#[cfg(not(target_arch = "wasm32"))]
pub fn load(path: Option<&std::path::Path>) -> Result<SiteConfig, SiteError> {
    use crate::error::SiteErrorExt;

    let config: SiteConfig =
        fam_kernel::config::load_config(path).map_err(SiteError::from).context("site config")?;
    validate(&config)?;
    Ok(config)
}

/// Checks the ranges the features rely on.
///
/// # Errors
/// Returns [`SiteError::InvalidConfig`] naming the first offending key.
pub fn validate(config: &SiteConfig) -> Result<(), SiteError> {
    let reveal = &config.reveal;
    if !(0.0..=1.0).contains(&reveal.threshold) {
        return Err(invalid("reveal.threshold", "must be between 0 and 1"));
    }
    if !(0.0..1.0).contains(&reveal.bottom_margin) {
        return Err(invalid("reveal.bottom_margin", "must be at least 0 and below 1"));
    }
    if config.age_gate.storage_key.trim().is_empty() {
        return Err(invalid("age_gate.storage_key", "must not be empty"));
    }
    if config.nav.breakpoint == 0 {
        return Err(invalid("nav.breakpoint", "must be positive"));
    }
    if config.contact.sent_label.is_empty() {
        return Err(invalid("contact.sent_label", "must not be empty"));
    }
    Ok(())
}

fn invalid(key: &'static str, message: &'static str) -> SiteError {
    SiteError::InvalidConfig { message: Cow::Borrowed(message), context: Some(Cow::Borrowed(key)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&SiteConfig::default()).is_ok());
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = SiteConfig::default();
        config.reveal.threshold = 1.5;
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid site configuration (reveal.threshold): must be between 0 and 1");
    }

    #[test]
    fn empty_storage_key_is_rejected() {
        let mut config = SiteConfig::default();
        config.age_gate.storage_key = "  ".to_owned();
        assert!(matches!(validate(&config), Err(SiteError::InvalidConfig { .. })));
    }
}
