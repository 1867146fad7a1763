use crate::constants::AGE_VERIFIED_KEY;
use crate::features::FeatureSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration shared across features.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub features: FeatureSet,
    pub age_gate: AgeGateConfig,
    pub nav: NavConfig,
    pub catalog: CatalogConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into features.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgeGateConfig {
    pub storage_key: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Viewport width (logical px) above which the desktop menu is shown.
    pub breakpoint: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub max_badges: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of an element that counts as "entered".
    pub threshold: f64,
    /// Fraction of viewport height cut off the bottom of the trigger region.
    pub bottom_margin: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub reset_delay_ms: u64,
    pub sent_label: String,
    pub fallback_label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for AgeGateConfig {
    fn default() -> Self {
        Self { storage_key: AGE_VERIFIED_KEY.to_owned() }
    }
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { breakpoint: 720 }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { max_badges: 4 }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { threshold: 0.12, bottom_margin: 0.08 }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 1400,
            sent_label: "Saadetud ✓".to_owned(),
            fallback_label: "Saada".to_owned(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
