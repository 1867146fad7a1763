//! The FÄM site shell: turns a [`SiteConfig`] into a running [`Site`] and, with
//! the `desktop` feature, renders it in a Dioxus window.

#[cfg(feature = "desktop")]
mod view;

use fam::domain::config::{SiteConfig, StorageConfig};
use fam::kernel::prelude::*;
use fam::template::{Storefront, storefront};
use fam::Site;
use fam_storage::FileStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// Opens the persistent store under `storage.data_dir`.
///
/// An unusable directory degrades to an in-memory store: the age gate then asks
/// again on every start, like a browser with storage disabled.
#[must_use]
pub fn open_store(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
    match FileStore::builder().root(&config.data_dir).open() {
        Ok(store) => {
            info!(path = %store.path().display(), "Using file store");
            Arc::new(store)
        },
        Err(err) => {
            warn!(error = %err, "File store unavailable, falling back to memory");
            Arc::new(MemoryStore::new())
        },
    }
}

/// A site wired to the storefront page, shareable with the UI thread.
#[derive(Debug, Clone)]
pub struct Shell {
    pub site: Arc<Mutex<Site>>,
    pub landmarks: Storefront,
}

impl Shell {
    /// Builds the storefront, attaches the configured features and fires page-ready.
    #[must_use]
    pub fn start(config: SiteConfig, store: Arc<dyn KeyValueStore>, viewport: Viewport, capabilities: Capabilities) -> Self {
        let (page, landmarks) = storefront(viewport);
        let mut site = Site::builder().page(page.with_capabilities(capabilities)).store(store).config(config).build();
        let landed = site.ready();
        info!(landed, features = ?site.kinds(), "Page ready");
        Self { site: Arc::new(Mutex::new(site)), landmarks }
    }
}

#[derive(Debug)]
pub struct SiteApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for SiteApp {
    fn default() -> Self {
        Self { title: "FÄM".to_owned(), width: 1200.0, height: 800.0 }
    }
}

impl SiteApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Opens the window and blocks until it closes.
    #[cfg(feature = "desktop")]
    pub fn launch(self, shell: Shell) {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
        use dioxus::prelude::LaunchBuilder;

        let window = WindowBuilder::new()
            .with_title(&self.title)
            .with_inner_size(LogicalSize { width: self.width, height: self.height });
        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(shell.clone()))
            .launch(view::App);
    }
}
