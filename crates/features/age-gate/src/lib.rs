//! Age gate slice.
//!
//! Blocks the page behind an overlay until the visitor confirms their age. The
//! confirmation is persisted through an injected [`KeyValueStore`], so any backend
//! (browser storage, a file, a test double) can hold it.

use fam_kernel::domain::config::AgeGateConfig;
use fam_kernel::domain::constants::{AGE_CONFIRM, AGE_GATE, AGE_VERIFIED_VALUE};
use fam_kernel::prelude::*;
use tracing::{debug, info, warn};

const DISPLAY: &str = "display";
const OVERFLOW: &str = "overflow";
const SHOWN: &str = "grid";
const HIDDEN: &str = "none";
const LOCKED: &str = "hidden";

/// Age gate feature state.
#[derive(Debug)]
pub struct AgeGate<S: KeyValueStore> {
    store: S,
    key: String,
}

/// Initialize the age gate feature.
pub fn init<S: KeyValueStore>(store: S, config: &AgeGateConfig) -> AgeGate<S> {
    info!(key = %config.storage_key, "Age gate slice initialized");
    AgeGate::new(store, config)
}

impl<S: KeyValueStore> AgeGate<S> {
    pub fn new(store: S, config: &AgeGateConfig) -> Self {
        Self { store, key: config.storage_key.clone() }
    }

    /// Whether the stored flag is exactly `"true"`. Read failures count as unverified.
    pub fn is_verified(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref() == Some(AGE_VERIFIED_VALUE),
            Err(err) => {
                warn!(error = %err, "Age flag unreadable, treating visitor as unverified");
                false
            },
        }
    }

    fn confirm(&self) {
        if let Err(err) = self.store.set(&self.key, AGE_VERIFIED_VALUE) {
            // The overlay still closes; the visitor is asked again next load.
            warn!(error = %err, "Failed to persist age confirmation");
        }
    }

    fn show(page: &Page, gate: NodeId) -> Vec<Effect> {
        let mut effects = vec![Effect::SetStyle {
            node: gate,
            property: DISPLAY,
            value: Some(SHOWN.to_owned()),
        }];
        effects.extend(scroll_lock(page, Some(LOCKED)));
        effects
    }

    fn hide(page: &Page, gate: NodeId) -> Vec<Effect> {
        let mut effects = vec![Effect::SetStyle {
            node: gate,
            property: DISPLAY,
            value: Some(HIDDEN.to_owned()),
        }];
        effects.extend(scroll_lock(page, None));
        effects
    }
}

/// Sets or clears `overflow` on both the root element and the body.
fn scroll_lock(page: &Page, value: Option<&str>) -> [Effect; 2] {
    [page.root(), page.body()].map(|node| Effect::SetStyle {
        node,
        property: OVERFLOW,
        value: value.map(str::to_owned),
    })
}

/// Overlay and confirmation control, when both exist.
fn elements(page: &Page) -> Option<(NodeId, NodeId)> {
    Some((page.by_id(AGE_GATE)?, page.by_id(AGE_CONFIRM)?))
}

impl<S: KeyValueStore> Feature for AgeGate<S> {
    fn kind(&self) -> FeatureKind {
        FeatureKind::AgeGate
    }

    fn on_ready(&mut self, page: &Page, _ctx: &mut Context<'_>) -> Vec<Effect> {
        let Some((gate, _)) = elements(page) else {
            debug!("Age gate markup missing, slice disabled");
            return Vec::new();
        };

        if self.is_verified() { Self::hide(page, gate) } else { Self::show(page, gate) }
    }

    fn on_event(&mut self, page: &Page, event: &PageEvent, _ctx: &mut Context<'_>) -> Vec<Effect> {
        let Some((gate, confirm)) = elements(page) else {
            return Vec::new();
        };

        match event {
            PageEvent::Click { target } if page.contains(confirm, *target) => {
                self.confirm();
                Self::hide(page, gate)
            },
            // Escape may only dismiss an already verified gate, never bypass it.
            PageEvent::KeyDown { key: Key::Escape } if self.is_verified() => Self::hide(page, gate),
            _ => Vec::new(),
        }
    }
}
