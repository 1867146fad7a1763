//! Reveal-on-scroll slice.
//!
//! Simulates an intersection observer over every `.reveal` element: the first
//! time an element is at least `threshold` visible inside the viewport (with the
//! bottom margin cut off) it gains the `in` class and is no longer watched.

use fam_kernel::domain::config::RevealConfig;
use fam_kernel::domain::constants::{CLASS_REVEAL, CLASS_REVEALED};
use fam_kernel::prelude::*;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Reveal feature state.
#[derive(Debug, Clone)]
pub struct Reveal {
    threshold: f64,
    bottom_margin: f64,
    observed: BTreeSet<NodeId>,
}

/// Initialize the reveal feature.
#[must_use]
pub fn init(config: &RevealConfig) -> Reveal {
    info!(threshold = config.threshold, margin = config.bottom_margin, "Reveal slice initialized");
    Reveal::new(config)
}

impl Reveal {
    #[must_use]
    pub const fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin,
            observed: BTreeSet::new(),
        }
    }

    /// Elements still waiting to be revealed.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed.len()
    }

    fn intersects(&self, page: &Page, node: NodeId) -> bool {
        let ratio = page.visible_ratio(node, self.bottom_margin);
        ratio > 0.0 && ratio >= self.threshold
    }

    /// Reveals observed elements that crossed the threshold and stops watching them.
    fn check(&mut self, page: &Page) -> Vec<Effect> {
        self.observed.retain(|&node| page.is_attached(node));

        let entered: Vec<NodeId> =
            self.observed.iter().copied().filter(|&node| self.intersects(page, node)).collect();
        for node in &entered {
            self.observed.remove(node);
        }
        if !entered.is_empty() {
            debug!(revealed = entered.len(), remaining = self.observed.len(), "Revealed elements");
        }

        entered.into_iter().map(|node| Effect::AddClass { node, class: CLASS_REVEALED }).collect()
    }
}

impl Feature for Reveal {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Reveal
    }

    fn on_ready(&mut self, page: &Page, _ctx: &mut Context<'_>) -> Vec<Effect> {
        let items = page.by_class(CLASS_REVEAL);
        if items.is_empty() {
            return Vec::new();
        }

        if !page.capabilities().intersection_observer {
            debug!(items = items.len(), "No intersection observer, revealing everything");
            return items
                .into_iter()
                .map(|node| Effect::AddClass { node, class: CLASS_REVEALED })
                .collect();
        }

        self.observed = items.into_iter().filter(|&node| !page.has_class(node, CLASS_REVEALED)).collect();
        // Observers report the initial state right away.
        self.check(page)
    }

    fn on_event(&mut self, page: &Page, event: &PageEvent, _ctx: &mut Context<'_>) -> Vec<Effect> {
        if self.observed.is_empty() {
            return Vec::new();
        }
        match event {
            PageEvent::Scroll { .. } | PageEvent::Resize { .. } | PageEvent::Layout { .. } => {
                self.check(page)
            },
            PageEvent::Detached { .. } => {
                self.observed.retain(|&node| page.is_attached(node));
                Vec::new()
            },
            _ => Vec::new(),
        }
    }
}
