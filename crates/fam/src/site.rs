//! The [`Site`] orchestrator: owns the page, the scheduler and the enabled features.

use fam_domain::config::SiteConfig;
use fam_domain::features::FeatureKind;
use fam_kernel::prelude::*;
use private::Sealed;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct NoPage;
#[derive(Debug)]
pub struct WithPage(Page);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoPage {}
impl Sealed for WithPage {}

/// Assembles a [`Site`]. A page is required; store, clock and config have defaults.
#[derive(Debug)]
pub struct SiteBuilder<P: Sealed = NoPage> {
    page: P,
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    config: SiteConfig,
}

impl<P: Sealed> SiteBuilder<P> {
    /// Backend for the age flag. Defaults to an in-memory store.
    #[must_use = "The site is not created until you call .build()"]
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = store;
        self
    }

    #[must_use = "The site is not created until you call .build()"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use = "The site is not created until you call .build()"]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }
}

impl SiteBuilder<NoPage> {
    #[must_use = "The site is not created until you call .build()"]
    pub fn page(self, page: Page) -> SiteBuilder<WithPage> {
        SiteBuilder { page: WithPage(page), store: self.store, clock: self.clock, config: self.config }
    }
}

impl SiteBuilder<WithPage> {
    /// Initializes every slice that is both enabled in config and compiled in.
    #[must_use]
    pub fn build(self) -> Site {
        let Self { page: WithPage(page), store, clock, config } = self;

        let mut features: Vec<Box<dyn Feature>> = Vec::new();
        for kind in config.features.kinds() {
            match init(kind, &config, &store) {
                Some(feature) => features.push(feature),
                None => warn!(feature = %kind, "Feature enabled in config but not compiled in"),
            }
        }
        info!(features = features.len(), "Site assembled");

        Site { page, scheduler: Scheduler::new(), clock, features, ready: false }
    }
}

#[allow(unused_variables)]
fn init(kind: FeatureKind, config: &SiteConfig, store: &Arc<dyn KeyValueStore>) -> Option<Box<dyn Feature>> {
    match kind {
        #[cfg(feature = "age-gate")]
        FeatureKind::AgeGate => Some(Box::new(fam_age_gate::init(Arc::clone(store), &config.age_gate))),
        #[cfg(feature = "nav")]
        FeatureKind::Nav => Some(Box::new(fam_nav::init(&config.nav))),
        #[cfg(feature = "catalog")]
        FeatureKind::Catalog => Some(Box::new(fam_catalog::init(&config.catalog))),
        #[cfg(feature = "footer")]
        FeatureKind::Footer => Some(Box::new(fam_footer::init())),
        #[cfg(feature = "contact")]
        FeatureKind::Contact => Some(Box::new(fam_contact::init(&config.contact))),
        #[cfg(feature = "reveal")]
        FeatureKind::Reveal => Some(Box::new(fam_reveal::init(&config.reveal))),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// A page with its features attached.
///
/// Every entry point applies the resulting effects before returning and reports
/// how many landed.
#[derive(Debug)]
pub struct Site {
    page: Page,
    scheduler: Scheduler,
    clock: Arc<dyn Clock>,
    features: Vec<Box<dyn Feature>>,
    ready: bool,
}

impl Site {
    #[must_use = "The site is not created until you call .build()"]
    pub fn builder() -> SiteBuilder {
        SiteBuilder {
            page: NoPage,
            store: Arc::new(MemoryStore::new()),
            clock: Arc::new(SystemClock),
            config: SiteConfig::default(),
        }
    }

    #[must_use]
    pub const fn page(&self) -> &Page {
        &self.page
    }

    /// Attached features, in start-up order.
    #[must_use]
    pub fn kinds(&self) -> Vec<FeatureKind> {
        self.features.iter().map(|feature| feature.kind()).collect()
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.ready
    }

    /// Delayed tasks still waiting to fire.
    #[must_use]
    pub const fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Time until the next delayed task is due.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Page-ready: runs each feature once, in start-up order. Later features see
    /// the effects of earlier ones (reveal sees the rendered catalog).
    pub fn ready(&mut self) -> usize {
        if self.ready {
            warn!("Page-ready already handled");
            return 0;
        }
        self.ready = true;

        let mut landed = 0;
        for feature in &mut self.features {
            let mut ctx = Context::new(&mut self.scheduler, &*self.clock);
            let effects = feature.on_ready(&self.page, &mut ctx);
            debug!(feature = %feature.kind(), effects = effects.len(), "Feature ready");
            landed += self.page.apply_all(effects);
        }
        landed
    }

    /// Sends one host event to every feature.
    ///
    /// Resize and scroll update the viewport first. Nodes removed along the way
    /// lose their pending tasks and are announced with [`PageEvent::Detached`].
    pub fn dispatch(&mut self, event: PageEvent) -> usize {
        if !self.ready {
            debug!(?event, "Event before page-ready ignored");
            return 0;
        }

        let mut viewport = self.page.viewport();
        match event {
            PageEvent::Resize { width, height } => {
                viewport.width = width;
                viewport.height = height;
            },
            PageEvent::Scroll { y } => viewport.scroll_y = y,
            _ => {},
        }
        self.page.set_viewport(viewport);

        let mut landed = 0;
        let mut detached = Vec::new();
        for feature in &mut self.features {
            let mut ctx = Context::new(&mut self.scheduler, &*self.clock);
            let effects = feature.on_event(&self.page, &event, &mut ctx);
            detached.extend(effects.iter().filter_map(|effect| match effect {
                Effect::Detach { node } => Some(*node),
                _ => None,
            }));
            landed += self.page.apply_all(effects);
        }

        landed + self.settle(detached)
    }

    pub fn click(&mut self, target: NodeId) -> usize {
        self.dispatch(PageEvent::Click { target })
    }

    pub fn key_down(&mut self, key: impl Into<Key>) -> usize {
        self.dispatch(PageEvent::KeyDown { key: key.into() })
    }

    /// Submits `form`. The default action never runs; features decide what happens.
    pub fn submit(&mut self, form: NodeId) -> usize {
        self.dispatch(PageEvent::Submit { form })
    }

    pub fn resize(&mut self, width: f64, height: f64) -> usize {
        self.dispatch(PageEvent::Resize { width, height })
    }

    pub fn scroll(&mut self, y: f64) -> usize {
        self.dispatch(PageEvent::Scroll { y })
    }

    /// Mirrors user input into a form control. Returns `false` for a detached control.
    pub fn input(&mut self, node: NodeId, value: impl Into<String>) -> bool {
        self.page.apply(Effect::SetValue { node, value: value.into() })
    }

    /// Records host layout for an element and announces it with [`PageEvent::Layout`].
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) -> usize {
        self.page.set_rect(node, rect);
        self.dispatch(PageEvent::Layout { node })
    }

    /// Removes `node` from the document, cancelling tasks it owns.
    pub fn detach(&mut self, node: NodeId) -> usize {
        if !self.page.apply(Effect::Detach { node }) {
            return 0;
        }
        self.settle(vec![node])
    }

    /// Moves virtual time forward and applies the tasks that came due.
    pub fn advance(&mut self, by: Duration) -> usize {
        let effects = self.scheduler.advance(by);
        if effects.is_empty() {
            return 0;
        }
        debug!(effects = effects.len(), "Delayed effects due");
        self.page.apply_all(effects)
    }

    fn settle(&mut self, detached: Vec<NodeId>) -> usize {
        if detached.is_empty() {
            return 0;
        }
        self.scheduler.cancel_detached(&self.page);
        detached.into_iter().map(|node| self.dispatch(PageEvent::Detached { node })).sum()
    }
}
