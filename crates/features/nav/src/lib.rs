//! Mobile navigation slice: the burger menu.
//!
//! Open/closed state lives only in the `open` class on the links container and
//! mirrors into `aria-expanded` on the trigger.

use fam_kernel::domain::config::NavConfig;
use fam_kernel::domain::constants::{ARIA_EXPANDED, CLASS_OPEN, NAV_LINKS, NAV_TRIGGER};
use fam_kernel::prelude::*;
use tracing::{debug, info};

/// Navigation feature state.
#[derive(Debug, Clone)]
pub struct Nav {
    breakpoint: f64,
}

/// Initialize the navigation feature.
#[must_use]
pub fn init(config: &NavConfig) -> Nav {
    info!(breakpoint = config.breakpoint, "Navigation slice initialized");
    Nav::new(config)
}

/// Trigger control and links container, when both exist.
#[derive(Debug, Clone, Copy)]
struct Menu {
    trigger: NodeId,
    links: NodeId,
}

impl Menu {
    fn find(page: &Page) -> Option<Self> {
        Some(Self { trigger: page.by_id(NAV_TRIGGER)?, links: page.by_id(NAV_LINKS)? })
    }

    fn is_open(self, page: &Page) -> bool {
        page.has_class(self.links, CLASS_OPEN)
    }

    fn open(self) -> Vec<Effect> {
        vec![
            Effect::AddClass { node: self.links, class: CLASS_OPEN },
            Effect::SetAttribute {
                node: self.trigger,
                name: ARIA_EXPANDED,
                value: "true".to_owned(),
            },
        ]
    }

    fn close(self) -> Vec<Effect> {
        vec![
            Effect::RemoveClass { node: self.links, class: CLASS_OPEN },
            Effect::SetAttribute {
                node: self.trigger,
                name: ARIA_EXPANDED,
                value: "false".to_owned(),
            },
        ]
    }

    fn toggle(self, page: &Page) -> Vec<Effect> {
        if self.is_open(page) { self.close() } else { self.open() }
    }
}

impl Nav {
    #[must_use]
    pub fn new(config: &NavConfig) -> Self {
        Self { breakpoint: f64::from(config.breakpoint) }
    }

    /// Effects that open the menu, or nothing without menu markup.
    #[must_use]
    pub fn open(page: &Page) -> Vec<Effect> {
        Menu::find(page).map(Menu::open).unwrap_or_default()
    }

    #[must_use]
    pub fn close(page: &Page) -> Vec<Effect> {
        Menu::find(page).map(Menu::close).unwrap_or_default()
    }

    #[must_use]
    pub fn toggle(page: &Page) -> Vec<Effect> {
        Menu::find(page).map(|menu| menu.toggle(page)).unwrap_or_default()
    }

    #[must_use]
    pub fn is_open(page: &Page) -> bool {
        Menu::find(page).is_some_and(|menu| menu.is_open(page))
    }

    fn on_click(page: &Page, menu: Menu, target: NodeId) -> Vec<Effect> {
        if page.contains(menu.trigger, target) {
            return menu.toggle(page);
        }

        if page.contains(menu.links, target) {
            let on_link = page.closest(target, |el| el.tag() == "a").is_some();
            return if on_link { menu.close() } else { Vec::new() };
        }

        if menu.is_open(page) {
            debug!("Click outside navigation, closing menu");
            return menu.close();
        }

        Vec::new()
    }
}

impl Feature for Nav {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Nav
    }

    fn on_ready(&mut self, page: &Page, _ctx: &mut Context<'_>) -> Vec<Effect> {
        if Menu::find(page).is_none() {
            debug!("Navigation markup missing, slice disabled");
        }
        Vec::new()
    }

    fn on_event(&mut self, page: &Page, event: &PageEvent, _ctx: &mut Context<'_>) -> Vec<Effect> {
        let Some(menu) = Menu::find(page) else {
            return Vec::new();
        };

        match event {
            PageEvent::Click { target } => Self::on_click(page, menu, *target),
            // Desktop layout shows the links inline; a stale open state would linger otherwise.
            PageEvent::Resize { width, .. } if *width > self.breakpoint => menu.close(),
            _ => Vec::new(),
        }
    }
}
