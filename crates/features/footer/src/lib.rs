//! Footer year slice.

use fam_kernel::domain::constants::FOOTER_YEAR;
use fam_kernel::prelude::*;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct FooterYear;

/// Initialize the footer feature.
#[must_use]
pub fn init() -> FooterYear {
    info!("Footer slice initialized");
    FooterYear
}

impl Feature for FooterYear {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Footer
    }

    fn on_ready(&mut self, page: &Page, ctx: &mut Context<'_>) -> Vec<Effect> {
        let Some(node) = page.by_id(FOOTER_YEAR) else {
            debug!("Footer year markup missing, slice disabled");
            return Vec::new();
        };
        vec![Effect::SetText { node, text: ctx.clock().year().to_string() }]
    }
}
