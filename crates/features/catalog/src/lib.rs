//! Product catalog slice.
//!
//! Renders the static product descriptors into cards inside `#products`. Every
//! text field goes through [`escape_html`], even though the descriptors are
//! compiled in.

use fam_kernel::domain::config::CatalogConfig;
use fam_kernel::domain::constants::{CLASS_REVEAL, PRODUCTS};
use fam_kernel::domain::product::{PRODUCTS as PRODUCT_LINE, ProductDescriptor};
use fam_kernel::prelude::*;
use tracing::{debug, info};

const CARD_CLASS: &str = "product-card";

/// Catalog feature state.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: &'static [ProductDescriptor],
    max_badges: usize,
}

/// Initialize the catalog feature with the shipped product line.
#[must_use]
pub fn init(config: &CatalogConfig) -> Catalog {
    info!(products = PRODUCT_LINE.len(), "Catalog slice initialized");
    Catalog::new(config)
}

impl Catalog {
    #[must_use]
    pub const fn new(config: &CatalogConfig) -> Self {
        Self { products: PRODUCT_LINE, max_badges: config.max_badges }
    }

    /// Swaps in a different descriptor list.
    #[must_use]
    pub const fn with_products(mut self, products: &'static [ProductDescriptor]) -> Self {
        self.products = products;
        self
    }

    #[must_use]
    pub const fn products(&self) -> &'static [ProductDescriptor] {
        self.products
    }

    /// Inner markup of one card (everything inside the `<article>`).
    #[must_use]
    pub fn card_body(&self, product: &ProductDescriptor) -> String {
        let name = escape_html(product.name);
        let badges: String = product
            .badges
            .iter()
            .take(self.max_badges)
            .map(|badge| format!(r#"<span class="badge">{}</span>"#, escape_html(badge)))
            .collect();

        format!(
            concat!(
                r#"<img src="{src}" alt="{name}" loading="lazy" />"#,
                r#"<h3>{name}</h3>"#,
                r#"<p class="muted" style="margin-top:8px; line-height:1.6;">{description}</p>"#,
                r#"<div class="product-meta">{badges}</div>"#,
            ),
            src = escape_html(product.image),
            name = name,
            description = escape_html(product.description),
            badges = badges,
        )
    }

    /// Full container markup: one `<article>` per descriptor.
    #[must_use]
    pub fn render(&self) -> String {
        self.products
            .iter()
            .map(|product| {
                format!(
                    r#"<article class="{CARD_CLASS} {CLASS_REVEAL}">{}</article>"#,
                    self.card_body(product)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Card elements for the page model.
    ///
    /// Cards stack evenly inside the container's box until the host reports real geometry.
    fn cards(&self, container: Rect) -> Vec<Element> {
        #[allow(clippy::cast_precision_loss)]
        let height = container.height / self.products.len().max(1) as f64;
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| {
                #[allow(clippy::cast_precision_loss)]
                let top = container.top + height * index as f64;
                Element::new("article")
                    .with_class(CARD_CLASS)
                    .with_class(CLASS_REVEAL)
                    .with_markup(self.card_body(product))
                    .with_rect(Rect::new(top, container.left, container.width, height))
            })
            .collect()
    }
}

impl Feature for Catalog {
    fn kind(&self) -> FeatureKind {
        FeatureKind::Catalog
    }

    fn on_ready(&mut self, page: &Page, _ctx: &mut Context<'_>) -> Vec<Effect> {
        let Some(container) = page.by_id(PRODUCTS) else {
            debug!("Products container missing, slice disabled");
            return Vec::new();
        };
        let rect = page.element(container).map(Element::rect).unwrap_or_default();

        debug!(cards = self.products.len(), "Rendering product cards");
        vec![Effect::ReplaceChildren {
            node: container,
            markup: self.render(),
            children: self.cards(rect),
        }]
    }
}
