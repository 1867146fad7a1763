//! The storefront page the features were written for, with a fixed layout.
//!
//! Hosts without a real layout engine (the desktop shell, tests) use this as
//! their document. Geometry is in logical pixels from the top of the page.

use fam_domain::constants::{
    AGE_CONFIRM, AGE_GATE, CLASS_REVEAL, CONTACT_FORM, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME,
    FOOTER_YEAR, NAV_LINKS, NAV_TRIGGER, PRODUCTS,
};
use fam_kernel::page::{Element, NodeId, Page, Rect, Viewport};

const WIDTH: f64 = 1200.0;

/// Handles to the landmarks of a [`storefront`] page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Storefront {
    pub age_gate: NodeId,
    pub age_confirm: NodeId,
    pub nav_trigger: NodeId,
    pub nav_links: NodeId,
    /// The in-menu anchors, in order: products, about, contact.
    pub nav_anchors: [NodeId; 3],
    pub products: NodeId,
    pub about: NodeId,
    pub contact: NodeId,
    pub contact_form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
    pub submit: NodeId,
    pub year: NodeId,
}

/// Builds the storefront document for `viewport`.
#[must_use]
pub fn storefront(viewport: Viewport) -> (Page, Storefront) {
    let mut page = Page::new(viewport);
    let body = page.body();

    let age_gate = page.append(
        body,
        Element::new("div")
            .with_id(AGE_GATE)
            .with_class("agegate")
            .with_attribute("role", "dialog")
            .with_attribute("aria-modal", "true"),
    );
    page.append(age_gate, Element::new("h2").with_text("Oled vähemalt 18-aastane?"));
    let age_confirm = page.append(
        age_gate,
        Element::new("button").with_id(AGE_CONFIRM).with_class("btn").with_text("Jah, olen 18+"),
    );

    let header = page.append(
        body,
        Element::new("header").with_class("site-header").with_rect(Rect::new(0.0, 0.0, WIDTH, 72.0)),
    );
    page.append(header, Element::new("a").with_class("brand").with_attribute("href", "#").with_text("FÄM"));
    let nav_trigger = page.append(
        header,
        Element::new("button")
            .with_id(NAV_TRIGGER)
            .with_class("burger")
            .with_attribute("aria-label", "Menüü")
            .with_attribute("aria-expanded", "false"),
    );
    let nav_links = page.append(header, Element::new("nav").with_id(NAV_LINKS).with_class("navlinks"));
    let nav_anchors = [("#products", "Tooted"), ("#about", "Meist"), ("#contact", "Kontakt")]
        .map(|(href, label)| {
            page.append(nav_links, Element::new("a").with_attribute("href", href).with_text(label))
        });

    let main = page.append(body, Element::new("main"));
    let hero = page.append(
        main,
        Element::new("section").with_class("hero").with_rect(Rect::new(72.0, 0.0, WIDTH, 640.0)),
    );
    page.append(hero, Element::new("h1").with_text("Kihisev hetk purgis."));

    let shop = page.append(
        main,
        Element::new("section")
            .with_id("shop")
            .with_class(CLASS_REVEAL)
            .with_rect(Rect::new(760.0, 0.0, WIDTH, 120.0)),
    );
    page.append(shop, Element::new("h2").with_text("Tooted"));
    let products = page.append(
        main,
        Element::new("div")
            .with_id(PRODUCTS)
            .with_class("products")
            .with_rect(Rect::new(900.0, 0.0, WIDTH, 1080.0)),
    );

    let about = page.append(
        main,
        Element::new("section")
            .with_id("about")
            .with_class(CLASS_REVEAL)
            .with_rect(Rect::new(2040.0, 0.0, WIDTH, 480.0)),
    );
    page.append(about, Element::new("p").with_text("FÄM on Eesti sparkling cocktail."));

    let contact = page.append(
        main,
        Element::new("section")
            .with_id("contact")
            .with_class(CLASS_REVEAL)
            .with_rect(Rect::new(2580.0, 0.0, WIDTH, 620.0)),
    );
    let contact_form = page.append(contact, Element::new("form").with_id(CONTACT_FORM));
    let [name, email, message] = [(FIELD_NAME, "input"), (FIELD_EMAIL, "input"), (FIELD_MESSAGE, "textarea")]
        .map(|(field, tag)| {
            page.append(contact_form, Element::new(tag).with_name(field).with_attribute("required", ""))
        });
    let submit = page.append(
        contact_form,
        Element::new("button").with_class("btn").with_attribute("type", "submit").with_text("Saada"),
    );

    let footer = page.append(
        body,
        Element::new("footer").with_class("site-footer").with_rect(Rect::new(3260.0, 0.0, WIDTH, 120.0)),
    );
    let year = page.append(footer, Element::new("span").with_id(FOOTER_YEAR));

    let landmarks = Storefront {
        age_gate,
        age_confirm,
        nav_trigger,
        nav_links,
        nav_anchors,
        products,
        about,
        contact,
        contact_form,
        name,
        email,
        message,
        submit,
        year,
    };
    (page, landmarks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmarks_are_reachable_by_id() {
        let (page, landmarks) = storefront(Viewport::default());
        assert_eq!(page.by_id(AGE_GATE), Some(landmarks.age_gate));
        assert_eq!(page.by_id(NAV_TRIGGER), Some(landmarks.nav_trigger));
        assert_eq!(page.by_id(PRODUCTS), Some(landmarks.products));
        assert_eq!(page.by_id(CONTACT_FORM), Some(landmarks.contact_form));
        assert_eq!(page.by_id(FOOTER_YEAR), Some(landmarks.year));
        assert_eq!(page.form_value(landmarks.contact_form, FIELD_MESSAGE), Some(""));
    }
}
