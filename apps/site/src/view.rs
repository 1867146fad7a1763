//! Dioxus rendering of the storefront page held by the [`Shell`].
//!
//! The page model stays the source of truth: handlers forward events to the
//! site, then bump `revision` so the component re-reads the page.

use crate::Shell;
use dioxus::prelude::*;
use fam::kernel::page::{NodeId, Page};
use fam::Site;
use fam::template::Storefront;
use std::time::Duration;
use tokio::time::Instant;

/// What the view needs from the page, copied out under the lock.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    gate_shown: bool,
    menu_open: bool,
    expanded: String,
    products: String,
    reveal: [String; 3],
    fields: [String; 3],
    submit_label: String,
    submit_disabled: bool,
    year: String,
}

fn classes(page: &Page, node: NodeId) -> String {
    page.element(node).map(|el| el.classes().collect::<Vec<_>>().join(" ")).unwrap_or_default()
}

fn value(page: &Page, node: NodeId) -> String {
    page.element(node).map(|el| el.value().to_owned()).unwrap_or_default()
}

impl Snapshot {
    fn take(page: &Page, landmarks: &Storefront) -> Self {
        let shop = page.by_id("shop").map(|node| classes(page, node)).unwrap_or_default();
        Self {
            gate_shown: page.style(landmarks.age_gate, "display") == Some("grid"),
            menu_open: page.has_class(landmarks.nav_links, "open"),
            expanded: page.attribute(landmarks.nav_trigger, "aria-expanded").unwrap_or("false").to_owned(),
            products: page.element(landmarks.products).and_then(|el| el.markup()).unwrap_or_default().to_owned(),
            reveal: [shop, classes(page, landmarks.about), classes(page, landmarks.contact)],
            fields: [landmarks.name, landmarks.email, landmarks.message].map(|node| value(page, node)),
            submit_label: page.text(landmarks.submit).unwrap_or_default().to_owned(),
            submit_disabled: page.element(landmarks.submit).is_some_and(|el| el.is_disabled()),
            year: page.text(landmarks.year).unwrap_or_default().to_owned(),
        }
    }
}

/// Longest sleep between clock ticks while nothing is scheduled.
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Runs the site's virtual clock against wall time for the lifetime of the window.
async fn run_clock(shell: Shell, mut revision: Signal<u64>) {
    let mut last = Instant::now();
    loop {
        let wait = shell.site.lock().next_due().map_or(IDLE_TICK, |due| due.min(IDLE_TICK));
        tokio::time::sleep(wait).await;

        let now = Instant::now();
        let landed = shell.site.lock().advance(now - last);
        last = now;
        if landed > 0 {
            revision += 1;
        }
    }
}

/// Runs `f` against the site and schedules a re-render if anything changed.
fn apply(shell: &Shell, mut revision: Signal<u64>, f: impl FnOnce(&mut Site) -> usize) {
    if f(&mut *shell.site.lock()) > 0 {
        revision += 1;
    }
}

#[component]
pub(crate) fn App() -> Element {
    let shell = use_context::<Shell>();
    let revision = use_signal(|| 0_u64);
    use_future({
        let shell = shell.clone();
        move || run_clock(shell.clone(), revision)
    });

    let _ = revision();
    let landmarks = shell.landmarks;
    let snap = Snapshot::take(shell.site.lock().page(), &landmarks);

    let click = |node: NodeId| {
        let shell = shell.clone();
        move |_: MouseEvent| apply(&shell, revision, |site| site.click(node))
    };

    let input = |node: NodeId| {
        let shell = shell.clone();
        move |evt: FormEvent| apply(&shell, revision, |site| usize::from(site.input(node, evt.value())))
    };

    let on_submit = {
        let shell = shell.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            apply(&shell, revision, |site| site.submit(landmarks.contact_form));
        }
    };

    let on_key = {
        let shell = shell.clone();
        move |evt: KeyboardEvent| {
            let key = evt.key().to_string();
            apply(&shell, revision, |site| site.key_down(key.as_str()));
        }
    };

    let nav_class = if snap.menu_open { "navlinks open" } else { "navlinks" };
    let [shop_class, about_class, contact_class] = snap.reveal.clone();
    let [name, email, message] = snap.fields.clone();

    rsx! {
        div { tabindex: "0", onkeydown: on_key,
            if snap.gate_shown {
                div { id: "agegate", class: "agegate", role: "dialog", style: "display: grid",
                    h2 { "Oled vähemalt 18-aastane?" }
                    button { id: "age-yes", class: "btn", onclick: click(landmarks.age_confirm), "Jah, olen 18+" }
                }
            }
            header { class: "site-header",
                a { class: "brand", href: "#", "FÄM" }
                button {
                    id: "burger",
                    class: "burger",
                    aria_label: "Menüü",
                    aria_expanded: "{snap.expanded}",
                    onclick: click(landmarks.nav_trigger),
                    "☰"
                }
                nav { id: "navlinks", class: "{nav_class}",
                    a { href: "#products", onclick: click(landmarks.nav_anchors[0]), "Tooted" }
                    a { href: "#about", onclick: click(landmarks.nav_anchors[1]), "Meist" }
                    a { href: "#contact", onclick: click(landmarks.nav_anchors[2]), "Kontakt" }
                }
            }
            main {
                section { class: "hero", h1 { "Kihisev hetk purgis." } }
                section { id: "shop", class: "{shop_class}", h2 { "Tooted" } }
                div { id: "products", class: "products", dangerous_inner_html: "{snap.products}" }
                section { id: "about", class: "{about_class}", p { "FÄM on Eesti sparkling cocktail." } }
                section { id: "contact", class: "{contact_class}",
                    form { id: "contactForm", onsubmit: on_submit,
                        input { name: "name", required: true, value: "{name}", oninput: input(landmarks.name) }
                        input { name: "email", r#type: "email", required: true, value: "{email}", oninput: input(landmarks.email) }
                        textarea { name: "message", required: true, value: "{message}", oninput: input(landmarks.message) }
                        button { class: "btn", r#type: "submit", disabled: snap.submit_disabled, "{snap.submit_label}" }
                    }
                }
            }
            footer { class: "site-footer", "© " span { id: "year", "{snap.year}" } " FÄM" }
        }
    }
}
