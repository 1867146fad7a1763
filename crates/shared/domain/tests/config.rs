use fam_domain::config::{ContactConfig, NavConfig, RevealConfig, SiteConfig};
use fam_domain::constants::AGE_VERIFIED_KEY;
use fam_domain::features::FeatureSet;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let nav = NavConfig::default();
    assert_eq!(nav.breakpoint, 720);

    let reveal = RevealConfig::default();
    assert!((reveal.threshold - 0.12).abs() < f64::EPSILON);
    assert!((reveal.bottom_margin - 0.08).abs() < f64::EPSILON);

    let contact = ContactConfig::default();
    assert_eq!(contact.reset_delay_ms, 1400);
    assert_eq!(contact.fallback_label, "Saada");

    let site = SiteConfig::default();
    assert_eq!(site.features, FeatureSet::ALL);
    assert_eq!(site.age_gate.storage_key, AGE_VERIFIED_KEY);
    assert_eq!(site.catalog.max_badges, 4);
}

#[test]
fn site_config_deserializes() {
    let raw = json!({
        "features": ["age_gate", "nav", "footer"],
        "nav": { "breakpoint": 900 },
        "contact": { "sent_label": "Sent" },
        "storage": { "data_dir": "/tmp/fam" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.features, FeatureSet::AGE_GATE | FeatureSet::NAV | FeatureSet::FOOTER);
    assert_eq!(cfg.nav.breakpoint, 900);
    assert_eq!(cfg.contact.sent_label, "Sent");
    assert_eq!(cfg.contact.reset_delay_ms, 1400);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/fam"));
}

#[test]
fn deref_mut_copies_on_write() {
    let original = SiteConfig::default();
    let mut tweaked = original.clone();
    tweaked.nav.breakpoint = 1024;

    assert_eq!(original.nav.breakpoint, 720);
    assert_eq!(tweaked.nav.breakpoint, 1024);
}
