use fam::domain::config::{SiteConfig, StorageConfig};
use fam::kernel::prelude::*;
use fam_site::{Shell, SiteApp, open_store};
use std::fs;
use tempfile::tempdir;

fn start(config: &SiteConfig) -> Shell {
    let store = open_store(&config.storage);
    Shell::start(config.clone(), store, SiteApp::new().viewport(), Capabilities { intersection_observer: false })
}

fn gate_display(shell: &Shell) -> Option<String> {
    shell.site.lock().page().style(shell.landmarks.age_gate, "display").map(str::to_owned)
}

#[test]
fn age_confirmation_survives_a_restart() {
    let tmp = tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.storage.data_dir = tmp.path().join("data");

    let first = start(&config);
    assert_eq!(gate_display(&first).as_deref(), Some("grid"));
    first.site.lock().click(first.landmarks.age_confirm);
    drop(first);

    let second = start(&config);
    assert_eq!(gate_display(&second).as_deref(), Some("none"));
}

#[test]
fn unusable_data_dir_falls_back_to_memory() {
    let tmp = tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    fs::write(&blocker, b"").unwrap();

    let store = open_store(&StorageConfig { data_dir: blocker });
    store.set("fam_age_verified_v1", "true").unwrap();
    assert_eq!(store.get("fam_age_verified_v1").unwrap().as_deref(), Some("true"));
}

#[test]
fn shell_reveals_everything_and_stamps_the_year() {
    let tmp = tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.storage.data_dir = tmp.path().to_path_buf();

    let shell = start(&config);
    let site = shell.site.lock();
    assert!(site.is_ready());
    assert_eq!(site.page().by_class("in"), site.page().by_class("reveal"));
    assert_eq!(site.page().text(shell.landmarks.year).map(str::len), Some(4));
}
