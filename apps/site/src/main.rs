#![windows_subsystem = "windows"]

use anyhow::Context;
use fam::kernel::page::Capabilities;
use fam_logger::Logger;
use fam_site::{Shell, SiteApp, open_store};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = fam::config::load(path.as_deref()).context("Critical: Configuration is malformed")?;

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    let app = SiteApp::new().with_title("FÄM");
    let store = open_store(&config.storage);
    // The webview shell has no layout feedback, so reveal falls back to showing everything.
    let shell = Shell::start(config, store, app.viewport(), Capabilities { intersection_observer: false });

    app.launch(shell);
    Ok(())
}
