use fam_kernel::domain::config::LoggingConfig;
use fam_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// One process, one global subscriber: the first successful init wins.
#[test]
#[serial]
fn config_with_path_writes_log_files_and_blocks_second_init() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let dir = tmp.path().join("logs");
    let config = LoggingConfig { level: "debug".to_owned(), path: Some(dir.clone()), json: true };

    let logger = Logger::from_config("fam-site-test", &config)?;
    assert!(logger.has_file());

    tracing::info!(feature = "age_gate", "Overlay shown");

    let second = Logger::builder().name("fam-site-again").level(LevelFilter::INFO).init();
    assert!(matches!(second, Err(LoggerError::Subscriber { .. })));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("Overlay shown"));
    assert!(contents.lines().any(|line| line.starts_with('{')), "records should be JSON");
    Ok(())
}

#[test]
#[serial]
fn unknown_level_in_config_is_rejected() {
    let config = LoggingConfig { level: "chatty".to_owned(), ..LoggingConfig::default() };
    let err = Logger::from_config("fam-site-test", &config).unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { context: Some(_), .. }));
}
