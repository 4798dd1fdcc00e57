//! Shared test fixtures: tracing routed to the test writer, scratch directories, and config files
//! written from inline TOML.

use std::sync::Once;

use tempfile::TempDir;

use crate::config::Config;

static INIT: Once = Once::new();

/// Route tracing output to the test writer and hand out a scratch directory.
pub fn init() -> TempDir {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")))
            .with_test_writer()
            .try_init();
    });
    TempDir::new().expect("failed to create temp dir")
}

// Writes `contents` as config.toml into a fresh scratch directory and parses it.
pub fn config_from_toml(contents: &str) -> (crate::error::Result<Config>, TempDir) {
    let temp_dir = init();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("failed to write config");
    (Config::parse(Some(&path)), temp_dir)
}
