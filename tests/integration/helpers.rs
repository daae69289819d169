//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::process::Command;

use chrono::{NaiveDate, NaiveDateTime};

/// Directory holding the HTML fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Contents of a fixture file.
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Fixed export time so transcripts compare byte for byte.
pub fn exported_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(15, 9, 26)
        .unwrap()
}

/// The chatmd binary, isolated from the user's config file.
pub fn chatmd(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatmd"));
    cmd.arg("--config")
        .arg(config_dir.join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("CHATMD_LOG");
    cmd
}
