#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;
use todo_core::core::{PlanStore, SettingsStore};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const BIN_NAME: &str = "todo_core_cli";

/// Fresh data directory that outlives the calling test.
pub fn temp_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Stores rooted in a fresh data directory.
pub fn setup_test_env() -> (PathBuf, SettingsStore, PlanStore) {
    let base = temp_home();
    let settings = SettingsStore::open(&base);
    let plans = PlanStore::open(&base).expect("create plan store for temp dir");
    (base, settings, plans)
}

pub fn script_command(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env(todo_core::cli::SCRIPT_ENV, "1")
        .env(todo_core::utils::paths::HOME_ENV, home)
        .env("RUST_LOG", "off");
    cmd
}
