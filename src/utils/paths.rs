use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".todo_core";
const PLANS_DIR: &str = "plans";

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "TODO_CORE_HOME";

/// Returns the application-specific data directory, defaulting to `~/.todo_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding one plan file per category under `base`.
pub fn plans_dir_in(base: &std::path::Path) -> PathBuf {
    base.join(PLANS_DIR)
}
