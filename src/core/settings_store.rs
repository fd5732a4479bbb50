use std::path::{Path, PathBuf};

use todo_config::{Settings, SettingsManager};
use todo_domain::CategoryKey;

use crate::core::errors::{Result, TodoError};

/// Category display names, loaded and saved without ever failing the caller.
///
/// Read or parse problems fall back to the built-in defaults and write
/// problems are dropped. Both are reported through `tracing`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    manager: SettingsManager,
    settings: Settings,
}

impl SettingsStore {
    /// Opens the store rooted at `base` and loads the current names.
    pub fn open(base: &Path) -> Self {
        let manager = match SettingsManager::with_base_dir(base.to_path_buf()) {
            Ok(manager) => manager,
            Err(err) => {
                tracing::warn!(error = %err, "could not prepare settings directory");
                SettingsManager::new(base.join("config").join("settings.json"))
            }
        };
        Self::with_manager(manager)
    }

    pub fn with_manager(manager: SettingsManager) -> Self {
        let mut store = Self {
            manager,
            settings: Settings::default(),
        };
        store.load();
        store
    }

    /// Reloads the mapping from disk. A missing file is created with the
    /// defaults; any other failure keeps the defaults in memory.
    pub fn load(&mut self) -> &Settings {
        let existed = self.manager.exists();
        self.settings = match self.manager.load() {
            Ok(settings) => {
                tracing::debug!(path = %self.manager.settings_path().display(), "settings loaded");
                settings
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.manager.settings_path().display(),
                    error = %err,
                    "settings unreadable, using defaults"
                );
                Settings::default()
            }
        };
        if !existed {
            self.persist();
        }
        &self.settings
    }

    /// Replaces the mapping and writes it. Write failures are logged and
    /// swallowed; the new mapping stays in memory either way.
    pub fn save(&mut self, settings: Settings) {
        self.settings = settings;
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.manager.save(&self.settings) {
            tracing::error!(
                path = %self.manager.settings_path().display(),
                error = %err,
                "failed to save settings"
            );
        }
    }

    /// Renames a category and persists the mapping. Empty names are refused
    /// and leave the previous name untouched.
    pub fn rename(&mut self, key: CategoryKey, new_name: &str) -> Result<()> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            tracing::info!(%key, "rejected empty category name");
            return Err(TodoError::InvalidInput(
                "Category name cannot be empty".into(),
            ));
        }
        let previous = self.settings.name(key).to_string();
        self.settings.set_name(key, trimmed);
        tracing::info!(%key, from = %previous, to = %trimmed, "category renamed");
        self.persist();
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn name(&self, key: CategoryKey) -> &str {
        self.settings.name(key)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.manager.settings_path().to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(dir.path());
        assert_eq!(store.name(CategoryKey::A), "Class 1");
        assert!(store.settings_path().exists());
    }

    #[test]
    fn rename_persists_and_rejects_blank_names() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::open(dir.path());

        store.rename(CategoryKey::B, "  Maths ").unwrap();
        assert!(store.rename(CategoryKey::B, "").is_err());
        assert!(store.rename(CategoryKey::B, "   ").is_err());
        assert_eq!(store.name(CategoryKey::B), "Maths");

        let reopened = SettingsStore::open(dir.path());
        assert_eq!(reopened.name(CategoryKey::B), "Maths");
    }

    #[test]
    fn save_replaces_and_persists_a_mapping() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::open(dir.path());

        let mut settings = Settings::default();
        settings.set_name(CategoryKey::A, "Homework");
        settings.set_name(CategoryKey::D, "Errands");
        store.save(settings.clone());

        assert_eq!(store.settings(), &settings);
        let mut reopened = SettingsStore::open(dir.path());
        assert_eq!(reopened.load(), &settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("settings.json"), "{ not json").unwrap();

        let store = SettingsStore::open(dir.path());
        assert_eq!(store.settings(), &Settings::default());
    }
}
