use std::path::Path;

use todo_config::Settings;
use todo_domain::CategoryKey;
use todo_services::{storage::PlanStorage, CoreError};
use todo_storage_text::TextPlanStorage;

use crate::utils::paths::plans_dir_in;

/// Loads and saves a category's plan lines addressed by display name.
///
/// Unknown names and I/O failures are logged and turn into an empty list or
/// a dropped write.
pub struct PlanStore {
    storage: Box<dyn PlanStorage>,
}

impl PlanStore {
    pub fn new(storage: Box<dyn PlanStorage>) -> Self {
        Self { storage }
    }

    /// Text-file store under `<base>/plans`.
    pub fn open(base: &Path) -> Result<Self, CoreError> {
        let storage = TextPlanStorage::new(plans_dir_in(base))?;
        Ok(Self::new(Box::new(storage)))
    }

    /// Reverse lookup of a display name against the current mapping.
    pub fn resolve_key(&self, settings: &Settings, name: &str) -> Result<CategoryKey, CoreError> {
        settings.key_for_name(name).ok_or_else(|| {
            tracing::warn!(name, "no category with this name");
            CoreError::CategoryNotFound(name.to_string())
        })
    }

    /// Stored lines of the named category in file order.
    pub fn load(&self, settings: &Settings, name: &str) -> Vec<String> {
        let Ok(key) = self.resolve_key(settings, name) else {
            return Vec::new();
        };
        self.load_key(key)
    }

    pub fn load_key(&self, key: CategoryKey) -> Vec<String> {
        match self.storage.load_lines(key) {
            Ok(lines) => {
                tracing::debug!(%key, count = lines.len(), "plans loaded");
                lines
            }
            Err(err) => {
                tracing::error!(%key, error = %err, "failed to read plans");
                Vec::new()
            }
        }
    }

    /// Replaces the stored lines of the named category.
    pub fn save(&self, settings: &Settings, name: &str, lines: &[String]) {
        if let Ok(key) = self.resolve_key(settings, name) {
            self.save_key(key, lines);
        }
    }

    pub fn save_key(&self, key: CategoryKey, lines: &[String]) {
        match self.storage.save_lines(key, lines) {
            Ok(()) => tracing::info!(%key, count = lines.len(), "plans saved"),
            Err(err) => tracing::error!(%key, error = %err, "failed to save plans"),
        }
    }

    pub fn plan_path(&self, key: CategoryKey) -> std::path::PathBuf {
        self.storage.plan_path(key)
    }
}
