use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use todo_domain::{Category, CategoryKey};

/// Display names chosen by the user for the four categories.
///
/// Serialized as a flat JSON object, e.g. `{"A": "Class 1", ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    names: BTreeMap<CategoryKey, String>,
}

impl Default for Settings {
    fn default() -> Self {
        let names = CategoryKey::ALL
            .iter()
            .map(|key| (*key, key.default_name().to_string()))
            .collect();
        Self { names }
    }
}

impl Settings {
    /// Fills keys that are missing or blank with their default names.
    pub fn with_missing_defaults(mut self) -> Self {
        for key in CategoryKey::ALL {
            let entry = self.names.entry(key).or_default();
            if entry.trim().is_empty() {
                *entry = key.default_name().to_string();
            }
        }
        self
    }

    pub fn name(&self, key: CategoryKey) -> &str {
        self.names
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_name())
    }

    pub fn set_name(&mut self, key: CategoryKey, name: impl Into<String>) {
        self.names.insert(key, name.into());
    }

    /// Reverse lookup of a display name. With duplicate names the first key
    /// in `A..D` order wins.
    pub fn key_for_name(&self, name: &str) -> Option<CategoryKey> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| self.name(*key) == name)
    }

    pub fn categories(&self) -> Vec<Category> {
        CategoryKey::ALL
            .iter()
            .map(|key| Category::new(*key, self.name(*key)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_key() {
        let settings = Settings::default();
        assert_eq!(settings.name(CategoryKey::A), "Class 1");
        assert_eq!(settings.name(CategoryKey::D), "Class 4");
        assert_eq!(settings.categories().len(), 4);
    }

    #[test]
    fn reverse_lookup_prefers_first_key() {
        let mut settings = Settings::default();
        settings.set_name(CategoryKey::C, "Class 1");
        assert_eq!(settings.key_for_name("Class 1"), Some(CategoryKey::A));
        assert_eq!(settings.key_for_name("Class 3"), None);
    }

    #[test]
    fn partial_records_are_completed() {
        let settings: Settings = serde_json::from_str(r#"{"B": "Maths", "C": "  "}"#).unwrap();
        let settings = settings.with_missing_defaults();
        assert_eq!(settings.name(CategoryKey::A), "Class 1");
        assert_eq!(settings.name(CategoryKey::B), "Maths");
        assert_eq!(settings.name(CategoryKey::C), "Class 3");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"E": "Extra"}"#).is_err());
    }
}
