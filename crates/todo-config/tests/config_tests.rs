use std::fs;

use tempfile::tempdir;
use todo_config::{ConfigError, Settings, SettingsManager};
use todo_domain::CategoryKey;

#[test]
fn default_settings_have_non_empty_names() {
    let settings = Settings::default();

    for key in CategoryKey::ALL {
        assert!(!settings.name(key).is_empty());
    }
}

#[test]
fn settings_manager_persists_and_loads_settings() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::new(dir.path().join("settings.json"));

    let mut settings = Settings::default();
    settings.set_name(CategoryKey::B, "Chemistry");

    manager.save(&settings).expect("save settings");
    let loaded = manager.load().expect("load settings");

    assert_eq!(loaded.name(CategoryKey::A), "Class 1");
    assert_eq!(loaded.name(CategoryKey::B), "Chemistry");
    assert!(!dir.path().join("settings.json.tmp").exists());
}

#[test]
fn missing_file_loads_defaults_without_writing() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    assert!(!manager.exists());
    assert_eq!(manager.load().expect("load"), Settings::default());
    assert!(!manager.exists());
    assert!(manager.settings_path().ends_with("config/settings.json"));
}

#[test]
fn corrupt_file_reports_serialization_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").expect("write corrupt file");

    let manager = SettingsManager::new(path);
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn saved_file_is_a_flat_key_value_record() {
    let dir = tempdir().expect("tempdir");
    let manager = SettingsManager::new(dir.path().join("settings.json"));
    manager.save(&Settings::default()).expect("save");

    let raw = fs::read_to_string(manager.settings_path()).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(value["A"], "Class 1");
    assert_eq!(value["D"], "Class 4");
}
