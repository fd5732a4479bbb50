//! todo-config
//!
//! Persistent category names.
//! Owns the Settings data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::SettingsManager;
pub use model::Settings;
