use std::result::Result as StdResult;

use thiserror::Error;
use todo_config::ConfigError;
use todo_services::{CoreError, ValidationError};

/// Unified error type for core/storage/config layers.
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Plan not found at position {}", .0 + 1)]
    PlanNotFound(usize),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, TodoError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TodoError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        TodoError::StorageError(err.to_string())
    }
}

impl From<ValidationError> for TodoError {
    fn from(err: ValidationError) -> Self {
        TodoError::InvalidInput(err.message)
    }
}

impl From<CoreError> for TodoError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CategoryNotFound(name) => TodoError::CategoryNotFound(name),
            CoreError::PlanNotFound(index) => TodoError::PlanNotFound(index),
            CoreError::Validation(err) => TodoError::from(err),
            CoreError::Storage { key, message } => {
                TodoError::StorageError(format!("category {key}: {message}"))
            }
            CoreError::Io(err) => TodoError::from(err),
        }
    }
}

impl From<ConfigError> for TodoError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TodoError::StorageError(io.to_string()),
            ConfigError::Serde(message) => TodoError::ConfigError(message),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(TodoError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(TodoError::from(err))
    }
}
