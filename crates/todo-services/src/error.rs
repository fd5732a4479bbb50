use std::{fmt, io};

use thiserror::Error;
use todo_domain::CategoryKey;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Plan not found at position {}", .0 + 1)]
    PlanNotFound(usize),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Storage error for category {key}: {message}")]
    Storage { key: CategoryKey, message: String },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// User-facing rejection of a date, time or description input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}
