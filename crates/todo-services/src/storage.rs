use std::path::PathBuf;

use todo_domain::CategoryKey;

use crate::CoreError;

/// Abstraction over persistence backends storing one plan list per category.
pub trait PlanStorage: Send + Sync {
    /// Reads the non-empty, trimmed lines of a category in file order.
    /// A category that was never saved yields an empty list.
    fn load_lines(&self, key: CategoryKey) -> Result<Vec<String>, CoreError>;

    /// Replaces the whole stored list of a category.
    fn save_lines(&self, key: CategoryKey, lines: &[String]) -> Result<(), CoreError>;

    /// Location of the category's backing file.
    fn plan_path(&self, key: CategoryKey) -> PathBuf;
}
