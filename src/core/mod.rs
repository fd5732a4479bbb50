pub mod errors;
pub mod plan_store;
pub mod session;
pub mod settings_store;

pub use errors::{CliError, TodoError};
pub use plan_store::PlanStore;
pub use session::{CategorySession, SessionError, SessionState};
pub use settings_store::SettingsStore;
