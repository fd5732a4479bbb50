use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::core::{CategorySession, PlanStore, SettingsStore};

use super::commands::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub menu: CommandRegistry,
    pub plan_commands: CommandRegistry,
    pub theme: ColorfulTheme,
    pub base_dir: PathBuf,
    pub settings: SettingsStore,
    pub plans: PlanStore,
    /// Open category, `None` while at the main menu.
    pub session: Option<CategorySession>,
    pub running: bool,
}

impl ShellContext {
    pub fn has_open_session(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| !session.is_closed())
            .unwrap_or(false)
    }
}
