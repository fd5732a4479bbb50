//! Core CLI loop, dispatch, and shell context helpers.

use std::{io, path::PathBuf};

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;
use todo_domain::CategoryKey;
use todo_services::CoreError;

pub use crate::core::errors::CliError;
use crate::core::{errors::TodoError, CategorySession, PlanStore, SessionError, SettingsStore};
use crate::utils::paths::app_data_dir;

use super::banner::render_banner;
use super::commands::{plans, CommandRegistry};
use super::io as cli_io;
use super::output;
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, app_data_dir())
    }

    /// Builds a context whose settings and plan files live under `base`.
    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let settings = SettingsStore::open(&base);
        let plans = PlanStore::open(&base)?;
        tracing::info!(home = %base.display(), ?mode, "shell context ready");

        Ok(ShellContext {
            mode,
            menu: CommandRegistry::main_menu(),
            plan_commands: CommandRegistry::plan_form(),
            theme: ColorfulTheme::default(),
            base_dir: base,
            settings,
            plans,
            session: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.menu.names().chain(self.plan_commands.names()).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.session {
            Some(session) if !session.is_closed() => {
                format!("todo [{}: {}]> ", session.key(), session.name())
            }
            _ => "Enter command here: ".to_string(),
        }
    }

    pub(crate) fn show_menu(&self) {
        for line in render_banner(self.settings.settings()) {
            output::plain(line);
        }
    }

    /// Opens `key` as the current session and shows its plans.
    pub(crate) fn open_category(&mut self, key: CategoryKey) -> CommandResult {
        let session = CategorySession::open_key(&self.plans, self.settings.settings(), key);
        output::section(format!("You selected [{}] {}", session.key(), session.name()));
        self.session = Some(session);
        plans::show_list(self)?;
        cli_io::print_hint("Type `help` for plan commands, `close` to save and go back.");
        Ok(())
    }

    pub(crate) fn session_mut(&mut self) -> Result<&mut CategorySession, CommandError> {
        match self.session.as_mut() {
            Some(session) if !session.is_closed() => Ok(session),
            _ => Err(CommandError::NoOpenCategory),
        }
    }

    /// Persists and drops the open session, if any. Returns the number of
    /// plans written.
    pub(crate) fn close_session(&mut self) -> Result<Option<usize>, CommandError> {
        let Some(mut session) = self.session.take() else {
            return Ok(None);
        };
        if session.is_closed() {
            return Ok(None);
        }
        let count = session.close(&self.plans)?;
        cli_io::print_success(format!(
            "Saved {} plan(s) to [{}] {}.",
            count,
            session.key(),
            session.name()
        ));
        Ok(Some(count))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let in_session = self.has_open_session();
        let handler = if in_session {
            self.plan_commands.handler(command)
        } else {
            self.menu.handler(command)
        };

        match handler {
            Some(handler) => match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            },
            None if in_session => {
                self.suggest_command(raw);
                Ok(LoopControl::Continue)
            }
            None => {
                self.invalid_command(raw);
                Ok(LoopControl::Continue)
            }
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let raw = &tokens[0];
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, raw, &args)
    }

    /// Rejects input that is not one of the menu commands.
    pub(crate) fn invalid_command(&self, input: &str) {
        tracing::debug!(command = input, "invalid menu command");
        cli_io::print_error("Invalid command");
        cli_io::print_hint("Choose A, B, C or D to open a class, E to rename, X to exit.");
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .plan_commands
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit?", true).map_err(CliError::from)
    }

    /// Closes whatever is still open before the shell stops.
    pub(crate) fn shutdown(&mut self) -> Result<(), CliError> {
        self.close_session()?;
        self.running = false;
        tracing::info!("shell stopped");
        Ok(())
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_hint("Use `help` for usage details.");
                Ok(())
            }
            CommandError::Session(SessionError::IndexOutOfView(index)) => {
                self.print_error(&SessionError::IndexOutOfView(index).to_string());
                cli_io::print_hint("Use `list` to see plan numbers.");
                Ok(())
            }
            other => {
                tracing::debug!(error = ?other, "command failed");
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("No class is open. Pick one with A, B, C or D.")]
    NoOpenCategory,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Core(#[from] TodoError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(TodoError::from(err))
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Core(inner) => CliError::Core(inner),
            other => CliError::Command(other.to_string()),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Input(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    base: &std::path::Path,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_base_dir(CliMode::Script, base.to_path_buf())?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
