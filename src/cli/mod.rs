pub mod banner;
pub mod commands;
pub mod core;
pub mod forms;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV};
