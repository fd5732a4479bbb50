use todo_domain::CategoryKey;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::{io as cli_io, output};
use crate::core::errors::TodoError;
use crate::utils::build_info;

use super::{print_help, CommandDefinition};

const RENAME_USAGE: &str = "E [<class> <new name...>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("a", "Open class A", "A", cmd_open_a),
        CommandDefinition::new("b", "Open class B", "B", cmd_open_b),
        CommandDefinition::new("c", "Open class C", "C", cmd_open_c),
        CommandDefinition::new("d", "Open class D", "D", cmd_open_d),
        CommandDefinition::new("e", "Rename a class", RENAME_USAGE, cmd_rename),
        CommandDefinition::new("x", "Exit", "X", cmd_exit),
        CommandDefinition::new("help", "Show available commands", "help", cmd_help),
        CommandDefinition::new("version", "Show build information", "version", cmd_version),
    ]
}

fn cmd_open_a(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    open(context, CategoryKey::A, args)
}

fn cmd_open_b(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    open(context, CategoryKey::B, args)
}

fn cmd_open_c(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    open(context, CategoryKey::C, args)
}

fn cmd_open_d(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    open(context, CategoryKey::D, args)
}

fn open(context: &mut ShellContext, key: CategoryKey, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        context.invalid_command(&args_line(key.as_char(), args));
        return Ok(());
    }
    context.open_category(key)
}

fn args_line(command: char, args: &[&str]) -> String {
    format!("{command} {}", args.join(" "))
}

fn cmd_rename(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (key, name) = match args {
        [] if context.mode() == CliMode::Interactive => match prompt_rename(context)? {
            Some(choice) => choice,
            None => return Ok(()),
        },
        [] => {
            return Err(CommandError::InvalidArguments(format!(
                "usage: {RENAME_USAGE}"
            )))
        }
        [key, rest @ ..] => {
            let key = key
                .parse::<CategoryKey>()
                .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
            (key, rest.join(" "))
        }
    };

    let previous = context.settings.name(key).to_string();
    match context.settings.rename(key, &name) {
        Ok(()) => {
            cli_io::print_success(format!(
                "[{key}] `{previous}` is now `{}`.",
                context.settings.name(key)
            ));
            context.show_menu();
            Ok(())
        }
        Err(TodoError::InvalidInput(message)) => {
            cli_io::print_warning(format!("{message}; [{key}] stays `{previous}`."));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Asks which class to rename and the new name; `None` when dismissed.
fn prompt_rename(context: &ShellContext) -> Result<Option<(CategoryKey, String)>, CommandError> {
    let items: Vec<String> = context
        .settings
        .settings()
        .categories()
        .iter()
        .map(ToString::to_string)
        .collect();
    let Some(index) = cli_io::select_item(context.theme(), "Rename which class?", &items)? else {
        return Ok(None);
    };
    let Some(key) = CategoryKey::ALL.get(index).copied() else {
        return Ok(None);
    };
    let current = context.settings.name(key).to_string();
    let name = cli_io::prompt_text(context.theme(), "New name", Some(&current))?;
    Ok(Some((key, name)))
}

fn cmd_exit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        context.invalid_command(&args_line('X', args));
        return Ok(());
    }
    Err(CommandError::ExitRequested)
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    print_help(&context.menu);
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for line in build_info::current().summary_lines() {
        output::plain(line);
    }
    output::plain(format!("  Data:    {}", context.base_dir.display()));
    Ok(())
}
