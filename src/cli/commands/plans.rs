use todo_domain::Plan;
use todo_services::{
    codec,
    validation::{parse_date_field, parse_time_field},
    ValidationError,
};

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{FormEngine, FormResult, PlanWizard, WizardInteraction};
use crate::cli::{io as cli_io, output};
use crate::core::{CategorySession, SessionError};

use super::{print_help, CommandDefinition};

const ADD_USAGE: &str = "add [<description...>] [--due D/M] [--time H:MM]";
const EDIT_USAGE: &str = "edit <n> [<description...>] [--due D/M] [--time H:MM]";
const DELETE_USAGE: &str = "delete <n>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("list", "Show the plans of this class", "list", cmd_list),
        CommandDefinition::new("add", "Add a plan", ADD_USAGE, cmd_add),
        CommandDefinition::new("edit", "Change plan <n>", EDIT_USAGE, cmd_edit),
        CommandDefinition::new("delete", "Remove plan <n>", DELETE_USAGE, cmd_delete),
        CommandDefinition::new("close", "Save and return to the menu", "close", cmd_close),
        CommandDefinition::new("help", "Show available commands", "help", cmd_help),
    ]
}

/// Prints the numbered plans of the open category.
pub(crate) fn show_list(context: &mut ShellContext) -> CommandResult {
    let plans = context.session_mut()?.view()?;
    if plans.is_empty() {
        cli_io::print_info("No plans yet. Use `add` to create one.");
        return Ok(());
    }
    for (index, plan) in plans.iter().enumerate() {
        output::plain(format!("{:>3}. {}", index + 1, codec::encode(plan)));
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_list(context)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.mode() == CliMode::Script {
        return Err(usage_error(ADD_USAGE));
    }
    context.session_mut()?.begin_add()?;
    let outcome = if args.is_empty() {
        run_wizard(&PlanWizard::create())
    } else {
        parse_plan_args(args, None).map(Some)
    };
    match settle(context, outcome, CategorySession::commit_add)? {
        Some(index) => cli_io::print_success(format!("Added plan #{}.", index + 1)),
        None => cli_io::print_info("Nothing added."),
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (number, rest) = args
        .split_first()
        .ok_or_else(|| usage_error(EDIT_USAGE))?;
    let index = parse_index(number)?;
    if rest.is_empty() && context.mode() == CliMode::Script {
        return Err(usage_error(EDIT_USAGE));
    }

    let current = context.session_mut()?.begin_edit(index)?.clone();
    let outcome = if rest.is_empty() {
        run_wizard(&PlanWizard::edit(&current))
    } else {
        parse_plan_args(rest, Some(&current)).map(Some)
    };
    match settle(context, outcome, CategorySession::commit_edit)? {
        Some(index) => cli_io::print_success(format!("Updated plan #{}.", index + 1)),
        None => cli_io::print_info("Plan left unchanged."),
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [number] = args else {
        return Err(usage_error(DELETE_USAGE));
    };
    let index = parse_index(number)?;

    let line = codec::encode(context.session_mut()?.begin_delete(index)?);
    let confirmed = match context.mode() {
        CliMode::Interactive => {
            cli_io::confirm_action(context.theme(), &format!("Delete `{line}`?"), false)
        }
        CliMode::Script => Ok(true),
    };

    let session = context.session_mut()?;
    match confirmed {
        Ok(true) => {
            let removed = session.confirm_delete()?;
            cli_io::print_success(format!("Deleted `{}`.", codec::encode(&removed)));
            Ok(())
        }
        Ok(false) => {
            session.cancel()?;
            cli_io::print_info("Nothing deleted.");
            Ok(())
        }
        Err(err) => {
            session.cancel()?;
            Err(err)
        }
    }
}

fn cmd_close(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.close_session()?;
    context.show_menu();
    Ok(())
}

fn cmd_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Plan commands");
    print_help(&context.plan_commands);
    if context.mode() == CliMode::Interactive {
        cli_io::print_hint(
            "`add` and `edit <n>` without details open a form. In the form type :back, :help, :clear or :cancel.",
        );
    }
    Ok(())
}

/// Commits a collected plan, or returns the session to viewing when the
/// input was cancelled or rejected.
fn settle<F>(
    context: &mut ShellContext,
    outcome: Result<Option<Plan>, CommandError>,
    commit: F,
) -> Result<Option<usize>, CommandError>
where
    F: FnOnce(&mut CategorySession, Plan) -> Result<usize, SessionError>,
{
    let session = context.session_mut()?;
    let result = match outcome {
        Ok(Some(plan)) => commit(&mut *session, plan).map(Some).map_err(CommandError::from),
        other => other.map(|_| None),
    };
    if !matches!(result, Ok(Some(_))) {
        session.cancel()?;
    }
    result
}

fn run_wizard(wizard: &PlanWizard) -> Result<Option<Plan>, CommandError> {
    let mut interaction = WizardInteraction::new();
    match FormEngine::new(wizard).run(&mut interaction)? {
        FormResult::Completed(plan) => Ok(Some(plan)),
        FormResult::Cancelled => Ok(None),
    }
}

fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}

/// Converts a 1-based plan number to an index.
fn parse_index(raw: &str) -> Result<usize, CommandError> {
    match raw.trim().parse::<usize>() {
        Ok(number) if number >= 1 => Ok(number - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{raw}` is not a plan number (numbers start at 1)"
        ))),
    }
}

/// Builds a plan from inline arguments. Fields not given keep the values of
/// `base`; `none` clears an optional field.
fn parse_plan_args(args: &[&str], base: Option<&Plan>) -> Result<Plan, CommandError> {
    let mut words = Vec::new();
    let mut due = base.and_then(|plan| plan.due);
    let mut time = base.and_then(|plan| plan.time);

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--due" => {
                let value = flag_value(iter.next(), "--due", "5/6")?;
                due = parse_optional(value, parse_date_field)?;
            }
            "--time" => {
                let value = flag_value(iter.next(), "--time", "14:30")?;
                time = parse_optional(value, parse_time_field)?;
            }
            word => words.push(word),
        }
    }

    let description = if words.is_empty() {
        base.map(|plan| plan.description.clone()).ok_or_else(|| {
            CommandError::InvalidArguments("A plan needs a description".into())
        })?
    } else {
        words.join(" ")
    };
    Ok(Plan::new(description).with_due(due).with_time(time))
}

fn flag_value<'a>(
    value: Option<&&'a str>,
    flag: &str,
    example: &str,
) -> Result<&'a str, CommandError> {
    value.copied().ok_or_else(|| {
        CommandError::InvalidArguments(format!("`{flag}` needs a value, for example {example}"))
    })
}

fn parse_optional<T>(
    value: &str,
    parse: fn(&str) -> Result<Option<T>, ValidationError>,
) -> Result<Option<T>, CommandError> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    parse(value).map_err(|err| CommandError::InvalidArguments(err.message))
}
