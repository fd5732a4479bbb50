//! Wizard-style form framework used by the interactive `add` and `edit`
//! commands.
//!
//! A [`FormFlow`] describes its fields and turns the collected text values
//! into an output; [`FormEngine`] walks the fields through a
//! [`FormInteraction`], re-prompting on invalid input until the user
//! confirms or cancels.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use dialoguer::theme::ColorfulTheme;
use todo_domain::Plan;
use todo_services::{
    codec::PlanFields,
    validation::{parse_date_field, parse_time_field, validate_description},
};

use crate::cli::io;
use crate::core::errors::TodoError;

/// High-level lifecycle states emitted by the form runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormResult<T> {
    Completed(T),
    Cancelled,
}

/// Describes how prompts can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// User supplied a concrete value.
    Value(String),
    /// Keep the current value.
    Keep,
    /// Remove the current value of an optional field.
    Clear,
    /// Abort the entire wizard immediately.
    Cancel,
    /// Go back to the previous field.
    Back,
    /// Request additional information for the current field.
    Help,
}

/// Responses accepted when confirming the collected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResponse {
    Confirm,
    Back,
    Cancel,
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

type ValidatorCallback = dyn Fn(&str) -> Result<String, String> + Send + Sync;

/// Field validation hook. Returns the normalized value; an empty result means
/// the field is left unset.
#[derive(Clone)]
pub struct Validator(Arc<ValidatorCallback>);

impl Validator {
    pub fn new(func: impl Fn(&str) -> Result<String, String> + Send + Sync + 'static) -> Self {
        Self(Arc::new(func))
    }

    fn validate(&self, input: &str) -> Result<String, FieldError> {
        (self.0)(input).map_err(FieldError::new)
    }
}

/// Declarative description of a single form field.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    /// Format hint shown next to the label. Never part of the value.
    pub hint: Option<&'static str>,
    pub help: Option<&'static str>,
    pub validator: Validator,
}

impl FieldDescriptor {
    pub fn new(key: &'static str, label: &'static str, validator: Validator) -> Self {
        Self {
            key,
            label,
            required: true,
            hint: None,
            help: None,
            validator,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

/// Metadata describing a full wizard, including field order.
pub struct FormDescriptor {
    pub name: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

impl FormDescriptor {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        Self { name, fields }
    }
}

/// What a prompt needs to render the current field.
pub struct PromptContext<'a> {
    pub descriptor: &'a FieldDescriptor,
    /// Accepted value of the field, if any.
    pub current: Option<&'a str>,
    /// Text the user entered last time when it failed validation.
    pub rejected: Option<&'a str>,
    pub index: usize,
    pub total: usize,
}

impl<'a> PromptContext<'a> {
    /// Text to pre-fill the prompt with.
    pub fn initial(&self) -> Option<&'a str> {
        self.rejected.or(self.current)
    }
}

pub trait FormInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse;

    fn confirm(&mut self, lines: &[String]) -> ConfirmationResponse;
}

/// Maps raw prompt text to a response. Empty input clears the field.
pub fn parse_prompt_response(input: &str) -> PromptResponse {
    match input.trim() {
        "" | ":clear" => PromptResponse::Clear,
        ":back" => PromptResponse::Back,
        ":help" => PromptResponse::Help,
        ":cancel" => PromptResponse::Cancel,
        ":keep" => PromptResponse::Keep,
        _ => PromptResponse::Value(input.to_string()),
    }
}

/// Terminal implementation backed by `dialoguer` prompts.
pub struct WizardInteraction {
    theme: ColorfulTheme,
}

impl WizardInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn step_title(context: &PromptContext<'_>) -> String {
        let label = match context.descriptor.hint {
            Some(hint) => format!("{} ({})", context.descriptor.label, hint),
            None => context.descriptor.label.to_string(),
        };
        format!("Step {} of {}: {}", context.index + 1, context.total, label)
    }
}

impl Default for WizardInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl FormInteraction for WizardInteraction {
    fn prompt_field(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        let title = Self::step_title(context);
        match io::prompt_text(&self.theme, &title, context.initial()) {
            Ok(input) => parse_prompt_response(&input),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    field = context.descriptor.key,
                    "prompt failed, cancelling form"
                );
                PromptResponse::Cancel
            }
        }
    }

    fn confirm(&mut self, lines: &[String]) -> ConfirmationResponse {
        for line in lines {
            println!("{line}");
        }
        let options = vec![
            "Save".to_string(),
            "Back to the last field".to_string(),
            "Cancel".to_string(),
        ];
        match io::select_item(&self.theme, "Confirm", &options) {
            Ok(Some(0)) => ConfirmationResponse::Confirm,
            Ok(Some(1)) => ConfirmationResponse::Back,
            _ => ConfirmationResponse::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSessionEvent {
    Moved,
    Repeat,
    Cancelled,
}

/// Represents an in-progress wizard session. Callers may drive the session
/// manually or use [`FormEngine::run`] to handle the full loop.
pub struct FormSession<'a> {
    descriptor: &'a FormDescriptor,
    values: BTreeMap<String, String>,
    rejected: Option<String>,
    index: usize,
}

impl<'a> FormSession<'a> {
    pub fn new(descriptor: &'a FormDescriptor, defaults: BTreeMap<String, String>) -> Self {
        Self {
            descriptor,
            values: defaults,
            rejected: None,
            index: 0,
        }
    }

    pub fn current_field(&self) -> Option<PromptContext<'_>> {
        self.descriptor
            .fields
            .get(self.index)
            .map(|field| PromptContext {
                descriptor: field,
                current: self.values.get(field.key).map(String::as_str),
                rejected: self.rejected.as_deref(),
                index: self.index,
                total: self.descriptor.fields.len(),
            })
    }

    pub fn apply_response(
        &mut self,
        response: PromptResponse,
    ) -> Result<FormSessionEvent, FieldError> {
        let Some(field) = self.descriptor.fields.get(self.index) else {
            return Ok(FormSessionEvent::Repeat);
        };

        match response {
            PromptResponse::Cancel => Ok(FormSessionEvent::Cancelled),
            PromptResponse::Back => {
                if self.index > 0 {
                    self.move_to(self.index - 1);
                    Ok(FormSessionEvent::Moved)
                } else {
                    io::print_warning("Already at the first field.");
                    Ok(FormSessionEvent::Repeat)
                }
            }
            PromptResponse::Help => {
                io::print_info(
                    field
                        .help
                        .unwrap_or("No additional information available for this field."),
                );
                Ok(FormSessionEvent::Repeat)
            }
            PromptResponse::Keep => {
                if self.values.contains_key(field.key) || !field.required {
                    self.move_to(self.index + 1);
                    Ok(FormSessionEvent::Moved)
                } else {
                    io::print_warning("This field is required.");
                    Ok(FormSessionEvent::Repeat)
                }
            }
            PromptResponse::Clear => {
                if field.required {
                    io::print_warning("This field is required.");
                    Ok(FormSessionEvent::Repeat)
                } else {
                    self.values.remove(field.key);
                    self.move_to(self.index + 1);
                    Ok(FormSessionEvent::Moved)
                }
            }
            PromptResponse::Value(raw) => match field.validator.validate(&raw) {
                Ok(value) => {
                    if value.is_empty() {
                        self.values.remove(field.key);
                    } else {
                        self.values.insert(field.key.to_string(), value);
                    }
                    self.move_to(self.index + 1);
                    Ok(FormSessionEvent::Moved)
                }
                Err(err) => {
                    io::print_warning(&err.message);
                    self.rejected = Some(raw);
                    Err(err)
                }
            },
        }
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.rejected = None;
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.descriptor.fields.len()
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

/// High-level form contract for entity-specific wizards.
pub trait FormFlow {
    type Output;
    type Error;

    /// Descriptor controlling field order and behaviour.
    fn descriptor(&self) -> &FormDescriptor;

    /// Values used to pre-populate the session.
    fn defaults(&self) -> BTreeMap<String, String> {
        BTreeMap::new()
    }

    /// Builds the concrete output after successful completion.
    fn commit(&self, values: BTreeMap<String, String>) -> Result<Self::Output, Self::Error>;
}

/// Drives a [`FormFlow`] using a [`FormInteraction`] implementation.
pub struct FormEngine<'a, F: FormFlow> {
    flow: &'a F,
}

impl<'a, F: FormFlow> FormEngine<'a, F> {
    pub fn new(flow: &'a F) -> Self {
        Self { flow }
    }

    pub fn run<I: FormInteraction>(
        &self,
        interaction: &mut I,
    ) -> Result<FormResult<F::Output>, F::Error> {
        let descriptor = self.flow.descriptor();
        let mut session = FormSession::new(descriptor, self.flow.defaults());

        loop {
            if session.is_complete() {
                let lines = summary_lines(descriptor, session.values());
                match interaction.confirm(&lines) {
                    ConfirmationResponse::Confirm => {
                        let output = self.flow.commit(session.values().clone())?;
                        return Ok(FormResult::Completed(output));
                    }
                    ConfirmationResponse::Back if !descriptor.fields.is_empty() => {
                        session.move_to(descriptor.fields.len() - 1);
                        continue;
                    }
                    ConfirmationResponse::Back | ConfirmationResponse::Cancel => {
                        return Ok(FormResult::Cancelled);
                    }
                }
            }

            let response = match session.current_field() {
                Some(context) => interaction.prompt_field(&context),
                None => continue,
            };
            // Validation failures were already reported; the field repeats.
            if let Ok(FormSessionEvent::Cancelled) = session.apply_response(response) {
                return Ok(FormResult::Cancelled);
            }
        }
    }
}

fn summary_lines(descriptor: &FormDescriptor, values: &BTreeMap<String, String>) -> Vec<String> {
    let mut lines = vec![format!("Review {}:", descriptor.name)];
    for field in &descriptor.fields {
        let value = values.get(field.key).map(String::as_str).unwrap_or("-");
        lines.push(format!("  {}: {}", field.label, value));
    }
    lines
}

const DESCRIPTION: &str = "description";
const DUE: &str = "due";
const TIME: &str = "time";

/// Add/edit form for a single plan: description, due date, time.
pub struct PlanWizard {
    descriptor: FormDescriptor,
    defaults: BTreeMap<String, String>,
}

impl PlanWizard {
    pub fn create() -> Self {
        Self {
            descriptor: plan_descriptor("new plan"),
            defaults: BTreeMap::new(),
        }
    }

    pub fn edit(plan: &Plan) -> Self {
        let fields = PlanFields::from(plan);
        let mut defaults = BTreeMap::new();
        defaults.insert(DESCRIPTION.to_string(), fields.description.clone());
        for (key, value) in [(DUE, fields.date_text()), (TIME, fields.time_text())] {
            if !value.is_empty() {
                defaults.insert(key.to_string(), value);
            }
        }
        Self {
            descriptor: plan_descriptor("plan changes"),
            defaults,
        }
    }
}

fn plan_descriptor(name: &'static str) -> FormDescriptor {
    FormDescriptor::new(
        name,
        vec![
            FieldDescriptor::new(
                DESCRIPTION,
                "Description",
                Validator::new(|input| {
                    validate_description(input).map_err(|err| err.message)
                }),
            )
            .with_help("What needs doing. Line breaks are joined into one line."),
            FieldDescriptor::new(
                DUE,
                "Due date",
                Validator::new(|input| {
                    parse_date_field(input)
                        .map(|due| due.map(|due| due.to_string()).unwrap_or_default())
                        .map_err(|err| err.message)
                }),
            )
            .with_optional()
            .with_hint("D/M, optional")
            .with_help("Day and month, for example 5/6. Leave empty for no date."),
            FieldDescriptor::new(
                TIME,
                "Time",
                Validator::new(|input| {
                    parse_time_field(input)
                        .map(|time| time.map(|time| time.to_string()).unwrap_or_default())
                        .map_err(|err| err.message)
                }),
            )
            .with_optional()
            .with_hint("H:MM, optional")
            .with_help("24-hour clock, for example 14:30. Leave empty for no time."),
        ],
    )
}

impl FormFlow for PlanWizard {
    type Output = Plan;
    type Error = TodoError;

    fn descriptor(&self) -> &FormDescriptor {
        &self.descriptor
    }

    fn defaults(&self) -> BTreeMap<String, String> {
        self.defaults.clone()
    }

    fn commit(&self, values: BTreeMap<String, String>) -> Result<Plan, TodoError> {
        let field = |key: &str| values.get(key).map(String::as_str).unwrap_or_default();
        let description = validate_description(field(DESCRIPTION))?;
        let due = parse_date_field(field(DUE))?;
        let time = parse_time_field(field(TIME))?;
        Ok(Plan::new(description).with_due(due).with_time(time))
    }
}
