//! Single-line text encoding of plans.
//!
//! A plan is stored as `<description>[ | Due: <day>/<month>][ | Time: <hour>:<minute>]`.
//! Decoding is lossy by contract: segments it does not recognise, and date or
//! time segments that are malformed or out of range, are dropped without error.

use todo_domain::{DueDate, DueTime, Plan, SEGMENT_SEPARATOR};

use crate::validation::{validate_date, validate_time};

pub const DUE_PREFIX: &str = "Due:";
pub const TIME_PREFIX: &str = "Time:";

/// Encodes a plan as one line of text.
pub fn encode(plan: &Plan) -> String {
    let mut line = plan.description.clone();
    if let Some(due) = plan.due {
        line.push_str(SEGMENT_SEPARATOR);
        line.push_str(&format!("{DUE_PREFIX} {}/{}", due.day, due.month));
    }
    if let Some(time) = plan.time {
        line.push_str(SEGMENT_SEPARATOR);
        line.push_str(&format!("{TIME_PREFIX} {}:{:02}", time.hour, time.minute));
    }
    line
}

/// Decodes one line of text into a plan. Never fails.
pub fn decode(line: &str) -> Plan {
    let mut segments = line.split(SEGMENT_SEPARATOR);
    let mut plan = Plan::new(segments.next().unwrap_or_default());
    for segment in segments {
        let segment = segment.trim();
        if let Some(rest) = segment.strip_prefix(DUE_PREFIX) {
            if plan.due.is_none() {
                plan.due = decode_due(rest);
            }
        } else if let Some(rest) = segment.strip_prefix(TIME_PREFIX) {
            if plan.time.is_none() {
                plan.time = decode_time(rest);
            }
        }
    }
    plan
}

pub fn encode_all(plans: &[Plan]) -> Vec<String> {
    plans.iter().map(encode).collect()
}

pub fn decode_all<S: AsRef<str>>(lines: &[S]) -> Vec<Plan> {
    lines.iter().map(|line| decode(line.as_ref())).collect()
}

fn decode_due(text: &str) -> Option<DueDate> {
    let (day, month) = text.trim().split_once('/')?;
    if day.trim().is_empty() || month.trim().is_empty() {
        return None;
    }
    validate_date(day, month).ok().flatten()
}

fn decode_time(text: &str) -> Option<DueTime> {
    let (hour, minute) = text.trim().split_once(':')?;
    if hour.trim().is_empty() || minute.trim().is_empty() {
        return None;
    }
    validate_time(hour, minute).ok().flatten()
}

/// Raw text fields of a stored plan, used to prefill an edit form.
/// Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFields {
    pub description: String,
    pub day: String,
    pub month: String,
    pub hour: String,
    pub minute: String,
}

impl PlanFields {
    /// Combined `D/M` text, empty when the plan has no due date.
    pub fn date_text(&self) -> String {
        if self.day.is_empty() {
            String::new()
        } else {
            format!("{}/{}", self.day, self.month)
        }
    }

    /// Combined `H:MM` text, empty when the plan has no due time.
    pub fn time_text(&self) -> String {
        if self.hour.is_empty() {
            String::new()
        } else {
            format!("{}:{}", self.hour, self.minute)
        }
    }
}

impl From<&Plan> for PlanFields {
    fn from(plan: &Plan) -> Self {
        let (day, month) = plan
            .due
            .map(|due| (due.day.to_string(), due.month.to_string()))
            .unwrap_or_default();
        let (hour, minute) = plan
            .time
            .map(|time| (time.hour.to_string(), format!("{:02}", time.minute)))
            .unwrap_or_default();
        Self {
            description: plan.description.clone(),
            day,
            month,
            hour,
            minute,
        }
    }
}

/// Parses a stored line back into editable text fields.
pub fn decode_for_edit(line: &str) -> PlanFields {
    PlanFields::from(&decode(line))
}
