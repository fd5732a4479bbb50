//! Domain types representing a single plan entry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the segments of an encoded plan line.
pub const SEGMENT_SEPARATOR: &str = " | ";

const SEPARATOR_CHAR: char = '|';
const SEPARATOR_REPLACEMENT: char = '/';

/// Day and month a plan is due. No year is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    pub day: u32,
    pub month: u32,
}

impl DueDate {
    pub fn new(day: u32, month: u32) -> Self {
        Self { day, month }
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.day, self.month)
    }
}

/// Clock time a plan is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTime {
    pub hour: u32,
    pub minute: u32,
}

impl DueTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for DueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

/// A task entry with optional due date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<DueDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DueTime>,
}

impl Plan {
    /// Creates a plan, normalizing the description.
    pub fn new(description: impl AsRef<str>) -> Self {
        Self {
            description: normalize_description(description.as_ref()),
            due: None,
            time: None,
        }
    }

    pub fn with_due(mut self, due: Option<DueDate>) -> Self {
        self.due = due;
        self
    }

    pub fn with_time(mut self, time: Option<DueTime>) -> Self {
        self.time = time;
        self
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Collapses line breaks to single spaces and trims the result. A `|` at
/// either end or next to whitespace becomes `/`, so the description can never
/// merge with a following segment separator.
pub fn normalize_description(raw: &str) -> String {
    let collapsed = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let chars: Vec<char> = collapsed.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(index, &ch)| {
            let loose = |neighbour: Option<&char>| neighbour.map_or(true, |c| c.is_whitespace());
            let before = index.checked_sub(1).and_then(|prev| chars.get(prev));
            if ch == SEPARATOR_CHAR && (loose(before) || loose(chars.get(index + 1))) {
                SEPARATOR_REPLACEMENT
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_newlines_collapse_to_spaces() {
        let plan = Plan::new("  Buy milk\n\nand bread\r\n ");
        assert_eq!(plan.description, "Buy milk and bread");
    }

    #[test]
    fn description_never_contains_separator() {
        assert_eq!(normalize_description("a | b"), "a / b");
        assert_eq!(normalize_description("a | | b"), "a / / b");
        assert!(!normalize_description("x | | | y").contains(SEGMENT_SEPARATOR));
        assert_eq!(normalize_description("Buy milk |"), "Buy milk /");
        assert_eq!(normalize_description("| later"), "/ later");
        assert_eq!(normalize_description("|"), "/");
        assert_eq!(normalize_description("a|b ||c"), "a|b /|c");
    }

    #[test]
    fn due_time_displays_padded_minutes() {
        assert_eq!(DueTime::new(9, 5).to_string(), "9:05");
        assert_eq!(DueDate::new(5, 6).to_string(), "5/6");
    }
}
