//! Calendar and clock checks applied to plan input before it is accepted.

use chrono::NaiveDate;
use todo_domain::{normalize_description, DueDate, DueTime};

use crate::error::ValidationError;

/// Year used to decide how many days February has. Leap, so `29/2` is accepted.
pub const REFERENCE_YEAR: i32 = 2024;

/// Number of days in `month` of `year`, or `None` for an invalid month.
pub fn days_in_month(month: u32, year: i32) -> Option<u32> {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
}

/// Checks a day/month pair. Both empty means "no due date".
pub fn validate_date(day: &str, month: &str) -> Result<Option<DueDate>, ValidationError> {
    let (day, month) = (day.trim(), month.trim());
    if day.is_empty() && month.is_empty() {
        return Ok(None);
    }
    let day = parse_component(day, "Day")?;
    let month = parse_component(month, "Month")?;
    if !(1..=12).contains(&month) {
        return Err(ValidationError::new(format!(
            "Month must be between 1 and 12 (got {month})"
        )));
    }
    let max_day = days_in_month(month, REFERENCE_YEAR).unwrap_or(0);
    if day < 1 || day > max_day {
        return Err(ValidationError::new(format!(
            "Day must be between 1 and {max_day} for month {month} (got {day})"
        )));
    }
    Ok(Some(DueDate::new(day, month)))
}

/// Checks an hour/minute pair. Both empty means "no due time".
pub fn validate_time(hour: &str, minute: &str) -> Result<Option<DueTime>, ValidationError> {
    let (hour, minute) = (hour.trim(), minute.trim());
    if hour.is_empty() && minute.is_empty() {
        return Ok(None);
    }
    let hour = parse_component(hour, "Hour")?;
    let minute = parse_component(minute, "Minute")?;
    if hour > 23 {
        return Err(ValidationError::new(format!(
            "Hour must be between 0 and 23 (got {hour})"
        )));
    }
    if minute > 59 {
        return Err(ValidationError::new(format!(
            "Minute must be between 0 and 59 (got {minute})"
        )));
    }
    Ok(Some(DueTime::new(hour, minute)))
}

pub fn is_valid_date(day: &str, month: &str) -> bool {
    validate_date(day, month).is_ok()
}

pub fn is_valid_time(hour: &str, minute: &str) -> bool {
    validate_time(hour, minute).is_ok()
}

/// Parses the combined `D/M` form field. Empty input means "no due date".
pub fn parse_date_field(input: &str) -> Result<Option<DueDate>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.split_once('/') {
        Some((day, month)) if !day.trim().is_empty() && !month.trim().is_empty() => {
            validate_date(day, month)
        }
        _ => Err(ValidationError::new(format!(
            "Use DAY/MONTH for the due date (got `{trimmed}`)"
        ))),
    }
}

/// Parses the combined `H:M` form field. Empty input means "no due time".
pub fn parse_time_field(input: &str) -> Result<Option<DueTime>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.split_once(':') {
        Some((hour, minute)) if !hour.trim().is_empty() && !minute.trim().is_empty() => {
            validate_time(hour, minute)
        }
        _ => Err(ValidationError::new(format!(
            "Use HOUR:MINUTE in 24-hour format for the time (got `{trimmed}`)"
        ))),
    }
}

/// Normalizes a description and rejects it when nothing is left.
pub fn validate_description(input: &str) -> Result<String, ValidationError> {
    let normalized = normalize_description(input);
    if normalized.is_empty() {
        Err(ValidationError::new("Description cannot be empty"))
    } else {
        Ok(normalized)
    }
}

fn parse_component(value: &str, label: &str) -> Result<u32, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(format!("{label} is required")));
    }
    value
        .parse::<u32>()
        .map_err(|_| ValidationError::new(format!("{label} must be a whole number (got `{value}`)")))
}
