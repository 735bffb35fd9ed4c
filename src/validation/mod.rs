//! Field presence, length and format checks for incoming payloads.
//!
//! Each entity module turns a raw request into a validated model value or a
//! [`ValidationError`] carrying one message per offending field.

pub mod airline;
pub mod airport;
pub mod flight;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::types::BigDecimal;
use std::collections::HashMap;
use std::str::FromStr;

pub const REQUIRED: &str = "This field is required";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
    pub field_errors: HashMap<String, String>,
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::default();
        errors.add(field, message);
        errors.into_error()
    }
}

/// Accumulates per-field messages; the first message for a field wins.
#[derive(Debug, Default, Clone)]
pub struct FieldErrors(HashMap<String, String>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_error(self) -> ValidationError {
        let message = if self.0.values().all(|m| m == REQUIRED) {
            "Missing required fields"
        } else {
            "Invalid field values"
        };
        ValidationError {
            message: message.to_string(),
            field_errors: self.0,
        }
    }
}

/// Inclusive length bounds, counted in characters
#[derive(Debug, Clone, Copy)]
pub struct Length {
    pub min: usize,
    pub max: usize,
}

impl Length {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: n }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        if len >= self.min && len <= self.max {
            return Ok(());
        }
        if self.min == self.max {
            Err(format!("Must be exactly {} characters", self.min))
        } else {
            Err(format!("Must be between {} and {} characters", self.min, self.max))
        }
    }
}

/// Trimmed text that must be present and within `length`
pub fn required_text(errors: &mut FieldErrors, field: &str, value: Option<String>, length: Length) -> Option<String> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => checked_text(errors, field, v, length),
        None => {
            errors.add(field, REQUIRED);
            None
        }
    }
}

/// Trimmed text that may be absent; an empty string counts as a value
pub fn optional_text(errors: &mut FieldErrors, field: &str, value: Option<String>, length: Length) -> Option<String> {
    value.and_then(|v| checked_text(errors, field, v.trim().to_string(), length))
}

/// Nullable text in a partial update: `Some(None)` clears the column
pub fn nullable_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<String>>,
    length: Length,
) -> Option<Option<String>> {
    match value? {
        None => Some(None),
        Some(v) => optional_text(errors, field, Some(v), length).map(Some),
    }
}

fn checked_text(errors: &mut FieldErrors, field: &str, value: String, length: Length) -> Option<String> {
    match length.check(&value) {
        Ok(()) => Some(value),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

/// Normalise an airline/airport code: trimmed and upper-cased
pub fn normalize_code(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}

/// Required code: upper-cased, ASCII letters and digits only
pub fn required_code(errors: &mut FieldErrors, field: &str, value: Option<String>, length: Length) -> Option<String> {
    let value = required_text(errors, field, value.map(|v| normalize_code(&v)), length)?;
    alphanumeric(errors, field, value)
}

pub fn optional_code(errors: &mut FieldErrors, field: &str, value: Option<String>, length: Length) -> Option<String> {
    let value = optional_text(errors, field, value.map(|v| normalize_code(&v)), length)?;
    alphanumeric(errors, field, value)
}

fn alphanumeric(errors: &mut FieldErrors, field: &str, value: String) -> Option<String> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(value)
    } else {
        errors.add(field, "Must contain only letters and digits");
        None
    }
}

/// Parse an ISO-8601 timestamp. Values with an offset are normalised to UTC;
/// values without one are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn required_timestamp(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<DateTime<Utc>> {
    match value {
        Some(raw) if !raw.trim().is_empty() => timestamp(errors, field, &raw),
        _ => {
            errors.add(field, REQUIRED);
            None
        }
    }
}

pub fn optional_timestamp(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<DateTime<Utc>> {
    value.and_then(|raw| timestamp(errors, field, &raw))
}

/// Nullable timestamp in a partial update: `Some(None)` clears the column
pub fn nullable_timestamp(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<Option<String>>,
) -> Option<Option<DateTime<Utc>>> {
    match value? {
        None => Some(None),
        Some(raw) => timestamp(errors, field, &raw).map(Some),
    }
}

fn timestamp(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_timestamp(raw);
    if parsed.is_none() {
        errors.add(field, format!("Invalid ISO-8601 timestamp: '{}'", raw));
    }
    parsed
}

/// Latitude or longitude given as a JSON number or numeric string
pub fn required_coordinate(errors: &mut FieldErrors, field: &str, value: Option<Value>, bound: f64) -> Option<BigDecimal> {
    match value {
        None | Some(Value::Null) => {
            errors.add(field, REQUIRED);
            None
        }
        Some(v) => coordinate(errors, field, v, bound),
    }
}

pub fn optional_coordinate(errors: &mut FieldErrors, field: &str, value: Option<Value>, bound: f64) -> Option<BigDecimal> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => coordinate(errors, field, v, bound),
    }
}

fn coordinate(errors: &mut FieldErrors, field: &str, value: Value, bound: f64) -> Option<BigDecimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => {
            errors.add(field, "Must be a number");
            return None;
        }
    };

    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.abs() <= bound => {}
        Ok(f) if f.is_finite() => {
            errors.add(field, format!("Must be between -{bound} and {bound}"));
            return None;
        }
        _ => {
            errors.add(field, format!("Must be a valid number, got '{}'", raw));
            return None;
        }
    }

    match BigDecimal::from_str(&raw) {
        Ok(decimal) => Some(decimal),
        Err(_) => {
            errors.add(field, format!("Must be a valid number, got '{}'", raw));
            None
        }
    }
}
