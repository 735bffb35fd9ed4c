/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flight status classification. Any status may follow any other; this is
/// not a workflow. Stored as its canonical string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightStatus {
    #[default]
    #[serde(rename = "Scheduled")]
    Scheduled,
    #[serde(rename = "On Time")]
    OnTime,
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "Cancelled")]
    Cancelled,
    #[serde(rename = "Completed")]
    Completed,
}

impl FlightStatus {
    pub const ALL: [FlightStatus; 5] = [
        FlightStatus::Scheduled,
        FlightStatus::OnTime,
        FlightStatus::Delayed,
        FlightStatus::Cancelled,
        FlightStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::Scheduled => "Scheduled",
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Cancelled => "Cancelled",
            FlightStatus::Completed => "Completed",
        }
    }

    /// Comma separated list of accepted values, for error messages.
    pub fn allowed_values() -> String {
        Self::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight status '{0}'")]
pub struct InvalidFlightStatus(pub String);

impl FromStr for FlightStatus {
    type Err = InvalidFlightStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| InvalidFlightStatus(s.to_string()))
    }
}

impl TryFrom<String> for FlightStatus {
    type Error = InvalidFlightStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!("Scheduled".parse::<FlightStatus>(), Ok(FlightStatus::Scheduled));
        assert_eq!("On Time".parse::<FlightStatus>(), Ok(FlightStatus::OnTime));
        assert_eq!(" Delayed ".parse::<FlightStatus>(), Ok(FlightStatus::Delayed));
    }

    #[test]
    fn rejects_unknown_and_differently_cased_values() {
        assert!("Boarding".parse::<FlightStatus>().is_err());
        assert!("delayed".parse::<FlightStatus>().is_err());
        assert!("OnTime".parse::<FlightStatus>().is_err());
    }

    #[test]
    fn serializes_as_canonical_string() {
        let value = serde_json::to_value(FlightStatus::OnTime).unwrap();
        assert_eq!(value, serde_json::json!("On Time"));
        assert_eq!(FlightStatus::default(), FlightStatus::Scheduled);
    }
}
