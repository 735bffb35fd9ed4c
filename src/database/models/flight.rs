use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::types::FlightStatus;

/// Row of the `flights` table
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Flight {
    pub flight_id: i32,
    pub airline_id: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    pub actual_departure: Option<DateTime<Utc>>,
    pub actual_arrival: Option<DateTime<Utc>>,
    #[sqlx(try_from = "String")]
    pub status: FlightStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub airline_id: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub scheduled_departure: DateTime<Utc>,
    pub scheduled_arrival: DateTime<Utc>,
    pub actual_departure: Option<DateTime<Utc>>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: FlightStatus,
}

/// Validated partial update. `None` keeps the stored value; the nullable
/// actual times are cleared by `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightChanges {
    pub airline_id: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport: Option<String>,
    pub arrival_airport: Option<String>,
    pub scheduled_departure: Option<DateTime<Utc>>,
    pub scheduled_arrival: Option<DateTime<Utc>>,
    pub actual_departure: Option<Option<DateTime<Utc>>>,
    pub actual_arrival: Option<Option<DateTime<Utc>>>,
    pub status: Option<FlightStatus>,
}

impl FlightChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copies every supplied field onto the stored flight. Server-managed
    /// timestamps are left to the repository.
    pub fn apply(self, flight: &mut Flight) {
        if let Some(airline_id) = self.airline_id {
            flight.airline_id = airline_id;
        }
        if let Some(flight_number) = self.flight_number {
            flight.flight_number = flight_number;
        }
        if let Some(departure_airport) = self.departure_airport {
            flight.departure_airport = departure_airport;
        }
        if let Some(arrival_airport) = self.arrival_airport {
            flight.arrival_airport = arrival_airport;
        }
        if let Some(scheduled_departure) = self.scheduled_departure {
            flight.scheduled_departure = scheduled_departure;
        }
        if let Some(scheduled_arrival) = self.scheduled_arrival {
            flight.scheduled_arrival = scheduled_arrival;
        }
        if let Some(actual_departure) = self.actual_departure {
            flight.actual_departure = actual_departure;
        }
        if let Some(actual_arrival) = self.actual_arrival {
            flight.actual_arrival = actual_arrival;
        }
        if let Some(status) = self.status {
            flight.status = status;
        }
    }
}

/// Optional list filters for `GET /flights`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightFilter {
    pub status: Option<FlightStatus>,
    pub airline_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stored_flight() -> Flight {
        let departure = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        Flight {
            flight_id: 7,
            airline_id: "AA".to_string(),
            flight_number: "100".to_string(),
            departure_airport: "JFK".to_string(),
            arrival_airport: "LAX".to_string(),
            scheduled_departure: departure,
            scheduled_arrival: departure + chrono::Duration::hours(6),
            actual_departure: None,
            actual_arrival: None,
            status: FlightStatus::Scheduled,
            created_at: departure,
            updated_at: departure,
        }
    }

    #[test]
    fn status_only_change_leaves_other_fields() {
        let original = stored_flight();
        let mut flight = original.clone();

        FlightChanges {
            status: Some(FlightStatus::Delayed),
            ..Default::default()
        }
        .apply(&mut flight);

        assert_eq!(flight.status, FlightStatus::Delayed);
        assert_eq!(Flight { status: FlightStatus::Scheduled, ..flight }, original);
    }

    #[test]
    fn actual_departure_can_be_set_then_cleared() {
        let mut flight = stored_flight();
        let departed = flight.scheduled_departure + chrono::Duration::minutes(20);

        FlightChanges {
            actual_departure: Some(Some(departed)),
            ..Default::default()
        }
        .apply(&mut flight);
        assert_eq!(flight.actual_departure, Some(departed));

        FlightChanges {
            status: Some(FlightStatus::Delayed),
            ..Default::default()
        }
        .apply(&mut flight);
        assert_eq!(flight.actual_departure, Some(departed));

        FlightChanges {
            actual_departure: Some(None),
            ..Default::default()
        }
        .apply(&mut flight);
        assert_eq!(flight.actual_departure, None);
    }

    #[test]
    fn empty_changes_are_detected() {
        assert!(FlightChanges::default().is_empty());
        let changes = FlightChanges {
            flight_number: Some("200".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
