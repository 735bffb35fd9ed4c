//! Wire format for stored rows. Timestamps are RFC 3339 strings in UTC and
//! coordinates are decimal strings so NUMERIC precision survives JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::database::models::{Airline, Airport, Flight};
use crate::types::FlightStatus;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineResponse {
    pub airline_id: String,
    pub iata_code: String,
    pub name: String,
    pub country: Option<String>,
}

impl From<Airline> for AirlineResponse {
    fn from(airline: Airline) -> Self {
        Self {
            airline_id: airline.airline_id,
            iata_code: airline.iata_code,
            name: airline.name,
            country: airline.country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportResponse {
    pub airport_id: String,
    pub icao_code: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<Airport> for AirportResponse {
    fn from(airport: Airport) -> Self {
        Self {
            airport_id: airport.airport_id,
            icao_code: airport.icao_code,
            name: airport.name,
            city: airport.city,
            country: airport.country,
            latitude: airport.latitude.to_string(),
            longitude: airport.longitude.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightResponse {
    pub flight_id: i32,
    pub airline_id: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub scheduled_departure: String,
    pub scheduled_arrival: String,
    pub actual_departure: Option<String>,
    pub actual_arrival: Option<String>,
    pub status: FlightStatus,
    pub created_at: String,
    pub updated_at: String,
}

pub fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            flight_id: flight.flight_id,
            airline_id: flight.airline_id,
            flight_number: flight.flight_number,
            departure_airport: flight.departure_airport,
            arrival_airport: flight.arrival_airport,
            scheduled_departure: timestamp(flight.scheduled_departure),
            scheduled_arrival: timestamp(flight.scheduled_arrival),
            actual_departure: flight.actual_departure.map(timestamp),
            actual_arrival: flight.actual_arrival.map(timestamp),
            status: flight.status,
            created_at: timestamp(flight.created_at),
            updated_at: timestamp(flight.updated_at),
        }
    }
}

pub fn many<T, R: From<T>>(rows: Vec<T>) -> Vec<R> {
    rows.into_iter().map(R::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::parse_timestamp;
    use chrono::TimeZone;
    use serde_json::json;
    use sqlx::types::BigDecimal;
    use std::str::FromStr;

    fn flight() -> Flight {
        let departure = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        Flight {
            flight_id: 1,
            airline_id: "AA".to_string(),
            flight_number: "100".to_string(),
            departure_airport: "JFK".to_string(),
            arrival_airport: "LAX".to_string(),
            scheduled_departure: departure,
            scheduled_arrival: departure + chrono::Duration::minutes(375),
            actual_departure: None,
            actual_arrival: None,
            status: FlightStatus::OnTime,
            created_at: departure,
            updated_at: departure,
        }
    }

    #[test]
    fn flight_timestamps_round_trip() {
        let original = flight();
        let body = FlightResponse::from(original.clone());
        assert_eq!(body.scheduled_departure, "2024-05-01T08:30:00Z");
        assert_eq!(parse_timestamp(&body.scheduled_arrival), Some(original.scheduled_arrival));
    }

    #[test]
    fn flight_serializes_status_and_nulls() {
        let value = serde_json::to_value(FlightResponse::from(flight())).unwrap();
        assert_eq!(value["status"], json!("On Time"));
        assert_eq!(value["actual_departure"], json!(null));
    }

    #[test]
    fn coordinates_are_decimal_strings() {
        let airport = Airport {
            airport_id: "JFK".to_string(),
            icao_code: "KJFK".to_string(),
            name: "John F. Kennedy International".to_string(),
            city: "New York".to_string(),
            country: "USA".to_string(),
            latitude: BigDecimal::from_str("40.639801").unwrap(),
            longitude: BigDecimal::from_str("-73.778900").unwrap(),
        };
        let value = serde_json::to_value(AirportResponse::from(airport)).unwrap();
        assert_eq!(value["latitude"], json!("40.639801"));
        assert_eq!(value["longitude"], json!("-73.778900"));
    }
}
