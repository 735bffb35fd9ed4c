use super::{
    normalize_code, nullable_timestamp, optional_code, optional_text, optional_timestamp, required_code, required_text,
    required_timestamp, FieldErrors, Length, ValidationError,
};
use crate::api::requests::{CreateFlightRequest, FlightListQuery, UpdateFlightRequest};
use crate::database::models::{FlightChanges, FlightFilter, NewFlight};
use crate::types::FlightStatus;

pub const FLIGHT_NUMBER: Length = Length::between(1, 10);
pub const AIRLINE_ID: Length = super::airline::AIRLINE_ID;
pub const AIRPORT_ID: Length = super::airport::AIRPORT_ID;

fn status(errors: &mut FieldErrors, value: Option<String>) -> Option<FlightStatus> {
    let raw = value?;
    match raw.parse::<FlightStatus>() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add(
                "status",
                format!("Invalid status '{}'. Allowed values: {}", raw, FlightStatus::allowed_values()),
            );
            None
        }
    }
}

pub fn validate_create(request: CreateFlightRequest) -> Result<NewFlight, ValidationError> {
    let mut errors = FieldErrors::default();

    let airline_id = required_code(&mut errors, "airline_id", request.airline_id, AIRLINE_ID);
    let flight_number = required_text(&mut errors, "flight_number", request.flight_number, FLIGHT_NUMBER);
    let departure_airport = required_code(&mut errors, "departure_airport", request.departure_airport, AIRPORT_ID);
    let arrival_airport = required_code(&mut errors, "arrival_airport", request.arrival_airport, AIRPORT_ID);
    let scheduled_departure = required_timestamp(&mut errors, "scheduled_departure", request.scheduled_departure);
    let scheduled_arrival = required_timestamp(&mut errors, "scheduled_arrival", request.scheduled_arrival);
    let actual_departure = optional_timestamp(&mut errors, "actual_departure", request.actual_departure);
    let actual_arrival = optional_timestamp(&mut errors, "actual_arrival", request.actual_arrival);
    let status = status(&mut errors, request.status).unwrap_or_default();

    match (
        airline_id,
        flight_number,
        departure_airport,
        arrival_airport,
        scheduled_departure,
        scheduled_arrival,
    ) {
        (
            Some(airline_id),
            Some(flight_number),
            Some(departure_airport),
            Some(arrival_airport),
            Some(scheduled_departure),
            Some(scheduled_arrival),
        ) if errors.is_empty() => Ok(NewFlight {
            airline_id,
            flight_number,
            departure_airport,
            arrival_airport,
            scheduled_departure,
            scheduled_arrival,
            actual_departure,
            actual_arrival,
            status,
        }),
        _ => Err(errors.into_error()),
    }
}

pub fn validate_update(request: UpdateFlightRequest) -> Result<FlightChanges, ValidationError> {
    let mut errors = FieldErrors::default();

    let changes = FlightChanges {
        airline_id: optional_code(&mut errors, "airline_id", request.airline_id, AIRLINE_ID),
        flight_number: optional_text(&mut errors, "flight_number", request.flight_number, FLIGHT_NUMBER),
        departure_airport: optional_code(&mut errors, "departure_airport", request.departure_airport, AIRPORT_ID),
        arrival_airport: optional_code(&mut errors, "arrival_airport", request.arrival_airport, AIRPORT_ID),
        scheduled_departure: optional_timestamp(&mut errors, "scheduled_departure", request.scheduled_departure),
        scheduled_arrival: optional_timestamp(&mut errors, "scheduled_arrival", request.scheduled_arrival),
        actual_departure: nullable_timestamp(&mut errors, "actual_departure", request.actual_departure),
        actual_arrival: nullable_timestamp(&mut errors, "actual_arrival", request.actual_arrival),
        status: status(&mut errors, request.status),
    };

    if errors.is_empty() {
        Ok(changes)
    } else {
        Err(errors.into_error())
    }
}

pub fn validate_filter(query: FlightListQuery) -> Result<FlightFilter, ValidationError> {
    let mut errors = FieldErrors::default();

    let status = status(&mut errors, query.status.filter(|s| !s.trim().is_empty()));
    let airline_id = query
        .airline_id
        .map(|id| normalize_code(&id))
        .filter(|id| !id.is_empty());

    if errors.is_empty() {
        Ok(FlightFilter { status, airline_id })
    } else {
        Err(errors.into_error())
    }
}

/// Flight ids are system-generated integers
pub fn parse_flight_id(raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::field("flight_id", format!("Invalid flight id '{}'", raw)))
}
