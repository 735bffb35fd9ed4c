use thiserror::Error;

use crate::database::manager::DatabaseError;
use crate::validation::ValidationError;

/// Domain failures raised by the entity services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Delete refused because other rows still reference the target
    #[error("{0}")]
    DependencyConflict(String),

    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(DatabaseError),
}

impl From<DatabaseError> for ServiceError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ServiceError::NotFound(msg),
            DatabaseError::UniqueViolation(constraint) => ServiceError::Conflict(conflict_message(&constraint)),
            DatabaseError::ForeignKeyViolation(constraint) => ServiceError::NotFound(reference_message(&constraint)),
            DatabaseError::ConnectionError(msg) => ServiceError::Unavailable(msg),
            other => ServiceError::Database(other),
        }
    }
}

fn conflict_message(constraint: &str) -> String {
    match constraint {
        "airlines_pkey" => "Airline already exists".to_string(),
        "airlines_iata_code_key" => "An airline with this iata_code already exists".to_string(),
        "airports_pkey" => "Airport already exists".to_string(),
        "airports_icao_code_key" => "An airport with this icao_code already exists".to_string(),
        "uq_flight" => "A flight with this airline, flight_number and scheduled_departure already exists".to_string(),
        other => format!("Duplicate value violates '{}'", other),
    }
}

fn reference_message(constraint: &str) -> String {
    match constraint {
        "flights_airline_id_fkey" => "Referenced airline_id does not exist".to_string(),
        "flights_departure_airport_fkey" => "Referenced departure_airport does not exist".to_string(),
        "flights_arrival_airport_fkey" => "Referenced arrival_airport does not exist".to_string(),
        other => format!("Referenced row does not exist ({})", other),
    }
}
