use sqlx::{PgConnection, PgPool};
use tracing::info;

use super::error::ServiceError;
use crate::api::requests::{CreateFlightRequest, FlightListQuery, UpdateFlightRequest};
use crate::database::manager::DatabaseError;
use crate::database::models::Flight;
use crate::database::repository::{AirlineRepository, AirportRepository, FlightRepository};
use crate::validation::flight;

pub struct FlightService {
    pool: PgPool,
}

impl FlightService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Validates the payload, confirms the airline and both airports exist,
    /// then inserts in the same transaction.
    pub async fn create(&self, actor: &str, request: CreateFlightRequest) -> Result<Flight, ServiceError> {
        let new_flight = flight::validate_create(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        require_airline(&mut tx, &new_flight.airline_id).await?;
        require_airport(&mut tx, "departure_airport", &new_flight.departure_airport).await?;
        require_airport(&mut tx, "arrival_airport", &new_flight.arrival_airport).await?;
        let created = FlightRepository::insert(&mut *tx, &new_flight).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!(
            "Created flight {} ({}{} {} -> {}) by {}",
            created.flight_id,
            created.airline_id,
            created.flight_number,
            created.departure_airport,
            created.arrival_airport,
            actor
        );
        Ok(created)
    }

    pub async fn get(&self, flight_id: &str) -> Result<Flight, ServiceError> {
        let flight_id = flight::parse_flight_id(flight_id)?;
        FlightRepository::find(&self.pool, flight_id)
            .await?
            .ok_or_else(|| not_found(flight_id))
    }

    pub async fn list(&self, query: FlightListQuery) -> Result<Vec<Flight>, ServiceError> {
        let filter = flight::validate_filter(query)?;
        Ok(FlightRepository::list(&self.pool, &filter).await?)
    }

    /// Partial update. Each supplied reference is checked on its own before
    /// the merged row is written.
    pub async fn update(
        &self,
        actor: &str,
        flight_id: &str,
        request: UpdateFlightRequest,
    ) -> Result<Flight, ServiceError> {
        let flight_id = flight::parse_flight_id(flight_id)?;
        let changes = flight::validate_update(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        let mut stored = FlightRepository::find(&mut *tx, flight_id)
            .await?
            .ok_or_else(|| not_found(flight_id))?;

        if let Some(airline_id) = &changes.airline_id {
            require_airline(&mut tx, airline_id).await?;
        }
        if let Some(airport_id) = &changes.departure_airport {
            require_airport(&mut tx, "departure_airport", airport_id).await?;
        }
        if let Some(airport_id) = &changes.arrival_airport {
            require_airport(&mut tx, "arrival_airport", airport_id).await?;
        }

        changes.apply(&mut stored);
        let updated = FlightRepository::update(&mut *tx, &stored).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Updated flight {} (status {}) by {}", updated.flight_id, updated.status, actor);
        Ok(updated)
    }

    pub async fn delete(&self, actor: &str, flight_id: &str) -> Result<(), ServiceError> {
        let flight_id = flight::parse_flight_id(flight_id)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        if FlightRepository::delete(&mut *tx, flight_id).await? == 0 {
            return Err(not_found(flight_id));
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Deleted flight {} by {}", flight_id, actor);
        Ok(())
    }
}

async fn require_airline(conn: &mut PgConnection, airline_id: &str) -> Result<(), ServiceError> {
    if AirlineRepository::exists(conn, airline_id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("airline_id '{}' does not exist", airline_id)))
    }
}

async fn require_airport(conn: &mut PgConnection, field: &str, airport_id: &str) -> Result<(), ServiceError> {
    if AirportRepository::exists(conn, airport_id).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(format!("{} '{}' does not exist", field, airport_id)))
    }
}

fn not_found(flight_id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Flight {} not found", flight_id))
}
