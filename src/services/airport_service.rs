use sqlx::PgPool;
use tracing::{info, warn};

use super::error::ServiceError;
use crate::api::requests::{CreateAirportRequest, UpdateAirportRequest};
use crate::database::manager::DatabaseError;
use crate::database::models::Airport;
use crate::database::repository::AirportRepository;
use crate::validation::{airport, normalize_code};

pub struct AirportService {
    pool: PgPool,
}

impl AirportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, actor: &str, request: CreateAirportRequest) -> Result<Airport, ServiceError> {
        let new_airport = airport::validate_create(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        if AirportRepository::exists(&mut *tx, &new_airport.airport_id).await? {
            return Err(ServiceError::Conflict(format!(
                "Airport '{}' already exists",
                new_airport.airport_id
            )));
        }
        let created = AirportRepository::insert(&mut *tx, &new_airport).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Created airport {} by {}", created.airport_id, actor);
        Ok(created)
    }

    pub async fn get(&self, airport_id: &str) -> Result<Airport, ServiceError> {
        let airport_id = normalize_code(airport_id);
        AirportRepository::find(&self.pool, &airport_id)
            .await?
            .ok_or_else(|| not_found(&airport_id))
    }

    pub async fn list(&self) -> Result<Vec<Airport>, ServiceError> {
        Ok(AirportRepository::list(&self.pool).await?)
    }

    pub async fn update(
        &self,
        actor: &str,
        airport_id: &str,
        request: UpdateAirportRequest,
    ) -> Result<Airport, ServiceError> {
        let airport_id = normalize_code(airport_id);
        let changes = airport::validate_update(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        let mut airport = AirportRepository::find(&mut *tx, &airport_id)
            .await?
            .ok_or_else(|| not_found(&airport_id))?;
        changes.apply(&mut airport);
        let updated = AirportRepository::update(&mut *tx, &airport).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Updated airport {} by {}", updated.airport_id, actor);
        Ok(updated)
    }

    /// Refused while any flight departs from or arrives at the airport
    pub async fn delete(&self, actor: &str, airport_id: &str) -> Result<(), ServiceError> {
        let airport_id = normalize_code(airport_id);

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        if !AirportRepository::exists(&mut *tx, &airport_id).await? {
            return Err(not_found(&airport_id));
        }
        let flights = AirportRepository::count_flights(&mut *tx, &airport_id).await?;
        if flights > 0 {
            warn!("Refused to delete airport {}: {} dependent flights", airport_id, flights);
            return Err(has_dependents(&airport_id, flights));
        }
        match AirportRepository::delete(&mut *tx, &airport_id).await {
            Ok(_) => {}
            Err(DatabaseError::ForeignKeyViolation(_)) => return Err(has_dependents(&airport_id, flights)),
            Err(err) => return Err(err.into()),
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Deleted airport {} by {}", airport_id, actor);
        Ok(())
    }
}

fn not_found(airport_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Airport '{}' not found", airport_id))
}

fn has_dependents(airport_id: &str, flights: i64) -> ServiceError {
    ServiceError::DependencyConflict(format!(
        "Airport '{}' has dependents: referenced by {} flight(s)",
        airport_id, flights
    ))
}
