use sqlx::PgPool;
use tracing::{info, warn};

use super::error::ServiceError;
use crate::api::requests::{CreateAirlineRequest, UpdateAirlineRequest};
use crate::database::manager::DatabaseError;
use crate::database::models::Airline;
use crate::database::repository::AirlineRepository;
use crate::validation::{airline, normalize_code};

pub struct AirlineService {
    pool: PgPool,
}

impl AirlineService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, actor: &str, request: CreateAirlineRequest) -> Result<Airline, ServiceError> {
        let new_airline = airline::validate_create(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        if AirlineRepository::exists(&mut *tx, &new_airline.airline_id).await? {
            return Err(ServiceError::Conflict(format!(
                "Airline '{}' already exists",
                new_airline.airline_id
            )));
        }
        let created = AirlineRepository::insert(&mut *tx, &new_airline).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Created airline {} by {}", created.airline_id, actor);
        Ok(created)
    }

    pub async fn get(&self, airline_id: &str) -> Result<Airline, ServiceError> {
        let airline_id = normalize_code(airline_id);
        AirlineRepository::find(&self.pool, &airline_id)
            .await?
            .ok_or_else(|| not_found(&airline_id))
    }

    pub async fn list(&self) -> Result<Vec<Airline>, ServiceError> {
        Ok(AirlineRepository::list(&self.pool).await?)
    }

    /// Partial update; only supplied fields change
    pub async fn update(
        &self,
        actor: &str,
        airline_id: &str,
        request: UpdateAirlineRequest,
    ) -> Result<Airline, ServiceError> {
        let airline_id = normalize_code(airline_id);
        let changes = airline::validate_update(request)?;

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        let mut airline = AirlineRepository::find(&mut *tx, &airline_id)
            .await?
            .ok_or_else(|| not_found(&airline_id))?;
        changes.apply(&mut airline);
        let updated = AirlineRepository::update(&mut *tx, &airline).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Updated airline {} by {}", updated.airline_id, actor);
        Ok(updated)
    }

    pub async fn delete(&self, actor: &str, airline_id: &str) -> Result<(), ServiceError> {
        let airline_id = normalize_code(airline_id);

        let mut tx = self.pool.begin().await.map_err(DatabaseError::from)?;
        if !AirlineRepository::exists(&mut *tx, &airline_id).await? {
            return Err(not_found(&airline_id));
        }
        let flights = AirlineRepository::count_flights(&mut *tx, &airline_id).await?;
        if flights > 0 {
            warn!("Refused to delete airline {}: {} dependent flights", airline_id, flights);
            return Err(has_dependents(&airline_id, flights));
        }
        match AirlineRepository::delete(&mut *tx, &airline_id).await {
            Ok(_) => {}
            Err(DatabaseError::ForeignKeyViolation(_)) => return Err(has_dependents(&airline_id, flights)),
            Err(err) => return Err(err.into()),
        }
        tx.commit().await.map_err(DatabaseError::from)?;

        info!("Deleted airline {} by {}", airline_id, actor);
        Ok(())
    }
}

fn not_found(airline_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("Airline '{}' not found", airline_id))
}

fn has_dependents(airline_id: &str, flights: i64) -> ServiceError {
    ServiceError::DependencyConflict(format!(
        "Airline '{}' has dependents: referenced by {} flight(s)",
        airline_id, flights
    ))
}
