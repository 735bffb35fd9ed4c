use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{AirlineService, AirportService, FlightService};

/// Shared handles injected into every handler through `State`
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    pub fn airlines(&self) -> AirlineService {
        AirlineService::new(self.pool.clone())
    }

    pub fn airports(&self) -> AirportService {
        AirportService::new(self.pool.clone())
    }

    pub fn flights(&self) -> FlightService {
        FlightService::new(self.pool.clone())
    }
}
