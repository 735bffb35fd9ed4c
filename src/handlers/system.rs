use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::state::AppState;

/// GET / - service description and endpoint map
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Flight Tracker API",
            "version": version,
            "description": "Airlines, airports and flights over PostgreSQL",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "login": "POST /login (public - token acquisition)",
                "airlines": "/airlines[/:id] (reads public, writes require admin token)",
                "airports": "/airports[/:id] (reads public, writes require admin token)",
                "flights": "/flights[/:id] ?status=&airline_id= (reads public, writes require admin token)",
            }
        }
    }))
}

/// GET /health - pings the database
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unavailable"
                    }
                })),
            )
        }
    }
}
