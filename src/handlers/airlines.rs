use axum::extract::{rejection::JsonRejection, Path, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::api::format::{many, AirlineResponse};
use crate::api::requests::{CreateAirlineRequest, UpdateAirlineRequest};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /airlines
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AirlineResponse>> {
    let airlines = state.airlines().list().await?;
    Ok(ApiResponse::success(many(airlines)))
}

/// POST /airlines
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    payload: Result<Json<CreateAirlineRequest>, JsonRejection>,
) -> ApiResult<AirlineResponse> {
    let Json(request) = payload?;
    let airline = state.airlines().create(&actor.username, request).await?;
    Ok(ApiResponse::created(airline.into()))
}

/// GET /airlines/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<AirlineResponse> {
    let airline = state.airlines().get(&id).await?;
    Ok(ApiResponse::success(airline.into()))
}

/// PUT|PATCH /airlines/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAirlineRequest>, JsonRejection>,
) -> ApiResult<AirlineResponse> {
    let Json(request) = payload?;
    let airline = state.airlines().update(&actor.username, &id, request).await?;
    Ok(ApiResponse::success(airline.into()))
}

/// DELETE /airlines/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    state.airlines().delete(&actor.username, &id).await?;
    Ok(ApiResponse::deleted(format!("Airline '{}'", crate::validation::normalize_code(&id))))
}
