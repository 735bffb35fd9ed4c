use axum::extract::{rejection::JsonRejection, Path, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::api::format::{many, AirportResponse};
use crate::api::requests::{CreateAirportRequest, UpdateAirportRequest};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /airports
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<AirportResponse>> {
    let airports = state.airports().list().await?;
    Ok(ApiResponse::success(many(airports)))
}

/// POST /airports
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    payload: Result<Json<CreateAirportRequest>, JsonRejection>,
) -> ApiResult<AirportResponse> {
    let Json(request) = payload?;
    let airport = state.airports().create(&actor.username, request).await?;
    Ok(ApiResponse::created(airport.into()))
}

/// GET /airports/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<AirportResponse> {
    let airport = state.airports().get(&id).await?;
    Ok(ApiResponse::success(airport.into()))
}

/// PUT|PATCH /airports/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateAirportRequest>, JsonRejection>,
) -> ApiResult<AirportResponse> {
    let Json(request) = payload?;
    let airport = state.airports().update(&actor.username, &id, request).await?;
    Ok(ApiResponse::success(airport.into()))
}

/// DELETE /airports/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    state.airports().delete(&actor.username, &id).await?;
    Ok(ApiResponse::deleted(format!("Airport '{}'", crate::validation::normalize_code(&id))))
}
