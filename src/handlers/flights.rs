use axum::extract::{rejection::JsonRejection, Path, Query, State};
use axum::{Extension, Json};
use serde_json::Value;

use crate::api::format::{many, FlightResponse};
use crate::api::requests::{CreateFlightRequest, FlightListQuery, UpdateFlightRequest};
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /flights?status=&airline_id=
pub async fn list(State(state): State<AppState>, Query(query): Query<FlightListQuery>) -> ApiResult<Vec<FlightResponse>> {
    let flights = state.flights().list(query).await?;
    Ok(ApiResponse::success(many(flights)))
}

/// POST /flights
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    payload: Result<Json<CreateFlightRequest>, JsonRejection>,
) -> ApiResult<FlightResponse> {
    let Json(request) = payload?;
    let flight = state.flights().create(&actor.username, request).await?;
    Ok(ApiResponse::created(flight.into()))
}

/// GET /flights/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<FlightResponse> {
    let flight = state.flights().get(&id).await?;
    Ok(ApiResponse::success(flight.into()))
}

/// PUT|PATCH /flights/:id
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateFlightRequest>, JsonRejection>,
) -> ApiResult<FlightResponse> {
    let Json(request) = payload?;
    let flight = state.flights().update(&actor.username, &id, request).await?;
    Ok(ApiResponse::success(flight.into()))
}

/// DELETE /flights/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    state.flights().delete(&actor.username, &id).await?;
    Ok(ApiResponse::deleted(format!("Flight {}", id.trim())))
}
