// handlers/login.rs - POST /login handler

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::requests::LoginRequest;
use crate::auth::{issue_admin_token, verify_admin_credentials};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{FieldErrors, REQUIRED};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until the token expires
    pub expires_in: u64,
}

/**
 * POST /login - Exchange the admin credential for a bearer token
 *
 * Expected Input:
 * ```json
 * { "username": "admin", "password": "..." }
 * ```
 *
 * The credential is compared with ADMIN_USERNAME / ADMIN_PASSWORD. This is a
 * stand-in for a real user store.
 */
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<TokenResponse> {
    let Json(request) = payload?;

    let mut errors = FieldErrors::default();
    let username = request.username.filter(|u| !u.is_empty());
    let password = request.password.filter(|p| !p.is_empty());
    if username.is_none() {
        errors.add("username", REQUIRED);
    }
    if password.is_none() {
        errors.add("password", REQUIRED);
    }
    let (Some(username), Some(password)) = (username, password) else {
        return Err(errors.into_error().into());
    };

    let security = &state.config.security;
    if !verify_admin_credentials(security, &username, &password) {
        warn!("Failed login attempt for '{}'", username);
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let access_token = issue_admin_token(security, &username)?;
    info!("Issued admin token for '{}'", username);

    Ok(ApiResponse::success(TokenResponse {
        access_token,
        token_type: "Bearer",
        expires_in: security.jwt_expiry_hours * 3600,
    }))
}
