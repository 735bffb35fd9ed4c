//! Per-client request limiting with `tower_governor`, keyed by peer IP.
//!
//! A client may burst up to `rate_limit_requests` requests; one slot is
//! returned every `rate_limit_window_secs / rate_limit_requests`, so a client
//! staying inside the configured rate is never rejected.

use axum::{
    http::{header::RETRY_AFTER, HeaderValue},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{governor::GovernorConfigBuilder, GovernorError, GovernorLayer};
use tracing::warn;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Interval after which a single request slot is replenished
pub fn replenish_period(api: &ApiConfig) -> Option<Duration> {
    Duration::from_secs(api.rate_limit_window_secs)
        .checked_div(api.rate_limit_requests)
        .filter(|period| !period.is_zero())
}

/// Wraps `router` in the governor layer. An unusable quota (zero requests or
/// a zero-length window) leaves the router unlimited.
pub fn rate_limit_layers<S>(router: Router<S>, api: &ApiConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let config = replenish_period(api).and_then(|period| {
        GovernorConfigBuilder::default()
            .period(period)
            .burst_size(api.rate_limit_requests)
            .error_handler(rate_limit_error_response)
            .finish()
    });

    match config {
        Some(config) => router.layer(GovernorLayer {
            config: Arc::new(config),
        }),
        None => {
            warn!(
                "Rate limiting not applied: {} requests per {}s is not a usable quota",
                api.rate_limit_requests, api.rate_limit_window_secs
            );
            router
        }
    }
}

/// Renders governor rejections with the standard JSON error body
pub fn rate_limit_error_response(error: GovernorError) -> Response {
    match error {
        GovernorError::TooManyRequests { wait_time, .. } => {
            // wait_time is truncated to whole seconds
            let seconds = wait_time.saturating_add(1);
            warn!("Rate limit exceeded, retry in {}s", seconds);
            let mut response = ApiError::too_many_requests("Rate limit exceeded, try again later").into_response();
            response.headers_mut().insert(RETRY_AFTER, HeaderValue::from(seconds));
            response
        }
        GovernorError::UnableToExtractKey => {
            warn!("Rate limiter could not determine the client address");
            ApiError::internal_server_error("Unable to identify client").into_response()
        }
        GovernorError::Other { code, msg, .. } => {
            let mut response = ApiError::internal_server_error(msg.unwrap_or_else(|| "Rate limiter error".to_string()))
                .into_response();
            *response.status_mut() = code;
            response
        }
    }
}
