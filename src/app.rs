use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{airlines, airports, flights, login, system};
use crate::middleware::{
    body_limit_layers, cors_layer, rate_limit_layers, require_admin_for_writes, security_header_layers,
};
use crate::state::AppState;

/// Full application router with every middleware layer applied
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/login", post(login::login))
        // Resources (writes require an admin token)
        .merge(resource_routes(state.clone()));

    router = body_limit_layers(router, &config.api);

    if config.api.enable_rate_limiting {
        router = rate_limit_layers(router, &config.api);
    }
    if let Some(cors) = cors_layer(&config) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    security_header_layers(router, &config).with_state(state)
}

fn resource_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/airlines", get(airlines::list).post(airlines::create))
        .route(
            "/airlines/:id",
            get(airlines::get)
                .put(airlines::update)
                .patch(airlines::update)
                .delete(airlines::delete),
        )
        .route("/airports", get(airports::list).post(airports::create))
        .route(
            "/airports/:id",
            get(airports::get)
                .put(airports::update)
                .patch(airports::update)
                .delete(airports::delete),
        )
        .route("/flights", get(flights::list).post(flights::create))
        .route(
            "/flights/:id",
            get(flights::get)
                .put(flights::update)
                .patch(flights::update)
                .delete(flights::delete),
        )
        .route_layer(from_fn_with_state(state, require_admin_for_writes))
}
