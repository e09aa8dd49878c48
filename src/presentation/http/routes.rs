use super::{
    handlers::{cities, health, temperatures, webhooks},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Cities
        .route("/cities", post(cities::create_city))
        .route(
            "/cities/{id}",
            patch(cities::update_city).delete(cities::delete_city),
        )
        // Temperatures
        .route("/temperatures", post(temperatures::create_temperature))
        .route("/forecasts/{city_id}", get(temperatures::get_forecast))
        // Webhooks
        .route("/webhooks", post(webhooks::create_webhook))
        .route("/webhooks/{id}", delete(webhooks::delete_webhook))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
