use std::time::Duration;

use axum::{routing::get, Router};
use service::{Resource, ResourceService};
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod resources;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

/// `GET` lists, `POST` creates, `PUT` updates; anything else is a 405.
fn resource_routes<R: Resource>(path: &str, svc: ResourceService<R>) -> Router {
    Router::new()
        .route(
            path,
            get(resources::list::<R>)
                .post(resources::create::<R>)
                .put(resources::update::<R>)
                // `get` would otherwise answer HEAD as well
                .head(resources::method_not_allowed)
                .fallback(resources::method_not_allowed),
        )
        .with_state(svc)
}

/// Build the full application router.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/hc", get(health))
        .merge(resource_routes("/user", state.users))
        .merge(resource_routes("/menu", state.menus))
        .merge(resource_routes("/salesDay", state.sales_days))
        .merge(resource_routes("/reservation", state.reservations))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
