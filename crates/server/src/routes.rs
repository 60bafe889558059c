use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::observability;
use crate::state::AppState;

pub mod keyvalue;
pub mod products;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: key/value and product routes plus
/// health and metrics.
pub fn build_router(state: AppState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let keyvalue_routes = Router::new()
        .route("/keyvalue", post(keyvalue::set_entry))
        .route(
            "/keyvalue/:name",
            get(keyvalue::get_entry).delete(keyvalue::delete_entry),
        );

    let product_routes = Router::new()
        .route("/products", get(products::list_products).post(products::create_product))
        .route("/product", post(products::get_product));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(observability::metrics));

    keyvalue_routes
        .merge(product_routes)
        .route_layer(middleware::from_fn(observability::track_metrics))
        .merge(ops)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
