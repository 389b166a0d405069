pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
pub mod utils;

use axum::middleware::from_fn;
use axum::{routing::get, Router};
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use config::CardValidationConfig;
use services::CardValidationStore;

pub const VALIDATION_PATH: &str = "/credit_card_number";

#[derive(Clone)]
pub struct AppState {
    pub config: CardValidationConfig,
    pub store: Arc<dyn CardValidationStore>,
}

impl AppState {
    pub fn new(config: CardValidationConfig, store: Arc<dyn CardValidationStore>) -> Self {
        Self { config, store }
    }
}

pub fn build_router(state: AppState) -> Router {
    let validate = get(handlers::validation::validate_card)
        .post(handlers::validation::validate_card);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route(VALIDATION_PATH, validate.clone())
        .route(&format!("{}/", VALIDATION_PATH), validate)
        .fallback(handlers::not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Outermost, so the span above already sees a generated id
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
