pub mod health;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::frames::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/generate-frames",
            post(handlers::handle_generate_frames)
                .options(handlers::handle_preflight)
                .fallback(handlers::handle_method_not_allowed),
        )
        .with_state(state)
        .layer(cors_layer())
}

/// Wildcard origin, POST and OPTIONS, `content-type` request header.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
