use super::{handlers, state::AppState};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Creates the Axum router with all the application routes.
///
/// The CORS policy is deliberately wide open: any origin, GET/POST/OPTIONS,
/// Content-Type allowed. The API serves a public browser client and carries
/// no credentials, so CORS is not a security boundary here.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/roadmap", post(handlers::roadmap_handler))
        .route("/api/roadmap", post(handlers::roadmap_handler))
        .route("/generate-roadmap", post(handlers::roadmap_handler))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
