use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        // Quiz
        .route("/quiz", get(handlers::get_quiz))
        .route("/recommendations", post(handlers::recommend))
        .route("/trending", get(handlers::get_trending))
        // Titles
        .route("/titles", get(handlers::get_titles))
        .route("/titles/:id", get(handlers::get_title))
        .route("/titles/:id/why", post(handlers::explain_title))
        // Watch together
        .route("/sessions", post(handlers::create_session))
}
