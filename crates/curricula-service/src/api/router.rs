//! API router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        // Course workflow
        .route("/courses", post(handlers::register_course))
        .route("/courses/:id", get(handlers::get_workflow))
        .route("/courses/:id", delete(handlers::purge_course))
        .route("/courses/:id/transition", post(handlers::submit_transition))
        .route("/courses/:id/history", get(handlers::get_history))
        // Compliance audit
        .route("/audit", post(handlers::audit_snapshot))
        // Comments
        .route("/comments", post(handlers::create_comment))
        .route("/comments", get(handlers::list_comments))
        .route("/comments/:id", patch(handlers::update_comment));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
