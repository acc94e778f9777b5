//! Route definitions
//!
//! All API routes mounted at the server root.

use axum::{routing::get, Router};

use crate::handlers::{health, posts};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().merge(post_routes()).merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new().route("/posts", get(posts::get_posts))
}
