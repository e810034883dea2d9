mod employee;
mod extract;
mod health;
mod swagger;
use health::health_checker_handler;
use tower_http::trace::TraceLayer;

use crate::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;

/// Assembles the full HTTP application around an already-built [`AppState`]
pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_checker_handler))
        .nest("/api/v1/employees", employee::employee_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
