//! Route configuration.

use axum::Router;

use crate::handlers::{method_not_allowed, register_route};
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", register_route())
        .fallback(method_not_allowed)
        .with_state(state)
}
