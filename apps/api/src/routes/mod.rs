pub mod health;

use axum::{routing::get, Router};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/profile",
            get(handlers::handle_get_profile).post(handlers::handle_update_profile),
        )
        .with_state(state)
}
