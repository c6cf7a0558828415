pub mod handlers;
pub mod state;

use axum::{
    Router,
    routing::get,
};
use state::AppState;

pub fn create_app(app_state: AppState) -> Router {
    Router::new()
        // Health and info endpoints
        .route("/health", get(handlers::root::health_check))
        .route("/api/info", get(handlers::root::api_info))

        // Countdown
        .route("/api/countdown", get(handlers::countdown::snapshot))
        .route("/api/countdown/stream", get(handlers::countdown::stream))

        .with_state(app_state)
}
