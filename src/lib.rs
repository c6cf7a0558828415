pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod service;
pub mod web;

use axum::Router;
use tower_http::{
    compression::CompressionLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use api::state::AppState;

/// API and web routes merged, with media paths (`/logo.png`, flyers, video)
/// served from `assets.dir` for anything no route claims.
pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.settings.assets.dir);

    api::create_app(state.clone())
        .merge(web::create_web_routes(state))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
