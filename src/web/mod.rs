pub mod templates;

use axum::{
    Router,
    routing::{get, post},
};
use crate::api::state::AppState;
use templates::{forms, landing, modal};

pub fn create_web_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(landing::landing_page))
        .route("/contact", get(forms::contact_page))
        .route("/register", get(forms::register_page))

        // Modal fragments, all swapped into the page's single #modal slot
        .route("/modal/events/:index", get(modal::event_modal))
        .route("/modal/contact", get(modal::contact_modal))
        .route("/modal/close", get(modal::close_modal))

        // Form posts
        .route("/forms/contact", post(forms::submit_contact))
        .route("/forms/register", post(forms::submit_registration))
        .route("/forms/dismiss", get(forms::dismiss_toast))

        .with_state(state)
}
