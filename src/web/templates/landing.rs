use askama::Template;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};
use chrono::Datelike;

use crate::{
    api::state::AppState,
    domain::{Event, PageState, SelectionQuery, SiteProfile},
    web::templates::{modal::ModalView, HtmlTemplate, LaunchView, Notice},
};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub site: &'a SiteProfile,
    pub events: &'a [Event],
    pub launch: LaunchView,
    pub modal: ModalView<'a>,
    pub year: i32,
}

// GET /
pub async fn landing_page(
    State(state): State<AppState>,
    query: Result<Query<SelectionQuery>, QueryRejection>,
) -> Response {
    // A garbled deep link (e.g. a repeated key) still gets the page, just no modal.
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            tracing::debug!("Ignoring landing query: {}", rejection);
            SelectionQuery::default()
        }
    };

    let ctx = &state.service_context;
    let page = PageState::new(query.into_selection(ctx.catalog.len()));

    let template = LandingTemplate {
        site: &ctx.site,
        events: ctx.catalog.events(),
        launch: LaunchView::from(ctx.countdown.snapshot()),
        modal: ModalView::for_selection(page.selection(), &state),
        year: ctx.countdown.now().year(),
    };
    HtmlTemplate(template).into_response()
}
