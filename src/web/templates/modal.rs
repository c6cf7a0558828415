use askama::Template;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    api::state::AppState,
    domain::{Event, FormVariant, PageState, Selection},
    error::{AppError, Result},
    web::templates::{FormView, HtmlTemplate, Notice},
};

/// Content of the page's single `#modal` slot.
pub enum ModalView<'a> {
    Closed,
    Event(&'a Event),
    Contact(FormView),
}

impl<'a> ModalView<'a> {
    pub fn for_selection(selection: Selection, state: &'a AppState) -> Self {
        let ctx = &state.service_context;
        match selection {
            Selection::None => ModalView::Closed,
            Selection::Event(index) => ctx
                .catalog
                .get(index)
                .map(ModalView::Event)
                .unwrap_or(ModalView::Closed),
            Selection::ContactForm => ModalView::Contact(FormView::blank(
                FormVariant::Contact,
                true,
                &state.settings,
                ctx.site.form_banner,
            )),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/modal.html")]
pub struct ModalTemplate<'a> {
    pub modal: ModalView<'a>,
}

fn render(page: &PageState, state: &AppState) -> Response {
    let template = ModalTemplate {
        modal: ModalView::for_selection(page.selection(), state),
    };
    HtmlTemplate(template).into_response()
}

// GET /modal/events/:index
pub async fn event_modal(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Response> {
    if state.service_context.catalog.get(index).is_none() {
        return Err(AppError::NotFound(format!("Event {} not found", index)));
    }

    let mut page = PageState::default();
    page.select_event(index);
    Ok(render(&page, &state))
}

// GET /modal/contact
pub async fn contact_modal(State(state): State<AppState>) -> Response {
    let mut page = PageState::default();
    page.open_contact();
    render(&page, &state)
}

// GET /modal/close
pub async fn close_modal(State(state): State<AppState>) -> Response {
    let mut page = PageState::default();
    page.close();
    render(&page, &state)
}
