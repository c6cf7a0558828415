use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Form;
use chrono::Datelike;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{Day, FormField, FormState, FormVariant, SiteProfile},
    error::Result,
    service::SubmissionOutcome,
    web::templates::{FormView, HtmlTemplate, Notice},
};

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactPageTemplate<'a> {
    pub site: &'a SiteProfile,
    pub form_view: FormView,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPageTemplate<'a> {
    pub site: &'a SiteProfile,
    pub form_view: FormView,
    pub year: i32,
}

/// The form fragment swapped back in after a submission.
#[derive(Template)]
#[template(path = "partials/form.html")]
pub struct FormTemplate {
    pub form_view: FormView,
}

/// Browser form post. Unchecked checkboxes are simply absent; `days` repeats
/// once per checked day.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    pub form_id: Uuid,
    #[serde(default)]
    pub in_modal: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub ministry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub consent: Option<String>,
}

impl FormSubmission {
    fn into_form(self) -> (Uuid, bool, FormState) {
        let mut form = FormState::default();
        form.set_field(FormField::Name, self.name);
        form.set_field(FormField::Phone, self.phone);
        form.set_field(FormField::Whatsapp, self.whatsapp);
        form.set_field(FormField::Email, self.email);
        form.set_field(FormField::Ministry, self.ministry);
        form.set_field(FormField::Location, self.location);
        for day in self.days {
            form.toggle_day(day, true);
        }
        form.set_consent(self.consent.is_some());
        (self.form_id, self.in_modal, form)
    }
}

// GET /contact
pub async fn contact_page(State(state): State<AppState>) -> Response {
    let ctx = &state.service_context;
    let template = ContactPageTemplate {
        site: &ctx.site,
        form_view: FormView::blank(FormVariant::Contact, false, &state.settings, ctx.site.form_banner),
        year: ctx.countdown.now().year(),
    };
    HtmlTemplate(template).into_response()
}

// GET /register
pub async fn register_page(State(state): State<AppState>) -> Response {
    let ctx = &state.service_context;
    let template = RegisterPageTemplate {
        site: &ctx.site,
        form_view: FormView::blank(FormVariant::Registration, false, &state.settings, ctx.site.form_banner),
        year: ctx.countdown.now().year(),
    };
    HtmlTemplate(template).into_response()
}

// POST /forms/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<Response> {
    submit(state, FormVariant::Contact, submission).await
}

// POST /forms/register
pub async fn submit_registration(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<Response> {
    submit(state, FormVariant::Registration, submission).await
}

async fn submit(state: AppState, variant: FormVariant, submission: FormSubmission) -> Result<Response> {
    let (form_id, in_modal, mut form) = submission.into_form();

    let outcome = state
        .service_context
        .submissions
        .submit(form_id, variant, &form)
        .await?;

    // Failures keep what the visitor typed so they can resubmit.
    let notice = match outcome {
        SubmissionOutcome::Invalid(message) => Notice::Invalid(message),
        SubmissionOutcome::Failed => Notice::Failed,
        SubmissionOutcome::Sent => {
            form.clear();
            Notice::Sent
        }
    };

    let form_view = FormView {
        variant,
        form_id,
        form,
        in_modal,
        notice,
        dismiss_after_ms: state.settings.forms.success_dismiss_ms,
        banner: state.service_context.site.form_banner,
    };
    Ok(HtmlTemplate(FormTemplate { form_view }).into_response())
}

// GET /forms/dismiss
pub async fn dismiss_toast() -> Html<&'static str> {
    Html("")
}
