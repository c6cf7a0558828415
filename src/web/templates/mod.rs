pub mod countdown;
pub mod forms;
pub mod landing;
pub mod modal;

use askama::Template;
use axum::{
    response::{Html, IntoResponse, Response},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    config::Settings,
    domain::{CountdownState, Day, FormState, FormVariant, TimeBlock},
};

// Make askama templates work with axum
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Failed to render template: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {}", err),
                ).into_response()
            }
        }
    }
}

/// Headline area: time blocks while counting, nothing once live.
#[derive(Debug, Clone)]
pub struct LaunchView {
    pub live: bool,
    pub blocks: Vec<TimeBlock>,
}

impl From<CountdownState> for LaunchView {
    fn from(state: CountdownState) -> Self {
        match state.remaining() {
            Some(breakdown) => Self {
                live: false,
                blocks: breakdown.blocks().to_vec(),
            },
            None => Self {
                live: true,
                blocks: Vec::new(),
            },
        }
    }
}

/// Feedback shown with a re-rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    None,
    Invalid(String),
    Failed,
    Sent,
}

#[derive(Debug, Clone)]
pub struct DayOption {
    pub value: &'static str,
    pub checked: bool,
}

/// Everything the form partial needs: one rendered form instance.
#[derive(Debug, Clone)]
pub struct FormView {
    pub variant: FormVariant,
    pub form_id: Uuid,
    pub form: FormState,
    pub in_modal: bool,
    pub notice: Notice,
    pub dismiss_after_ms: u64,
    pub banner: &'static str,
}

impl FormView {
    pub fn blank(variant: FormVariant, in_modal: bool, settings: &Settings, banner: &'static str) -> Self {
        Self {
            variant,
            form_id: Uuid::new_v4(),
            form: FormState::default(),
            in_modal,
            notice: Notice::None,
            dismiss_after_ms: settings.forms.success_dismiss_ms,
            banner,
        }
    }

    pub fn action(&self) -> &'static str {
        self.variant.action()
    }

    pub fn is_sent(&self) -> bool {
        self.notice == Notice::Sent
    }

    pub fn is_registration(&self) -> bool {
        self.variant == FormVariant::Registration
    }

    pub fn day_options(&self) -> Vec<DayOption> {
        Day::ALL
            .iter()
            .map(|day| DayOption {
                value: day.as_str(),
                checked: self.form.has_day(*day),
            })
            .collect()
    }
}
