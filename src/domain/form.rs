use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{AppError, Result};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const CONSENT_REQUIRED: &str = "You must agree to be contacted.";
pub const DAYS_AND_CONSENT_REQUIRED: &str = "You must select days and agree to be contacted.";

/// Days a registrant can attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::Friday, Day::Saturday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

/// The contact form and the registration form share fields and endpoint;
/// registration additionally insists on at least one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    Contact,
    Registration,
}

impl FormVariant {
    pub fn action(&self) -> &'static str {
        match self {
            FormVariant::Contact => "/forms/contact",
            FormVariant::Registration => "/forms/register",
        }
    }

    pub fn requires_days(&self) -> bool {
        matches!(self, FormVariant::Registration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Whatsapp,
    Email,
    Ministry,
    Location,
}

/// Visitor-entered values, serialized as-is for the contact API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct FormState {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone number is required."))]
    pub phone: String,
    pub whatsapp: String,
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,
    #[validate(length(min = 1, message = "Ministry is required."))]
    pub ministry: String,
    #[validate(length(min = 1, message = "Location is required."))]
    pub location: String,
    pub days: Vec<Day>,
    pub consent: bool,
}

// Field order for reporting the first failing rule.
const CHECK_ORDER: [&str; 5] = ["name", "phone", "ministry", "location", "email"];

impl FormState {
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Whatsapp => self.whatsapp = value,
            FormField::Email => self.email = value,
            FormField::Ministry => self.ministry = value,
            FormField::Location => self.location = value,
        }
    }

    /// Checking appends in click order; a day is never listed twice.
    pub fn toggle_day(&mut self, day: Day, checked: bool) {
        if checked {
            if !self.days.contains(&day) {
                self.days.push(day);
            }
        } else {
            self.days.retain(|d| *d != day);
        }
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.consent = consent;
    }

    pub fn has_day(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // Spaces alone don't satisfy a required field.
    fn required_trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            ministry: self.ministry.trim().to_string(),
            location: self.location.trim().to_string(),
            ..self.clone()
        }
    }

    /// Client-side rules, checked before any network call. Returns the first
    /// failing rule as `AppError::Validation`.
    pub fn check(&self, variant: FormVariant) -> Result<()> {
        if let Err(errors) = self.required_trimmed().validate() {
            let field_errors = errors.field_errors();
            let message = CHECK_ORDER
                .iter()
                .filter_map(|field| field_errors.get(*field))
                .flat_map(|errs| errs.iter())
                .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Please check the form and try again.".to_string());
            return Err(AppError::Validation(message));
        }

        if variant.requires_days() && (self.days.is_empty() || !self.consent) {
            return Err(AppError::Validation(DAYS_AND_CONSENT_REQUIRED.to_string()));
        }

        if !self.consent {
            return Err(AppError::Validation(CONSENT_REQUIRED.to_string()));
        }

        Ok(())
    }
}

/// `local@domain.tld` shape: no whitespace, one `@`, and a dot inside the
/// domain with something on both sides. Empty means "not provided".
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn validate_email_shape(email: &str) -> std::result::Result<(), ValidationError> {
    if email.is_empty() || is_valid_email(email) {
        return Ok(());
    }
    Err(ValidationError::new("email").with_message(Cow::Borrowed(INVALID_EMAIL)))
}
