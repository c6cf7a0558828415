use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::{
    domain::{FormState, FormVariant},
    error::{AppError, Result},
    integrations::ContactGateway,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Rejected before any network call.
    Invalid(String),
    /// The contact API answered non-2xx or could not be reached.
    Failed,
    Sent,
}

/// Validates forms and hands them to the gateway, one request per form
/// instance at a time.
pub struct SubmissionService {
    gateway: Arc<dyn ContactGateway>,
    in_flight: Mutex<HashSet<Uuid>>,
}

impl SubmissionService {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            gateway,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn submit(
        &self,
        form_id: Uuid,
        variant: FormVariant,
        form: &FormState,
    ) -> Result<SubmissionOutcome> {
        match form.check(variant) {
            Ok(()) => {}
            Err(AppError::Validation(message)) => {
                tracing::debug!("Form {} failed validation: {}", form_id, message);
                return Ok(SubmissionOutcome::Invalid(message));
            }
            Err(e) => return Err(e),
        }

        let _claim = self.claim(form_id)?;

        match self.gateway.deliver(form).await {
            Ok(()) => {
                tracing::info!("Form {} delivered via {}", form_id, self.gateway.name());
                Ok(SubmissionOutcome::Sent)
            }
            Err(e) => {
                tracing::error!("Form {} submission failed: {}", form_id, e);
                Ok(SubmissionOutcome::Failed)
            }
        }
    }

    pub fn is_in_flight(&self, form_id: Uuid) -> bool {
        self.lock().contains(&form_id)
    }

    fn claim(&self, form_id: Uuid) -> Result<InFlightClaim<'_>> {
        if !self.lock().insert(form_id) {
            tracing::warn!("Form {} is already being submitted", form_id);
            return Err(AppError::Conflict(
                "This form is already being submitted".to_string(),
            ));
        }
        Ok(InFlightClaim { service: self, form_id })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<Uuid>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Released when the submission finishes, whatever the outcome.
struct InFlightClaim<'a> {
    service: &'a SubmissionService,
    form_id: Uuid,
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        self.service.lock().remove(&self.form_id);
    }
}
