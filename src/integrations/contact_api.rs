use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::Settings,
    domain::FormState,
    error::{AppError, Result},
    integrations::ContactGateway,
};

/// Posts forms as JSON to `{api.base_url}/api/contact`.
pub struct ContactApiGateway {
    client: Client,
    endpoint: String,
}

impl ContactApiGateway {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            settings.contact_endpoint(),
            Duration::from_secs(settings.api.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactGateway for ContactApiGateway {
    fn name(&self) -> &str {
        "contact-api"
    }

    async fn deliver(&self, form: &FormState) -> Result<()> {
        // `.json()` sets Content-Type: application/json
        let res = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| AppError::External(format!("Contact API connection error: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(AppError::External(format!(
                "Contact API rejected submission. Status: {}, Body: {}",
                status, text
            )));
        }

        Ok(())
    }
}
