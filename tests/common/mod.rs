#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use tower::ServiceExt; // for `oneshot`

use gaanet::{
    api::state::AppState,
    config::Settings,
    domain::{default_events, FormState, SiteProfile},
    error::{AppError, Result},
    integrations::ContactGateway,
    service::{countdown_service::CountdownService, Clock, ServiceContext},
};

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Records every delivered form; answers like a non-2xx API when `fail` is set.
#[derive(Default)]
pub struct RecordingGateway {
    pub delivered: Mutex<Vec<FormState>>,
    pub fail: AtomicBool,
}

impl RecordingGateway {
    pub fn calls(&self) -> usize {
        self.delivered.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<FormState> {
        self.delivered.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ContactGateway for RecordingGateway {
    fn name(&self) -> &str {
        "recording"
    }

    async fn deliver(&self, form: &FormState) -> Result<()> {
        self.delivered.lock().unwrap().push(form.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::External("Status: 500".to_string()));
        }
        Ok(())
    }
}

pub fn launch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 4, 8, 0, 0).unwrap()
}

pub struct TestApp {
    pub router: Router,
    pub gateway: Arc<RecordingGateway>,
}

impl TestApp {
    /// Two days, three hours before launch.
    pub fn counting() -> Self {
        Self::at(launch() - chrono::Duration::hours(51))
    }

    pub fn live() -> Self {
        Self::at(launch() + chrono::Duration::minutes(5))
    }

    pub fn at(now: DateTime<Utc>) -> Self {
        let settings = Settings::default();
        let gateway = Arc::new(RecordingGateway::default());

        let countdown = CountdownService::new(
            launch(),
            Duration::from_secs(1),
            Arc::new(FixedClock(now)),
        );
        let service_context = Arc::new(ServiceContext::new(
            default_events(),
            SiteProfile::gaanet(),
            countdown,
            gateway.clone(),
        ));

        let state = AppState::new(service_context, Arc::new(settings));
        Self {
            router: gaanet::build_router(state),
            gateway,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
