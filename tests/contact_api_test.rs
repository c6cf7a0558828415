use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;

use gaanet::{
    domain::{Day, FormField, FormState},
    error::AppError,
    integrations::{contact_api::ContactApiGateway, ContactGateway},
};

type Received = Arc<Mutex<Vec<Value>>>;

/// Stand-in for the external contact API, answering with `status`.
async fn spawn_api(status: StatusCode) -> (String, Received) {
    let received: Received = Arc::default();

    let app = Router::new()
        .route(
            "/api/contact",
            post(
                move |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    status
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api/contact", addr), received)
}

fn filled_form() -> FormState {
    let mut form = FormState::default();
    form.set_field(FormField::Name, "Ada");
    form.set_field(FormField::Phone, "08012345678");
    form.set_field(FormField::Email, "ada@example.org");
    form.set_field(FormField::Ministry, "Grace Chapel");
    form.set_field(FormField::Location, "Lagos");
    form.toggle_day(Day::Saturday, true);
    form.set_consent(true);
    form
}

#[tokio::test]
async fn test_delivers_form_as_json() {
    let (endpoint, received) = spawn_api(StatusCode::OK).await;
    let gateway = ContactApiGateway::new(endpoint, Duration::from_secs(5)).unwrap();

    gateway.deliver(&filled_form()).await.unwrap();

    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["phone"], "08012345678");
    assert_eq!(body["whatsapp"], "");
    assert_eq!(body["email"], "ada@example.org");
    assert_eq!(body["ministry"], "Grace Chapel");
    assert_eq!(body["location"], "Lagos");
    assert_eq!(body["days"], serde_json::json!(["Saturday"]));
    assert_eq!(body["consent"], true);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (endpoint, received) = spawn_api(StatusCode::INTERNAL_SERVER_ERROR).await;
    let gateway = ContactApiGateway::new(endpoint, Duration::from_secs(5)).unwrap();

    let result = gateway.deliver(&filled_form()).await;

    assert!(matches!(result, Err(AppError::External(_))));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unreachable_api_is_an_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = ContactApiGateway::new(
        format!("http://{}/api/contact", addr),
        Duration::from_secs(2),
    )
    .unwrap();

    let result = gateway.deliver(&filled_form()).await;
    assert!(matches!(result, Err(AppError::External(_))));
}
