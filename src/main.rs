use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gaanet::{
    api::state::AppState,
    config::Settings,
    domain::{default_events, SiteProfile},
    integrations::contact_api::ContactApiGateway,
    service::{countdown_service::CountdownService, ServiceContext, SystemClock},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gaanet=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!("Starting GAANET site on {}:{}", settings.server.host, settings.server.port);

    let gateway = Arc::new(ContactApiGateway::from_settings(&settings)?);
    tracing::info!("Forms will be delivered to {}", gateway.endpoint());

    let countdown = CountdownService::new(
        settings.launch.target,
        Duration::from_millis(settings.launch.tick_millis),
        Arc::new(SystemClock),
    );

    let service_context = Arc::new(ServiceContext::new(
        default_events(),
        SiteProfile::gaanet(),
        countdown,
        gateway,
    ));

    // Logs the launch moment once; cancelled with the server.
    let launch_target = settings.launch.target;
    let launch_watcher = service_context.countdown.spawn(
        |_| {},
        move || tracing::info!("Launch target {} reached, site is live", launch_target),
    );

    let app_state = AppState::new(service_context, Arc::new(settings.clone()));
    let app = gaanet::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(
        format!("{}:{}", settings.server.host, settings.server.port)
    ).await?;

    tracing::info!("Server listening on {}", settings.server.base_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    launch_watcher.cancel();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
