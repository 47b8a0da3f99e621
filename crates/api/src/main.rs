//! Car rental API server entrypoint.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use car_rental_api::app::{create_app, AppState};
use car_rental_api::config::Config;
use car_rental_api::jobs::email_dispatch::EmailDispatchJob;
use car_rental_api::jobs::scheduler::JobScheduler;
use car_rental_api::middleware::logging::init_logging;
use persistence::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config.logging);

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting car rental API"
    );

    let store = Store::seeded();
    let state = AppState::new(store.clone(), config.clone());

    let mut scheduler = JobScheduler::new();
    if config.scheduler.enabled {
        scheduler.register(Arc::new(EmailDispatchJob::new(
            store.clone(),
            state.email.clone(),
            config.scheduler.email_dispatch_minutes,
        )));
        scheduler.start();
    }

    let app = create_app(state);
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    scheduler.shutdown();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
