use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hackathon_kiosk::cms::{ContentSource, HttpCms};
use hackathon_kiosk::config::Config;
use hackathon_kiosk::runtime::KioskRuntime;
use hackathon_kiosk::state::KioskState;
use hackathon_kiosk::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!("Starting Hackathon Kiosk Backend");
    tracing::info!("CMS URL: {}", config.cms_url);
    tracing::info!("Display offset: {}", config.utc_offset);
    tracing::info!("Bind address: {}", config.bind_addr);

    let source: Arc<dyn ContentSource> = Arc::new(HttpCms::new(&config)?);
    let kiosk = Arc::new(KioskState::new(config.utc_offset, config.cms_url.clone()));

    // Start the clock and the poller
    let runtime = KioskRuntime::start(Arc::clone(&kiosk), source, &config);

    let state = AppState { kiosk };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    runtime.shutdown().await;

    Ok(())
}

/// Resolve on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
