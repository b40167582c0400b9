//! Hackathon Kiosk Backend
//!
//! Polls the event CMS, keeps the clock, and serves the derived signage view as JSON.

pub mod api;
pub mod clock;
pub mod cms;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod models;
pub mod poller;
pub mod runtime;
pub mod schedule;
pub mod sponsors;
pub mod state;
pub mod view;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::KioskState;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub kiosk: Arc<KioskState>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/display", get(api::get_display))
        .route("/snapshot", get(api::get_snapshot));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .fallback(api::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
