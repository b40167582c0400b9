//! Display API endpoints.

use axum::{extract::State, http::Uri};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::DisplaySnapshot;
use crate::view::DisplayView;
use crate::AppState;

/// GET /api/display - The derived view for the current instant.
pub async fn get_display(State(state): State<AppState>) -> ApiResult<DisplayView> {
    let (view, generation) = state.kiosk.view().await;
    success(view, generation)
}

/// GET /api/snapshot - The raw snapshot of the last applied poll.
pub async fn get_snapshot(State(state): State<AppState>) -> ApiResult<DisplaySnapshot> {
    let (snapshot, generation) = state.kiosk.snapshot().await;
    success(snapshot, generation)
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> ApiResult<()> {
    let generation = state.kiosk.generation().await;
    error(
        AppError::NotFound(format!("No route for {}", uri.path())),
        generation,
    )
}
