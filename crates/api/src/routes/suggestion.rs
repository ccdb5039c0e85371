//! Route definitions for the `/suggestions` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::suggestion;
use crate::state::AppState;

/// Routes mounted at `/suggestions`.
///
/// ```text
/// PATCH  /{id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/status", patch(suggestion::update_status))
}
