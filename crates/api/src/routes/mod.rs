pub mod health;
pub mod project;
pub mod suggestion;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects      project CRUD, diagnosis, suggestion listing
/// /suggestions   suggestion lifecycle transitions
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/suggestions", suggestion::router())
}
