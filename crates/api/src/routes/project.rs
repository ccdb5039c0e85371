//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                             -> list (owner-scoped)
/// POST   /                             -> create
/// GET    /{id}                         -> get_by_id
/// PATCH  /{id}                         -> update
/// DELETE /{id}                         -> delete
/// POST   /{id}/diagnose                -> diagnose
/// GET    /{id}/suggestions             -> list_suggestions
/// GET    /{id}/diagnosis-runs/latest   -> latest_run
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .patch(project::update)
                .delete(project::delete),
        )
        .route("/{id}/diagnose", post(project::diagnose))
        .route("/{id}/suggestions", get(project::list_suggestions))
        .route("/{id}/diagnosis-runs/latest", get(project::latest_run))
}
