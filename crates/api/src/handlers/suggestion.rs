//! Handlers for the `/suggestions` resource (lifecycle transitions).

use axum::extract::{Path, State};
use axum::Json;
use rigor_core::error::CoreError;
use rigor_core::suggestion::SuggestionStatus;
use rigor_core::types::DbId;
use rigor_db::models::suggestion::Suggestion;
use rigor_db::repositories::SuggestionRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for a status transition.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PATCH /api/v1/suggestions/{id}/status
///
/// A pure status flip: accepting a suggestion never touches project
/// content. Repeating the same terminal status is idempotent.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<Suggestion>> {
    let status = SuggestionStatus::parse(&input.status)?;
    let suggestion = SuggestionRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Suggestion",
            id,
        })?;
    Ok(Json(suggestion))
}
