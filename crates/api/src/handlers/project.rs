//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rigor_core::error::CoreError;
use rigor_core::project::{validate_owner_id, validate_title};
use rigor_core::types::DbId;
use rigor_db::models::diagnosis_run::DiagnosisRun;
use rigor_db::models::project::{CreateProject, Project, UpdateProject};
use rigor_db::models::suggestion::Suggestion;
use rigor_db::repositories::{DiagnosisRunRepo, ProjectRepo, SuggestionRepo};
use serde::Deserialize;

use crate::engine::{run_diagnosis, DiagnosisReport};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for listing projects.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Owner identifier; listing is always owner-scoped.
    pub owner: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_owner_id(&input.owner_id)?;
    validate_title(&input.title)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects?owner={id}
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Project>>> {
    let owner = params
        .owner
        .ok_or_else(|| AppError::BadRequest("Missing required query parameter: owner".into()))?;
    let projects = ProjectRepo::list_by_owner(&state.pool, &owner).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// PATCH /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id,
        })?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Idempotent: deleting an unknown id still returns 204.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        tracing::debug!(id, "Delete of unknown project treated as no-op");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/projects/{id}/diagnose
pub async fn diagnose(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DiagnosisReport>> {
    let report = run_diagnosis(&state, id).await?;
    Ok(Json(report))
}

/// GET /api/v1/projects/{id}/suggestions
pub async fn list_suggestions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Suggestion>>> {
    let suggestions = SuggestionRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(suggestions))
}

/// GET /api/v1/projects/{id}/diagnosis-runs/latest
pub async fn latest_run(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DiagnosisRun>> {
    let run = DiagnosisRunRepo::latest_for_project(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "DiagnosisRun",
            id,
        })?;
    Ok(Json(run))
}
