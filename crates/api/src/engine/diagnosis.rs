//! Orchestration of one diagnosis run.
//!
//! A run is a non-transactional sequence of individually atomic store
//! operations: clear the old suggestion set, call the model, persist the
//! sanitized result, update the project's score. The `diagnosis_runs` row
//! opened before the destructive step is the saga marker: if the model
//! call fails after the old suggestions were cleared, the run stays in
//! `failed` state so callers can tell "failed run" apart from "diagnosis
//! found nothing".

use rigor_core::diagnosis;
use rigor_core::error::CoreError;
use rigor_core::types::DbId;
use rigor_db::models::suggestion::{CreateSuggestion, Suggestion};
use rigor_db::repositories::{DiagnosisRunRepo, ProjectRepo, SuggestionRepo};
use rigor_llm::DiagnosisRequest;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Result of a completed diagnosis run, returned to the caller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    pub suggestions: Vec<Suggestion>,
    pub overall_score: i32,
    pub summary: String,
}

/// Run a full diagnosis for one project.
///
/// Concurrent calls for the same project serialize on the per-project
/// run lock; calls for different projects proceed concurrently.
pub async fn run_diagnosis(state: &AppState, project_id: DbId) -> AppResult<DiagnosisReport> {
    let _guard = state.run_locks.acquire(project_id).await;

    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    let run = DiagnosisRunRepo::start(&state.pool, project_id).await?;

    // Full replacement policy: the old set goes before the model is asked.
    let cleared = SuggestionRepo::delete_by_project(&state.pool, project_id).await?;
    tracing::debug!(project_id, cleared, "Cleared prior suggestions");

    let request = DiagnosisRequest {
        title: project.title.clone(),
        problem: project.problem.clone(),
        objectives: project.objectives.clone(),
        literature: project.literature.clone(),
        methodology: project.methodology.clone(),
    };

    let raw = match state.backend.diagnose(&request).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(project_id, run_id = run.id, error = %err, "Diagnosis run failed");
            if let Err(mark_err) =
                DiagnosisRunRepo::mark_failed(&state.pool, run.id, &err.to_string()).await
            {
                tracing::error!(run_id = run.id, error = %mark_err, "Failed to mark run failed");
            }
            return Err(AppError::Backend(err));
        }
    };

    let outcome = diagnosis::parse_reply(&raw);

    // Persist in model order; ids ascend so the newest-first listing is
    // deterministic.
    let mut suggestions = Vec::with_capacity(outcome.suggestions.len());
    for draft in outcome.suggestions {
        let input = CreateSuggestion { project_id, draft };
        suggestions.push(SuggestionRepo::create(&state.pool, &input).await?);
    }

    ProjectRepo::set_rigor_score(&state.pool, project_id, outcome.overall_score)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        })?;

    DiagnosisRunRepo::mark_succeeded(&state.pool, run.id, outcome.overall_score, &outcome.summary)
        .await?;

    tracing::info!(
        project_id,
        run_id = run.id,
        suggestion_count = suggestions.len(),
        overall_score = outcome.overall_score,
        "Diagnosis run succeeded"
    );

    Ok(DiagnosisReport {
        suggestions,
        overall_score: outcome.overall_score,
        summary: outcome.summary,
    })
}
