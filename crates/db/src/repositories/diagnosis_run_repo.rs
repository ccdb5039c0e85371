//! Repository for the `diagnosis_runs` table.

use rigor_core::types::DbId;
use sqlx::PgPool;

use crate::models::diagnosis_run::DiagnosisRun;

const COLUMNS: &str =
    "id, project_id, status, overall_score, summary, error, started_at, finished_at";

/// Records diagnosis run markers so partial failure is observable.
pub struct DiagnosisRunRepo;

impl DiagnosisRunRepo {
    /// Insert a run in `running` state.
    pub async fn start(pool: &PgPool, project_id: DbId) -> Result<DiagnosisRun, sqlx::Error> {
        let query = format!(
            "INSERT INTO diagnosis_runs (project_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiagnosisRun>(&query)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Mark a run succeeded, recording its score and summary.
    pub async fn mark_succeeded(
        pool: &PgPool,
        id: DbId,
        overall_score: i32,
        summary: &str,
    ) -> Result<Option<DiagnosisRun>, sqlx::Error> {
        let query = format!(
            "UPDATE diagnosis_runs
             SET status = 'succeeded', overall_score = $2, summary = $3, finished_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiagnosisRun>(&query)
            .bind(id)
            .bind(overall_score)
            .bind(summary)
            .fetch_optional(pool)
            .await
    }

    /// Mark a run failed, recording the upstream error message.
    pub async fn mark_failed(
        pool: &PgPool,
        id: DbId,
        error: &str,
    ) -> Result<Option<DiagnosisRun>, sqlx::Error> {
        let query = format!(
            "UPDATE diagnosis_runs
             SET status = 'failed', error = $2, finished_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DiagnosisRun>(&query)
            .bind(id)
            .bind(error)
            .fetch_optional(pool)
            .await
    }

    /// Most recent run for a project, if any.
    pub async fn latest_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<DiagnosisRun>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM diagnosis_runs
             WHERE project_id = $1
             ORDER BY started_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, DiagnosisRun>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }
}
