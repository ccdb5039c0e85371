//! Repository for the `suggestions` table.

use rigor_core::suggestion::SuggestionStatus;
use rigor_core::types::DbId;
use sqlx::PgPool;

use crate::models::suggestion::{CreateSuggestion, Suggestion};

const COLUMNS: &str =
    "id, project_id, kind, title, description, rationale, section, status, created_at";

/// Provides CRUD operations for suggestions.
pub struct SuggestionRepo;

impl SuggestionRepo {
    /// Insert one suggestion from a diagnosis run. Status starts at
    /// `pending` via the column default.
    pub async fn create(pool: &PgPool, input: &CreateSuggestion) -> Result<Suggestion, sqlx::Error> {
        let query = format!(
            "INSERT INTO suggestions (project_id, kind, title, description, rationale, section)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(input.project_id)
            .bind(input.draft.kind.as_str())
            .bind(&input.draft.title)
            .bind(&input.draft.description)
            .bind(&input.draft.rationale)
            .bind(input.draft.section.map(|s| s.as_str()))
            .fetch_one(pool)
            .await
    }

    /// List a project's suggestions, newest first. Ties on the creation
    /// timestamp break by id so display order stays deterministic.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Suggestion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM suggestions
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Set a suggestion's lifecycle status.
    ///
    /// Idempotent for repeated application of the same status. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: SuggestionStatus,
    ) -> Result<Option<Suggestion>, sqlx::Error> {
        let query = format!(
            "UPDATE suggestions SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Suggestion>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete all suggestions belonging to a project. Idempotent; used by
    /// the orchestrator before every fresh run (full replacement policy).
    /// Returns the number of rows removed.
    pub async fn delete_by_project(pool: &PgPool, project_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM suggestions WHERE project_id = $1")
            .bind(project_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
