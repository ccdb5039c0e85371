//! Repository for the `projects` table.

use rigor_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, area, problem, objectives, literature, methodology, \
                       rigor_score, status, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// Score defaults to 0 and status to `draft` via column defaults.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, title, area, problem, objectives, literature, methodology)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.owner_id)
            .bind(&input.title)
            .bind(&input.area)
            .bind(&input.problem)
            .bind(&input.objectives)
            .bind(&input.literature)
            .bind(&input.methodology)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one owner's projects, most recently updated first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE owner_id = $1 ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed regardless of which fields changed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                area = COALESCE($3, area),
                problem = COALESCE($4, problem),
                objectives = COALESCE($5, objectives),
                literature = COALESCE($6, literature),
                methodology = COALESCE($7, methodology),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.area)
            .bind(&input.problem)
            .bind(&input.objectives)
            .bind(&input.literature)
            .bind(&input.methodology)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Set a project's rigor score after a diagnosis run.
    ///
    /// The score must already be clamped to [0, 100]; the column CHECK
    /// constraint enforces the invariant at the storage boundary too.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_rigor_score(
        pool: &PgPool,
        id: DbId,
        score: i32,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET rigor_score = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(score)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// Deleting an unknown ID is a no-op. Owned suggestions and runs go
    /// with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
