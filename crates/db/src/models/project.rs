//! Project entity model and DTOs.

use rigor_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// Serialized in camelCase to match the public API shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub owner_id: String,
    pub title: String,
    pub area: Option<String>,
    pub problem: Option<String>,
    pub objectives: Option<String>,
    pub literature: Option<String>,
    pub methodology: Option<String>,
    /// Always within [0, 100].
    pub rigor_score: i32,
    /// Free-form label, defaults to `draft`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub owner_id: String,
    pub title: String,
    pub area: Option<String>,
    pub problem: Option<String>,
    pub objectives: Option<String>,
    pub literature: Option<String>,
    pub methodology: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// The rigor score is absent on purpose: it only changes through a
/// diagnosis run, never through a field edit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub area: Option<String>,
    pub problem: Option<String>,
    pub objectives: Option<String>,
    pub literature: Option<String>,
    pub methodology: Option<String>,
    pub status: Option<String>,
}
