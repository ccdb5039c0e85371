//! Suggestion entity model and DTOs.

use rigor_core::diagnosis::SuggestionDraft;
use rigor_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A suggestion row from the `suggestions` table.
///
/// The closed vocabularies (`kind`, `status`, `section`) are stored as
/// TEXT; the database CHECK constraints and `rigor_core::suggestion`
/// parsing keep them within their closed sets.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: DbId,
    pub project_id: DbId,
    /// One of {risk, improvement, gap, citation}.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub rationale: String,
    /// One of {problem, objectives, literature, methodology}, or NULL.
    pub section: Option<String>,
    /// One of {pending, accepted, rejected}.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting one suggestion produced by a diagnosis run.
///
/// Built from a validated [`SuggestionDraft`], never directly from user
/// or model input. Status always starts at `pending`.
#[derive(Debug, Clone)]
pub struct CreateSuggestion {
    pub project_id: DbId,
    pub draft: SuggestionDraft,
}
