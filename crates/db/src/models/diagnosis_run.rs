//! Diagnosis run marker model.
//!
//! One row per diagnosis attempt. The status column makes a failed run
//! observable: a project with zero suggestions and a latest run in
//! `failed` state is distinguishable from one whose diagnosis found
//! nothing.

use rigor_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Run is in progress.
pub const RUN_STATUS_RUNNING: &str = "running";

/// Run completed and its suggestions were persisted.
pub const RUN_STATUS_SUCCEEDED: &str = "succeeded";

/// Run failed after prior suggestions were already cleared.
pub const RUN_STATUS_FAILED: &str = "failed";

/// A diagnosis run row from the `diagnosis_runs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRun {
    pub id: DbId,
    pub project_id: DbId,
    /// One of {running, succeeded, failed}.
    pub status: String,
    pub overall_score: Option<i32>,
    pub summary: Option<String>,
    pub error: Option<String>,
    pub started_at: Timestamp,
    pub finished_at: Option<Timestamp>,
}
