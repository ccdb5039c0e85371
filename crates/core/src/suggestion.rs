//! Closed vocabularies for suggestions: kind, lifecycle status, and the
//! proposal section a suggestion points at.
//!
//! The model reply and the HTTP surface both speak these values as plain
//! strings, so each enum carries a strict `parse` alongside `as_str`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid suggestion kind values, in display order.
pub const VALID_SUGGESTION_KINDS: &[&str] = &["risk", "improvement", "gap", "citation"];

/// All valid lifecycle status values.
pub const VALID_SUGGESTION_STATUSES: &[&str] = &["pending", "accepted", "rejected"];

/// All valid section labels a suggestion may reference.
pub const VALID_SECTION_LABELS: &[&str] = &["problem", "objectives", "literature", "methodology"];

/// Classification of a single piece of diagnosis feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Critical methodological flaw that could invalidate findings.
    Risk,
    /// A way to make objectives or methods more rigorous.
    Improvement,
    /// Missing theoretical framework or conceptual element.
    Gap,
    /// Relevant foundational literature.
    Citation,
}

impl SuggestionKind {
    /// Parse a kind string from the model reply. Unknown values yield
    /// `None`; the caller drops the entry rather than failing the batch.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "risk" => Some(Self::Risk),
            "improvement" => Some(Self::Improvement),
            "gap" => Some(Self::Gap),
            "citation" => Some(Self::Citation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Improvement => "improvement",
            Self::Gap => "gap",
            Self::Citation => "citation",
        }
    }
}

/// Lifecycle state of a suggestion.
///
/// `Pending` is the initial state; `Accepted` and `Rejected` are terminal
/// decisions for the suggestion's lifetime. A fresh diagnosis run replaces
/// the whole suggestion set instead of resetting individual statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Accepted,
    Rejected,
}

impl SuggestionStatus {
    /// Parse a status string from an API request.
    ///
    /// Unlike kind parsing this is strict: an unrecognized value is a
    /// user error, reported as [`CoreError::InvalidStatus`].
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            other => Err(CoreError::InvalidStatus(format!(
                "Invalid status '{other}'. Must be one of: {}",
                VALID_SUGGESTION_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// Which part of the proposal a suggestion addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Problem,
    Objectives,
    Literature,
    Methodology,
}

impl SectionLabel {
    /// Parse a section label. Unknown labels from the model are coerced to
    /// `None` (stored as NULL, never displayed) rather than rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "problem" => Some(Self::Problem),
            "objectives" => Some(Self::Objectives),
            "literature" => Some(Self::Literature),
            "methodology" => Some(Self::Methodology),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Objectives => "objectives",
            Self::Literature => "literature",
            Self::Methodology => "methodology",
        }
    }
}
