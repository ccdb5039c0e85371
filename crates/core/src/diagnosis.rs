//! Defensive decoding of the model's diagnosis reply.
//!
//! The model is instructed to return a JSON object with `suggestions`,
//! `overallScore`, and `summary`, but its reply is untrusted free-form
//! text. This module decodes it into a loosely-typed `serde_json::Value`
//! first and then coerces it into strict domain records, dropping or
//! defaulting anything that fails the closed-enum or range checks. A
//! single malformed entry never voids the rest of the batch.

use serde_json::Value;

use crate::suggestion::{SectionLabel, SuggestionKind};

/// Summary used when the reply is unusable or carries no summary.
pub const FALLBACK_SUMMARY: &str = "Analysis complete";

/// Score used when the reply carries no numeric `overallScore`.
pub const FALLBACK_SCORE: i32 = 50;

/// A validated suggestion extracted from the model reply, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionDraft {
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    pub rationale: String,
    pub section: Option<SectionLabel>,
}

/// The sanitized result of one diagnosis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosisOutcome {
    pub suggestions: Vec<SuggestionDraft>,
    /// Always within [0, 100].
    pub overall_score: i32,
    pub summary: String,
}

impl DiagnosisOutcome {
    /// Outcome for a reply that could not be decoded at all.
    fn fallback() -> Self {
        Self {
            suggestions: Vec::new(),
            overall_score: FALLBACK_SCORE,
            summary: FALLBACK_SUMMARY.to_string(),
        }
    }
}

/// Clamp a score into [0, 100].
pub fn clamp_score(score: i64) -> i32 {
    score.clamp(0, 100) as i32
}

/// Decode and sanitize a raw model reply.
///
/// Never fails: invalid JSON or a non-object top level yields the fallback
/// outcome (no suggestions, score 50, generic summary). A numeric score of
/// 0 is preserved as 0, not treated as absent.
pub fn parse_reply(raw: &str) -> DiagnosisOutcome {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => return DiagnosisOutcome::fallback(),
    };
    let Some(object) = value.as_object() else {
        return DiagnosisOutcome::fallback();
    };

    let suggestions = object
        .get("suggestions")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(parse_suggestion).collect())
        .unwrap_or_default();

    let overall_score = match object.get("overallScore") {
        Some(score) => coerce_score(score),
        None => FALLBACK_SCORE,
    };

    let summary = object
        .get("summary")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_SUMMARY)
        .to_string();

    DiagnosisOutcome {
        suggestions,
        overall_score,
        summary,
    }
}

/// Coerce a JSON score value into a clamped integer, defaulting to 50 for
/// anything non-numeric.
fn coerce_score(value: &Value) -> i32 {
    if let Some(score) = value.as_i64() {
        clamp_score(score)
    } else if let Some(score) = value.as_f64() {
        clamp_score(score.round() as i64)
    } else {
        FALLBACK_SCORE
    }
}

/// Validate one suggestion entry.
///
/// Dropped entirely (returns `None`) when the entry is not an object, its
/// `type` is outside the closed set, or its `title` is missing or blank.
/// `description` and `rationale` default to empty strings; unknown
/// `section` labels are coerced to `None`.
fn parse_suggestion(entry: &Value) -> Option<SuggestionDraft> {
    let object = entry.as_object()?;

    let kind = object
        .get("type")
        .and_then(Value::as_str)
        .and_then(SuggestionKind::parse)?;

    let title = object
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())?
        .to_string();

    let text_field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let section = object
        .get("section")
        .and_then(Value::as_str)
        .and_then(SectionLabel::parse);

    Some(SuggestionDraft {
        kind,
        title,
        description: text_field("description"),
        rationale: text_field("rationale"),
        section,
    })
}
