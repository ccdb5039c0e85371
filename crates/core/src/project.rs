//! Validation for project create/update payloads.

use crate::error::CoreError;

/// Maximum length for a project title.
pub const MAX_TITLE_LENGTH: usize = 500;

/// Default status label for a newly created project.
pub const PROJECT_STATUS_DRAFT: &str = "draft";

/// Validate a project title: required, non-blank, bounded length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Project title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project title must not exceed {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an owner identifier: opaque but must be present.
pub fn validate_owner_id(owner_id: &str) -> Result<(), CoreError> {
    if owner_id.trim().is_empty() {
        return Err(CoreError::Validation(
            "Owner id must not be empty".to_string(),
        ));
    }
    Ok(())
}
