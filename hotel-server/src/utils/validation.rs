//! Input Validation Helpers
//!
//! Shared length limits and text checks used by the repository layer
//! before anything reaches the store.

use crate::utils::error::{AppError, AppResult};

/// Maximum length for names (guest names, task descriptions)
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length for free-form notes (special requests, feedback comments)
pub const MAX_NOTE_LEN: usize = 500;
/// Maximum length for short text fields (room numbers, categories)
pub const MAX_SHORT_TEXT_LEN: usize = 100;
/// Maximum length for email addresses
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate that a required text field is non-empty and within `max_len`
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum length of {max_len}"
        )));
    }
    Ok(())
}

/// Validate that an optional text field, when present, is within `max_len`
pub fn validate_optional_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum length of {max_len}"
        )));
    }
    Ok(())
}
