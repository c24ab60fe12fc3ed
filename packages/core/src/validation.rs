// ABOUTME: Input validation shared across Cookbook packages
// ABOUTME: Tag name validation rules

use thiserror::Error;

/// Maximum length for a tag display name.
pub const MAX_NAME_LEN: usize = 255;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("tag name cannot be empty")]
    EmptyName,
    #[error("tag name cannot exceed {MAX_NAME_LEN} characters")]
    NameTooLong,
}

/// Validate a tag display name.
pub fn validate_tag_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}
