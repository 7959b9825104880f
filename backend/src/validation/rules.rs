//! Common validation rules shared across query parameters.

use validator::ValidationError;

/// Validates the free-text city used to localise trip suggestions.
///
/// Requirements:
/// - 1-100 characters after trimming
/// - Letters, digits, spaces and `.,'-` only
pub fn validate_location(location: &str) -> Result<(), ValidationError> {
    let trimmed = location.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 100 {
        return Err(ValidationError::new("location_invalid_length"));
    }

    let allowed = |c: char| c.is_alphanumeric() || c == ' ' || ".,'-".contains(c);
    if !trimmed.chars().all(allowed) {
        return Err(ValidationError::new("location_invalid_characters"));
    }

    Ok(())
}
