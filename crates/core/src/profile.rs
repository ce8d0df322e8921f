//! Validation for venue/artist profile fields.
//!
//! The repository layer trusts its inputs; handlers call these before any
//! insert or update. Database NOT NULL / CHECK constraints remain the
//! backstop for anything that slips past.

use crate::error::CoreError;

/// Maximum length for venue and artist names.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length for a single genre entry.
pub const MAX_GENRE_LEN: usize = 50;

/// Validate an entity name: non-blank and within length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be blank".into()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a genre list: every entry non-blank and within length limit.
///
/// An empty list is valid; genres are optional.
pub fn validate_genres(genres: &[String]) -> Result<(), CoreError> {
    for genre in genres {
        if genre.trim().is_empty() {
            return Err(CoreError::Validation(
                "genre entries must not be blank".into(),
            ));
        }
        if genre.len() > MAX_GENRE_LEN {
            return Err(CoreError::Validation(format!(
                "genre entries must be at most {MAX_GENRE_LEN} characters"
            )));
        }
    }
    Ok(())
}
