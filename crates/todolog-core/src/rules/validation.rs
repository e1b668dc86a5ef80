//! Field rules re-asserted by the core
//!
//! The presentation layer validates forms first; these checks keep the
//! store from accepting bad data from any other caller.

use crate::errors::{Result, TodoError};

/// Maximum list name length, in characters
pub const MAX_LIST_NAME_LEN: usize = 100;

/// Maximum item title length, in characters
pub const MAX_ITEM_TITLE_LEN: usize = 200;

/// Validate a list name
///
/// # Errors
/// `InvalidName` if the name is empty or whitespace-only, contains a
/// control character, or is longer than [`MAX_LIST_NAME_LEN`] characters.
pub fn validate_list_name(name: &str) -> Result<()> {
    check_text(name, MAX_LIST_NAME_LEN).map_err(|reason| TodoError::InvalidName { reason })
}

/// Validate an item title
///
/// # Errors
/// `InvalidTitle` if the title is empty or whitespace-only, contains a
/// control character, or is longer than [`MAX_ITEM_TITLE_LEN`] characters.
pub fn validate_item_title(title: &str) -> Result<()> {
    check_text(title, MAX_ITEM_TITLE_LEN).map_err(|reason| TodoError::InvalidTitle { reason })
}

fn check_text(value: &str, max_len: usize) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("cannot be empty or whitespace-only".to_string());
    }

    // SQLite's length() stops at the first NUL, so the schema CHECKs would
    // measure a different string than we do.
    if value.chars().any(char::is_control) {
        return Err("cannot contain control characters".to_string());
    }

    let len = value.chars().count();
    if len > max_len {
        return Err(format!("must be at most {} characters (got {})", max_len, len));
    }

    Ok(())
}
