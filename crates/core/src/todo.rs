//! Todo naming rules and wire-level completion semantics.

use crate::error::CoreError;

/// Entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Todo";

/// A todo name must be strictly longer than this many characters.
pub const MIN_NAME_EXCLUSIVE: usize = 2;

/// Validate the name supplied when creating a todo.
///
/// Length is counted in characters, not bytes. Updates do not go through
/// this check.
pub fn validate_todo_name(name: &str) -> Result<(), CoreError> {
    if name.chars().count() <= MIN_NAME_EXCLUSIVE {
        return Err(CoreError::Validation("name not long enough".to_string()));
    }
    Ok(())
}

/// Collapse the stored tri-state completion flag into the wire boolean.
///
/// An unset flag reads as not completed.
pub fn completed_flag(stored: Option<bool>) -> bool {
    stored.unwrap_or(false)
}
