//! Tagged handler outcomes

use serde::Serialize;
use todolog_core::errors::{ErrorClass, ExError, TodoError};
use todolog_core_types::schema::{OUTCOME_CONFLICT, OUTCOME_INVALID, OUTCOME_NOT_FOUND, OUTCOME_OK};

use super::messages;

/// Result type for handlers: `Err` is reserved for infrastructure failures
pub type Result<T> = std::result::Result<T, ExError>;

/// What a handler produced
///
/// Everything except success is a typed outcome, not an error: nothing
/// was written and the caller decides how to present it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ok(T),
    NotFound(String),
    Invalid(String),
    Conflict(String),
}

impl<T> Outcome<T> {
    /// Value logged in the `outcome` field
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Ok(_) => OUTCOME_OK,
            Outcome::NotFound(_) => OUTCOME_NOT_FOUND,
            Outcome::Invalid(_) => OUTCOME_INVALID,
            Outcome::Conflict(_) => OUTCOME_CONFLICT,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// The success value, if any
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::NotFound(reason) => Outcome::NotFound(reason),
            Outcome::Invalid(reason) => Outcome::Invalid(reason),
            Outcome::Conflict(reason) => Outcome::Conflict(reason),
        }
    }
}

/// Fold a repository result into an outcome
///
/// # Errors
///
/// Infrastructure-class errors are returned as `ExError`.
pub fn settle<T>(result: std::result::Result<T, TodoError>) -> Result<Outcome<T>> {
    let err = match result {
        Ok(value) => return Ok(Outcome::Ok(value)),
        Err(err) => err,
    };

    match err.class() {
        ErrorClass::Validation => Ok(Outcome::Invalid(err.to_string())),
        ErrorClass::NotFound => Ok(Outcome::NotFound(err.to_string())),
        ErrorClass::Conflict => Ok(Outcome::Conflict(messages::LIST_HAS_OPEN_ITEMS.to_string())),
        ErrorClass::Infrastructure => Err(err.into()),
    }
}
