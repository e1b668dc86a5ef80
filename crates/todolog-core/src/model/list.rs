use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ListId;

/// A named container of items
///
/// Items are not embedded here; a list with its items is a
/// [`ListSnapshot`](super::ListSnapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Store-assigned identity
    pub id: ListId,

    /// Display name (non-empty, at most 100 characters)
    pub name: String,

    /// Timestamp when this list was created
    pub created_at: DateTime<Utc>,
}

impl TodoList {
    /// Create a list value with the given identity and name
    pub fn new(id: ListId, name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }
}

impl std::fmt::Display for TodoList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<TodoList {}>", self.name)
    }
}
