use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ItemId, ListId};
use super::status::Status;

/// A trackable task belonging to exactly one list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Store-assigned identity
    pub id: ItemId,

    /// The list that owns this item
    pub list_id: ListId,

    /// Display title (non-empty, at most 200 characters)
    pub title: String,

    /// Current lifecycle status
    pub status: Status,

    /// Timestamp when this item was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a fresh item in the default `TODO` status
    pub fn new(id: ItemId, list_id: ListId, title: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            list_id,
            title,
            status: Status::default(),
            created_at,
        }
    }

    /// Whether the item is finished
    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

impl std::fmt::Display for TodoItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<TodoItem {}>", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_starts_todo() {
        let item = TodoItem::new(ItemId::new(1), ListId::new(1), "Milk".to_string(), Utc::now());
        assert_eq!(item.status, Status::Todo);
        assert!(!item.is_done());
        assert_eq!(item.to_string(), "<TodoItem Milk>");
    }
}
