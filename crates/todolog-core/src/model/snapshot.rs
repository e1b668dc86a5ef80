//! Read models handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::item::TodoItem;
use super::list::TodoList;
use super::status_change::StatusChange;
use crate::rules::lifecycle;

/// A list together with its items, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSnapshot {
    pub list: TodoList,
    pub items: Vec<TodoItem>,
}

impl ListSnapshot {
    /// Whether the lifecycle guard currently allows deleting this list
    pub fn can_be_deleted(&self) -> bool {
        lifecycle::can_delete(self.items.iter().map(|item| item.status))
    }
}

/// An item together with its full status history, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub item: TodoItem,
    pub history: Vec<StatusChange>,
}

/// Index row: a list with item counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListSummary {
    pub list: TodoList,
    pub item_count: usize,
    /// Items still TODO or IN_PROGRESS
    pub open_count: usize,
}

impl ListSummary {
    /// Same answer as [`ListSnapshot::can_be_deleted`], from the counts alone
    pub fn can_be_deleted(&self) -> bool {
        self.open_count == 0
    }
}
