use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ItemId, StatusChangeId};
use super::status::Status;

/// Immutable audit record of one status transition of one item
///
/// `old_status` is `None` only for the entry written when the item was
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    pub id: StatusChangeId,
    pub item_id: ItemId,
    pub old_status: Option<Status>,
    pub new_status: Status,
    pub timestamp: DateTime<Utc>,
}

impl StatusChange {
    /// Whether this is the initial creation entry
    pub fn is_creation(&self) -> bool {
        self.old_status.is_none()
    }
}

impl std::fmt::Display for StatusChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.old_status {
            Some(old) => write!(f, "<StatusChange {} -> {}>", old, self.new_status),
            None => write!(f, "<StatusChange None -> {}>", self.new_status),
        }
    }
}

/// A status change that has been decided but not yet stored
///
/// Produced by [`record_transition`](crate::rules::transition::record_transition);
/// the store assigns the identity when it writes the row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChangeRecord {
    pub item_id: ItemId,
    pub old_status: Option<Status>,
    pub new_status: Status,
    pub timestamp: DateTime<Utc>,
}

impl StatusChangeRecord {
    /// Attach the identity assigned by the store
    pub fn into_status_change(self, id: StatusChangeId) -> StatusChange {
        StatusChange {
            id,
            item_id: self.item_id,
            old_status: self.old_status,
            new_status: self.new_status,
            timestamp: self.timestamp,
        }
    }
}
