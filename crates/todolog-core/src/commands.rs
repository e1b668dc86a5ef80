//! Command inventory
//!
//! One variant per user-facing action. Commands are plain data; the
//! engine's `dispatch` routes each one to its handler. Status fields carry
//! the raw submitted text so that handlers decide how malformed values are
//! treated.

use serde::{Deserialize, Serialize};

use crate::model::{ItemId, ListId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Create a new, empty list
    CreateList { name: String },

    /// Add an item to a list
    AddItem { list_id: ListId, title: String },

    /// Replace an item's title and status together
    EditItem {
        item_id: ItemId,
        title: String,
        status: String,
    },

    /// Move an item to another status; unknown values are ignored
    ChangeStatus { item_id: ItemId, status: String },

    /// Delete an item and its history
    DeleteItem { item_id: ItemId },

    /// Delete a list whose items are all DONE
    DeleteList { list_id: ListId },
}

impl Command {
    /// Stable operation name used in log events
    pub fn op(&self) -> &'static str {
        match self {
            Command::CreateList { .. } => "create_list",
            Command::AddItem { .. } => "add_item",
            Command::EditItem { .. } => "edit_item",
            Command::ChangeStatus { .. } => "change_status",
            Command::DeleteItem { .. } => "delete_item",
            Command::DeleteList { .. } => "delete_list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_change_status() {
        let cmd = Command::ChangeStatus {
            item_id: ItemId::new(3),
            status: "DONE".to_string(),
        };

        match cmd {
            Command::ChangeStatus { item_id, status } => {
                assert_eq!(item_id, ItemId::new(3));
                assert_eq!(status, "DONE");
            }
            _ => panic!("Wrong command variant"),
        }
    }

    #[test]
    fn test_command_ops_are_distinct() {
        let cmds = [
            Command::CreateList {
                name: "a".to_string(),
            },
            Command::AddItem {
                list_id: ListId::new(1),
                title: "b".to_string(),
            },
            Command::EditItem {
                item_id: ItemId::new(1),
                title: "c".to_string(),
                status: "TODO".to_string(),
            },
            Command::ChangeStatus {
                item_id: ItemId::new(1),
                status: "TODO".to_string(),
            },
            Command::DeleteItem {
                item_id: ItemId::new(1),
            },
            Command::DeleteList {
                list_id: ListId::new(1),
            },
        ];
        let mut ops: Vec<_> = cmds.iter().map(Command::op).collect();
        ops.sort_unstable();
        ops.dedup();
        assert_eq!(ops.len(), cmds.len());
    }

    #[test]
    fn test_command_json_shape() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"delete_list","list_id":4}"#).unwrap();
        assert_eq!(
            cmd,
            Command::DeleteList {
                list_id: ListId::new(4)
            }
        );
    }
}
