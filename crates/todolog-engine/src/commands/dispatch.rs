//! Routes a [`Command`] to its handler

use serde::Serialize;
use todolog_core::commands::Command;
use todolog_core::model::{ItemId, ListId, TodoItem};
use todolog_core::ops::TodoRepository;

use super::items::{self, StatusUpdate};
use super::lists;
use super::messages;
use super::outcome::{Outcome, Result};

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandResult {
    ListCreated { list_id: ListId },
    ItemAdded { list_id: ListId, item_id: ItemId },
    ItemUpdated { item: TodoItem },
    StatusChanged { item: TodoItem, applied: bool },
    ItemDeleted { list_id: ListId, item_id: ItemId },
    ListDeleted { list_id: ListId },
}

impl CommandResult {
    /// Confirmation shown to the user; none for an ignored status change
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CommandResult::ListCreated { .. } => Some(messages::LIST_CREATED),
            CommandResult::ItemAdded { .. } => Some(messages::ITEM_ADDED),
            CommandResult::ItemUpdated { .. } => Some(messages::ITEM_UPDATED),
            CommandResult::StatusChanged { applied: true, .. } => Some(messages::STATUS_UPDATED),
            CommandResult::StatusChanged { applied: false, .. } => None,
            CommandResult::ItemDeleted { .. } => Some(messages::ITEM_DELETED),
            CommandResult::ListDeleted { .. } => Some(messages::LIST_DELETED),
        }
    }

    /// The list to show next
    pub fn list_id(&self) -> ListId {
        match self {
            CommandResult::ListCreated { list_id }
            | CommandResult::ItemAdded { list_id, .. }
            | CommandResult::ItemDeleted { list_id, .. }
            | CommandResult::ListDeleted { list_id } => *list_id,
            CommandResult::ItemUpdated { item } | CommandResult::StatusChanged { item, .. } => {
                item.list_id
            }
        }
    }
}

/// Run one command against `repo`
///
/// # Errors
///
/// Returns `ExError` only for storage failures; rule violations come back
/// as non-`Ok` outcomes.
pub fn dispatch<R>(repo: &mut R, command: Command) -> Result<Outcome<CommandResult>>
where
    R: TodoRepository + ?Sized,
{
    let outcome = match command {
        Command::CreateList { name } => lists::create_list(repo, &name)?
            .map(|list_id| CommandResult::ListCreated { list_id }),
        Command::AddItem { list_id, title } => items::add_item(repo, list_id, &title)?
            .map(|item_id| CommandResult::ItemAdded { list_id, item_id }),
        Command::EditItem {
            item_id,
            title,
            status,
        } => items::edit_item(repo, item_id, &title, &status)?
            .map(|item| CommandResult::ItemUpdated { item }),
        Command::ChangeStatus { item_id, status } => items::change_status(repo, item_id, &status)?
            .map(|StatusUpdate { item, applied }| CommandResult::StatusChanged { item, applied }),
        Command::DeleteItem { item_id } => items::delete_item(repo, item_id)?
            .map(|list_id| CommandResult::ItemDeleted { list_id, item_id }),
        Command::DeleteList { list_id } => {
            lists::delete_list(repo, list_id)?.map(|()| CommandResult::ListDeleted { list_id })
        }
    };
    Ok(outcome)
}
