//! Item handlers

use serde::Serialize;
use todolog_core::errors::TodoError;
use todolog_core::model::{ItemId, ListId, Status, TodoItem};
use todolog_core::ops::TodoRepository;

use super::boundary::Boundary;
use super::outcome::{settle, Outcome, Result};

/// Result of a change-status request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    /// The item as it is after the request
    pub item: TodoItem,
    /// False when the submitted status was not recognised and ignored
    pub applied: bool,
}

/// Add an item to a list, starting in TODO
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn add_item<R>(repo: &mut R, list_id: ListId, title: &str) -> Result<Outcome<ItemId>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("add_item");
    boundary.close(settle(repo.add_item(list_id, title)))
}

/// Replace an item's title and status
///
/// Unlike [`change_status`], an unrecognised status is reported as
/// `Invalid` (after the item is confirmed to exist).
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn edit_item<R>(
    repo: &mut R,
    item_id: ItemId,
    title: &str,
    status: &str,
) -> Result<Outcome<TodoItem>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("edit_item");
    let result = match status.parse::<Status>() {
        Ok(status) => repo.update_item(item_id, title, status),
        Err(err) => repo
            .get_item(item_id)
            .and_then(|_| Err(TodoError::InvalidStatus { value: err.0 })),
    };
    boundary.close(settle(result))
}

/// Move an item to another status
///
/// An unrecognised status leaves the item untouched and still succeeds,
/// with `applied` set to false.
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn change_status<R>(repo: &mut R, item_id: ItemId, status: &str) -> Result<Outcome<StatusUpdate>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("change_status");
    let applied = status.parse::<Status>().is_ok();
    let result = repo
        .set_item_status(item_id, status)
        .map(|item| StatusUpdate { item, applied });
    boundary.close(settle(result))
}

/// Delete an item and its history, returning the list it belonged to
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn delete_item<R>(repo: &mut R, item_id: ItemId) -> Result<Outcome<ListId>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("delete_item");
    boundary.close(settle(repo.delete_item(item_id)))
}
