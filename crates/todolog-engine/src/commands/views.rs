//! Read-only views: the index, list detail and item detail

use todolog_core::model::{ItemId, ItemSnapshot, ListId, ListSnapshot, ListSummary};
use todolog_core::ops::TodoRepository;

use super::boundary::Boundary;
use super::outcome::{settle, Outcome, Result};

/// All lists in creation order, with counts
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn list_lists<R>(repo: &R) -> Result<Outcome<Vec<ListSummary>>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("list_lists");
    boundary.close(settle(repo.list_lists()))
}

/// One list and its items
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn show_list<R>(repo: &R, list_id: ListId) -> Result<Outcome<ListSnapshot>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("show_list");
    boundary.close(settle(repo.get_list(list_id)))
}

/// One item and its status history
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn show_item<R>(repo: &R, item_id: ItemId) -> Result<Outcome<ItemSnapshot>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("show_item");
    boundary.close(settle(repo.get_item(item_id)))
}
