//! Persistence contract for lists, items and their status history
//!
//! Implemented by the in-memory [`Store`](super::Store) and by the SQLite
//! store in `todolog-store`. Command handlers only ever see this trait.

use crate::errors::Result;
use crate::model::{ItemId, ItemSnapshot, ListId, ListSnapshot, ListSummary, Status, TodoItem};

/// Entity store for todo lists
///
/// Every mutating method is atomic: it either applies all of its row
/// changes or none of them. Status history is written only by the store,
/// through [`record_transition`](crate::rules::record_transition).
pub trait TodoRepository {
    /// Create an empty list
    ///
    /// # Errors
    /// `InvalidName` if the name is empty or too long.
    fn create_list(&mut self, name: &str) -> Result<ListId>;

    /// Add an item in `TODO` status, together with its creation history entry
    ///
    /// # Errors
    /// `ListNotFound` if the list does not exist, `InvalidTitle` if the title
    /// is empty or too long.
    fn add_item(&mut self, list_id: ListId, title: &str) -> Result<ItemId>;

    /// Replace an item's title and assign its status
    ///
    /// The title is written unconditionally; a history entry is appended
    /// only if the status actually changes.
    ///
    /// # Errors
    /// `ItemNotFound` if the item does not exist, `InvalidTitle` if the
    /// title is empty or too long.
    fn update_item(&mut self, item_id: ItemId, title: &str, status: Status) -> Result<TodoItem>;

    /// Assign an item's status from raw text
    ///
    /// Text that is not `TODO`, `IN_PROGRESS` or `DONE` is ignored: nothing
    /// is written and the unchanged item is returned.
    ///
    /// # Errors
    /// `ItemNotFound` if the item does not exist.
    fn set_item_status(&mut self, item_id: ItemId, status: &str) -> Result<TodoItem>;

    /// Delete an item and its history; returns the owning list id
    ///
    /// # Errors
    /// `ItemNotFound` if the item does not exist.
    fn delete_item(&mut self, item_id: ItemId) -> Result<ListId>;

    /// Delete a list, its items and their history
    ///
    /// # Errors
    /// `ListNotFound` if the list does not exist, `ListHasOpenItems` if any
    /// owned item is not `DONE` (nothing is deleted in that case).
    fn delete_list(&mut self, list_id: ListId) -> Result<()>;

    /// All lists in creation order, with item counts
    ///
    /// # Errors
    /// Storage failures only.
    fn list_lists(&self) -> Result<Vec<ListSummary>>;

    /// A list and its items
    ///
    /// # Errors
    /// `ListNotFound` if the list does not exist.
    fn get_list(&self, list_id: ListId) -> Result<ListSnapshot>;

    /// An item and its status history, oldest first
    ///
    /// # Errors
    /// `ItemNotFound` if the item does not exist.
    fn get_item(&self, item_id: ItemId) -> Result<ItemSnapshot>;
}
