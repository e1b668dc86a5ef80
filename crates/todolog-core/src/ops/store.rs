use std::collections::BTreeMap;
use std::sync::Arc;

use super::repository::TodoRepository;
use crate::clock::{Clock, SystemClock};
use crate::errors::{Result, TodoError};
use crate::model::{
    ItemId, ItemSnapshot, ListId, ListSnapshot, ListSummary, Status, StatusChange,
    StatusChangeId, TodoItem, TodoList,
};
use crate::rules::{lifecycle, transition, validation};

/// In-memory entity store
///
/// BTreeMap-based; ids are handed out from per-table counters, so key
/// order is insertion order. Not thread-safe, designed for single-threaded
/// use and for tests. Every operation finishes all of its checks before its
/// first mutation, which makes each one all-or-nothing.
#[derive(Clone)]
pub struct Store {
    pub(crate) lists: BTreeMap<ListId, TodoList>,
    pub(crate) items: BTreeMap<ItemId, TodoItem>,
    pub(crate) changes: BTreeMap<StatusChangeId, StatusChange>,
    next_list_id: i64,
    next_item_id: i64,
    next_change_id: i64,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Create a new empty Store on the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a new empty Store reading time from `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            lists: BTreeMap::new(),
            items: BTreeMap::new(),
            changes: BTreeMap::new(),
            next_list_id: 1,
            next_item_id: 1,
            next_change_id: 1,
            clock: Arc::new(clock),
        }
    }

    /// Get a list by ID
    ///
    /// # Errors
    ///
    /// Returns `ListNotFound` if the list doesn't exist.
    pub fn get_list_ref(&self, id: ListId) -> Result<&TodoList> {
        self.lists
            .get(&id)
            .ok_or(TodoError::ListNotFound { list_id: id })
    }

    /// Get an item by ID
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the item doesn't exist.
    pub fn get_item_ref(&self, id: ItemId) -> Result<&TodoItem> {
        self.items
            .get(&id)
            .ok_or(TodoError::ItemNotFound { item_id: id })
    }

    /// Items owned by a list, in insertion order
    pub fn items_of(&self, list_id: ListId) -> Vec<&TodoItem> {
        self.items
            .values()
            .filter(|item| item.list_id == list_id)
            .collect()
    }

    /// History entries of an item, in append order
    pub fn status_changes_for(&self, item_id: ItemId) -> Vec<&StatusChange> {
        self.changes
            .values()
            .filter(|change| change.item_id == item_id)
            .collect()
    }

    /// Total number of lists
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Total number of items across all lists
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total number of history entries across all items
    pub fn status_change_count(&self) -> usize {
        self.changes.len()
    }

    fn allocate(counter: &mut i64) -> i64 {
        let id = *counter;
        *counter += 1;
        id
    }

    /// Append a history entry if `new` differs from `old`
    fn record(&mut self, item_id: ItemId, old: Option<Status>, new: Status) {
        let latest = self
            .status_changes_for(item_id)
            .last()
            .map(|change| change.timestamp);
        let now = transition::next_timestamp(latest, self.clock.now());

        if let Some(record) = transition::record_transition(item_id, old, new, now) {
            let id = StatusChangeId::new(Self::allocate(&mut self.next_change_id));
            tracing::debug!(
                item_id = %item_id,
                old_status = ?record.old_status,
                new_status = %record.new_status,
                "status change recorded"
            );
            self.changes.insert(id, record.into_status_change(id));
        }
    }

    fn assign_status(&mut self, item_id: ItemId, status: Status) -> Result<TodoItem> {
        let old = self.get_item_ref(item_id)?.status;
        self.record(item_id, Some(old), status);

        let item = self
            .items
            .get_mut(&item_id)
            .ok_or(TodoError::ItemNotFound { item_id })?;
        item.status = status;
        Ok(item.clone())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("lists", &self.lists)
            .field("items", &self.items)
            .field("changes", &self.changes)
            .finish_non_exhaustive()
    }
}

impl TodoRepository for Store {
    fn create_list(&mut self, name: &str) -> Result<ListId> {
        validation::validate_list_name(name)?;

        let id = ListId::new(Self::allocate(&mut self.next_list_id));
        let list = TodoList::new(id, name.to_string(), self.clock.now());
        self.lists.insert(id, list);

        Ok(id)
    }

    fn add_item(&mut self, list_id: ListId, title: &str) -> Result<ItemId> {
        self.get_list_ref(list_id)?;
        validation::validate_item_title(title)?;

        let id = ItemId::new(Self::allocate(&mut self.next_item_id));
        let item = TodoItem::new(id, list_id, title.to_string(), self.clock.now());
        let initial = item.status;
        self.items.insert(id, item);
        self.record(id, None, initial);

        Ok(id)
    }

    fn update_item(&mut self, item_id: ItemId, title: &str, status: Status) -> Result<TodoItem> {
        self.get_item_ref(item_id)?;
        validation::validate_item_title(title)?;

        if let Some(item) = self.items.get_mut(&item_id) {
            item.title = title.to_string();
        }
        self.assign_status(item_id, status)
    }

    fn set_item_status(&mut self, item_id: ItemId, status: &str) -> Result<TodoItem> {
        let current = self.get_item_ref(item_id)?.clone();

        match status.parse::<Status>() {
            Ok(status) => self.assign_status(item_id, status),
            Err(err) => {
                tracing::debug!(item_id = %item_id, error = %err, "ignoring status assignment");
                Ok(current)
            }
        }
    }

    fn delete_item(&mut self, item_id: ItemId) -> Result<ListId> {
        let list_id = self.get_item_ref(item_id)?.list_id;

        self.changes.retain(|_, change| change.item_id != item_id);
        self.items.remove(&item_id);

        Ok(list_id)
    }

    fn delete_list(&mut self, list_id: ListId) -> Result<()> {
        self.get_list_ref(list_id)?;

        let statuses: Vec<Status> = self.items_of(list_id).iter().map(|i| i.status).collect();
        if !lifecycle::can_delete(statuses.iter().copied()) {
            return Err(TodoError::ListHasOpenItems {
                list_id,
                open_count: lifecycle::open_count(statuses),
            });
        }

        let owned: Vec<ItemId> = self.items_of(list_id).iter().map(|i| i.id).collect();
        self.changes
            .retain(|_, change| !owned.contains(&change.item_id));
        self.items.retain(|_, item| item.list_id != list_id);
        self.lists.remove(&list_id);

        tracing::debug!(list_id = %list_id, items = owned.len(), "list cascade deleted");
        Ok(())
    }

    fn list_lists(&self) -> Result<Vec<ListSummary>> {
        Ok(self
            .lists
            .values()
            .map(|list| {
                let statuses: Vec<Status> =
                    self.items_of(list.id).iter().map(|i| i.status).collect();
                ListSummary {
                    list: list.clone(),
                    item_count: statuses.len(),
                    open_count: lifecycle::open_count(statuses),
                }
            })
            .collect())
    }

    fn get_list(&self, list_id: ListId) -> Result<ListSnapshot> {
        let list = self.get_list_ref(list_id)?.clone();
        let items = self.items_of(list_id).into_iter().cloned().collect();
        Ok(ListSnapshot { list, items })
    }

    fn get_item(&self, item_id: ItemId) -> Result<ItemSnapshot> {
        let item = self.get_item_ref(item_id)?.clone();
        let history = self
            .status_changes_for(item_id)
            .into_iter()
            .cloned()
            .collect();
        Ok(ItemSnapshot { item, history })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert_eq!(store.list_count(), 0);
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.status_change_count(), 0);
    }

    #[test]
    fn test_ids_are_assigned_in_order() {
        let mut store = Store::new();
        let a = store.create_list("A").unwrap();
        let b = store.create_list("B").unwrap();
        assert_eq!(a, ListId::new(1));
        assert_eq!(b, ListId::new(2));
    }

    #[test]
    fn test_get_nonexistent_list() {
        let store = Store::new();
        assert_eq!(
            store.get_list_ref(ListId::new(5)),
            Err(TodoError::ListNotFound {
                list_id: ListId::new(5)
            })
        );
    }

    #[test]
    fn test_failed_add_leaves_counters_untouched() {
        let mut store = Store::new();
        let list = store.create_list("Groceries").unwrap();

        assert!(store.add_item(list, "").is_err());
        let id = store.add_item(list, "Milk").unwrap();

        assert_eq!(id, ItemId::new(1));
        assert_eq!(store.status_change_count(), 1);
    }
}
