//! SQLite implementation of `TodoRepository`
//!
//! Every write runs in a single `BEGIN IMMEDIATE` transaction: the write
//! lock is taken before the existence and guard checks are read, so two
//! processes cannot both pass a check and then interleave their writes.
//! Any error drops the transaction, which rolls it back.

use std::sync::Arc;

use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use todolog_core::clock::{Clock, SystemClock};
use todolog_core::errors::{Result as TodoResult, TodoError};
use todolog_core::model::{
    ItemId, ItemSnapshot, ListId, ListSnapshot, ListSummary, Status, TodoItem,
};
use todolog_core::ops::TodoRepository;
use todolog_core::rules::{lifecycle, transition, validation};

use crate::db::{self, StoreConfig};
use crate::errors::{persistence, Result};
use crate::migrations::apply_migrations;
use crate::repo::rows;

/// Durable entity store backed by a SQLite connection
pub struct SqliteStore {
    conn: Connection,
    clock: Arc<dyn Clock>,
}

impl SqliteStore {
    /// Open (creating if needed) the database described by `config`
    /// and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Returns an IO error if the database directory cannot be created,
    /// or a persistence error if opening or migrating fails.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = db::open_configured(config)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the schema cannot be applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        db::configure(
            &conn,
            &StoreConfig {
                wal: false,
                ..StoreConfig::default()
            },
        )?;
        Self::from_connection(conn)
    }

    /// Wrap an already configured connection, applying pending migrations
    ///
    /// # Errors
    ///
    /// Returns a persistence error if a migration fails or a recorded
    /// migration checksum no longer matches.
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// The underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

fn begin(conn: &mut Connection) -> TodoResult<Transaction<'_>> {
    conn.transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(persistence)
}

/// Deferred transaction so multi-statement reads see one snapshot
fn begin_read(conn: &Connection) -> TodoResult<Transaction<'_>> {
    conn.unchecked_transaction().map_err(persistence)
}

fn require_list(conn: &Connection, list_id: ListId) -> TodoResult<()> {
    match rows::load_list(conn, list_id).map_err(persistence)? {
        Some(_) => Ok(()),
        None => Err(TodoError::ListNotFound { list_id }),
    }
}

fn require_item(conn: &Connection, item_id: ItemId) -> TodoResult<TodoItem> {
    rows::load_item(conn, item_id)
        .map_err(persistence)?
        .ok_or(TodoError::ItemNotFound { item_id })
}

/// Move `item` to `status`, appending a history entry when it changes
fn assign_status(
    conn: &Connection,
    clock: &dyn Clock,
    mut item: TodoItem,
    status: Status,
) -> TodoResult<TodoItem> {
    let latest = rows::latest_change_at(conn, item.id).map_err(persistence)?;
    let now = transition::next_timestamp(latest, clock.now());

    if let Some(record) = transition::record_transition(item.id, Some(item.status), status, now) {
        rows::insert_status_change(conn, &record).map_err(persistence)?;
        conn.execute(
            "UPDATE todo_items SET status = ?1 WHERE id = ?2",
            params![status.as_str(), item.id.get()],
        )
        .map_err(persistence)?;
        tracing::debug!(
            item_id = %item.id,
            old_status = %item.status,
            new_status = %status,
            "status change recorded"
        );
    }

    item.status = status;
    Ok(item)
}

impl TodoRepository for SqliteStore {
    fn create_list(&mut self, name: &str) -> TodoResult<ListId> {
        validation::validate_list_name(name)?;

        let tx = begin(&mut self.conn)?;
        tx.execute(
            "INSERT INTO todo_lists (name, created_at) VALUES (?1, ?2)",
            params![name, self.clock.now().timestamp_millis()],
        )
        .map_err(persistence)?;
        let id = ListId::new(tx.last_insert_rowid());
        tx.commit().map_err(persistence)?;

        Ok(id)
    }

    fn add_item(&mut self, list_id: ListId, title: &str) -> TodoResult<ItemId> {
        let tx = begin(&mut self.conn)?;
        require_list(&tx, list_id)?;
        validation::validate_item_title(title)?;

        let now = self.clock.now();
        let initial = Status::default();
        tx.execute(
            "INSERT INTO todo_items (list_id, title, status, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![list_id.get(), title, initial.as_str(), now.timestamp_millis()],
        )
        .map_err(persistence)?;
        let id = ItemId::new(tx.last_insert_rowid());

        if let Some(record) = transition::record_transition(id, None, initial, now) {
            rows::insert_status_change(&tx, &record).map_err(persistence)?;
        }
        tx.commit().map_err(persistence)?;

        Ok(id)
    }

    fn update_item(&mut self, item_id: ItemId, title: &str, status: Status) -> TodoResult<TodoItem> {
        let tx = begin(&mut self.conn)?;
        let mut item = require_item(&tx, item_id)?;
        validation::validate_item_title(title)?;

        tx.execute(
            "UPDATE todo_items SET title = ?1 WHERE id = ?2",
            params![title, item_id.get()],
        )
        .map_err(persistence)?;
        item.title = title.to_string();

        let item = assign_status(&tx, self.clock.as_ref(), item, status)?;
        tx.commit().map_err(persistence)?;

        Ok(item)
    }

    fn set_item_status(&mut self, item_id: ItemId, status: &str) -> TodoResult<TodoItem> {
        let tx = begin(&mut self.conn)?;
        let item = require_item(&tx, item_id)?;

        let status = match status.parse::<Status>() {
            Ok(status) => status,
            Err(err) => {
                tracing::debug!(item_id = %item_id, error = %err, "ignoring status assignment");
                return Ok(item);
            }
        };

        let item = assign_status(&tx, self.clock.as_ref(), item, status)?;
        tx.commit().map_err(persistence)?;

        Ok(item)
    }

    fn delete_item(&mut self, item_id: ItemId) -> TodoResult<ListId> {
        let tx = begin(&mut self.conn)?;
        let item = require_item(&tx, item_id)?;

        tx.execute(
            "DELETE FROM status_changes WHERE item_id = ?1",
            [item_id.get()],
        )
        .map_err(persistence)?;
        tx.execute("DELETE FROM todo_items WHERE id = ?1", [item_id.get()])
            .map_err(persistence)?;
        tx.commit().map_err(persistence)?;

        Ok(item.list_id)
    }

    fn delete_list(&mut self, list_id: ListId) -> TodoResult<()> {
        let tx = begin(&mut self.conn)?;
        require_list(&tx, list_id)?;

        let items = rows::load_items_of(&tx, list_id).map_err(persistence)?;
        if !lifecycle::can_delete(items.iter().map(|item| item.status)) {
            return Err(TodoError::ListHasOpenItems {
                list_id,
                open_count: lifecycle::open_count(items.iter().map(|item| item.status)),
            });
        }

        tx.execute(
            "DELETE FROM status_changes
             WHERE item_id IN (SELECT id FROM todo_items WHERE list_id = ?1)",
            [list_id.get()],
        )
        .map_err(persistence)?;
        tx.execute("DELETE FROM todo_items WHERE list_id = ?1", [list_id.get()])
            .map_err(persistence)?;
        tx.execute("DELETE FROM todo_lists WHERE id = ?1", [list_id.get()])
            .map_err(persistence)?;
        tx.commit().map_err(persistence)?;

        tracing::debug!(list_id = %list_id, items = items.len(), "list cascade deleted");
        Ok(())
    }

    fn list_lists(&self) -> TodoResult<Vec<ListSummary>> {
        rows::load_summaries(&self.conn).map_err(persistence)
    }

    fn get_list(&self, list_id: ListId) -> TodoResult<ListSnapshot> {
        let tx = begin_read(&self.conn)?;
        let list = rows::load_list(&tx, list_id)
            .map_err(persistence)?
            .ok_or(TodoError::ListNotFound { list_id })?;
        let items = rows::load_items_of(&tx, list_id).map_err(persistence)?;
        tx.commit().map_err(persistence)?;
        Ok(ListSnapshot { list, items })
    }

    fn get_item(&self, item_id: ItemId) -> TodoResult<ItemSnapshot> {
        let tx = begin_read(&self.conn)?;
        let item = require_item(&tx, item_id)?;
        let history = rows::load_history(&tx, item_id).map_err(persistence)?;
        tx.commit().map_err(persistence)?;
        Ok(ItemSnapshot { item, history })
    }
}
