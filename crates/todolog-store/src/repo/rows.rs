//! Row mapping and the statements shared by the repository methods
//!
//! Everything here takes `&Connection` so it runs equally on a bare
//! connection or inside a transaction (which derefs to one).

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use todolog_core::model::{
    ItemId, ListId, ListSummary, Status, StatusChange, StatusChangeId, StatusChangeRecord,
    TodoItem, TodoList,
};

const LIST_COLUMNS: &str = "id, name, created_at";
const ITEM_COLUMNS: &str = "id, list_id, title, status, created_at";
const CHANGE_COLUMNS: &str = "id, item_id, old_status, new_status, timestamp";

fn timestamp_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, millis))
}

fn status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Status> {
    let text: String = row.get(idx)?;
    text.parse::<Status>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn optional_status_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Status>> {
    let text: Option<String> = row.get(idx)?;
    text.map(|t| {
        t.parse::<Status>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    })
    .transpose()
}

fn count_at(row: &Row<'_>, idx: usize) -> rusqlite::Result<usize> {
    let n: i64 = row.get(idx)?;
    usize::try_from(n).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(idx, n))
}

fn list_from_row(row: &Row<'_>) -> rusqlite::Result<TodoList> {
    Ok(TodoList::new(
        ListId::new(row.get(0)?),
        row.get(1)?,
        timestamp_at(row, 2)?,
    ))
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<TodoItem> {
    let mut item = TodoItem::new(
        ItemId::new(row.get(0)?),
        ListId::new(row.get(1)?),
        row.get(2)?,
        timestamp_at(row, 4)?,
    );
    item.status = status_at(row, 3)?;
    Ok(item)
}

fn change_from_row(row: &Row<'_>) -> rusqlite::Result<StatusChange> {
    Ok(StatusChange {
        id: StatusChangeId::new(row.get(0)?),
        item_id: ItemId::new(row.get(1)?),
        old_status: optional_status_at(row, 2)?,
        new_status: status_at(row, 3)?,
        timestamp: timestamp_at(row, 4)?,
    })
}

pub(crate) fn load_list(conn: &Connection, id: ListId) -> rusqlite::Result<Option<TodoList>> {
    conn.query_row(
        &format!("SELECT {LIST_COLUMNS} FROM todo_lists WHERE id = ?1"),
        [id.get()],
        list_from_row,
    )
    .optional()
}

pub(crate) fn load_item(conn: &Connection, id: ItemId) -> rusqlite::Result<Option<TodoItem>> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM todo_items WHERE id = ?1"),
        [id.get()],
        item_from_row,
    )
    .optional()
}

/// Items of a list in insertion order
pub(crate) fn load_items_of(conn: &Connection, list_id: ListId) -> rusqlite::Result<Vec<TodoItem>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS} FROM todo_items WHERE list_id = ?1 ORDER BY id"
    ))?;
    let items = stmt
        .query_map([list_id.get()], item_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(items)
}

/// History of an item in append order
pub(crate) fn load_history(conn: &Connection, item_id: ItemId) -> rusqlite::Result<Vec<StatusChange>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CHANGE_COLUMNS} FROM status_changes WHERE item_id = ?1 ORDER BY id"
    ))?;
    let changes = stmt
        .query_map([item_id.get()], change_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(changes)
}

/// Timestamp of the most recent history entry of an item
pub(crate) fn latest_change_at(
    conn: &Connection,
    item_id: ItemId,
) -> rusqlite::Result<Option<DateTime<Utc>>> {
    conn.query_row(
        "SELECT timestamp FROM status_changes WHERE item_id = ?1 ORDER BY id DESC LIMIT 1",
        [item_id.get()],
        |row| timestamp_at(row, 0),
    )
    .optional()
}

/// All lists with their item and open-item counts, in creation order
pub(crate) fn load_summaries(conn: &Connection) -> rusqlite::Result<Vec<ListSummary>> {
    let mut stmt = conn.prepare(
        "SELECT l.id, l.name, l.created_at,
                COUNT(i.id),
                COALESCE(SUM(CASE WHEN i.status <> 'DONE' THEN 1 ELSE 0 END), 0)
         FROM todo_lists l
         LEFT JOIN todo_items i ON i.list_id = l.id
         GROUP BY l.id
         ORDER BY l.id",
    )?;
    let summaries = stmt
        .query_map([], |row| {
            Ok(ListSummary {
                list: list_from_row(row)?,
                item_count: count_at(row, 3)?,
                open_count: count_at(row, 4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(summaries)
}

pub(crate) fn insert_status_change(
    conn: &Connection,
    record: &StatusChangeRecord,
) -> rusqlite::Result<StatusChangeId> {
    conn.execute(
        "INSERT INTO status_changes (item_id, old_status, new_status, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            record.item_id.get(),
            record.old_status.as_ref().map(Status::as_str),
            record.new_status.as_str(),
            record.timestamp.timestamp_millis(),
        ],
    )?;
    Ok(StatusChangeId::new(conn.last_insert_rowid()))
}
