//! Status history behaviour of the in-memory store
//!
//! Covers the initial entry on item creation, one entry per effective
//! change, and nothing for no-op assignments.

mod common;

use chrono::Duration;
use common::{groceries_with_milk, pinned_store, t0};
use todolog_core::{Status, TodoRepository};

#[test]
fn test_item_creation_writes_single_initial_entry() {
    let (mut store, _clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    let snapshot = store.get_item(item_id).unwrap();
    assert_eq!(snapshot.item.status, Status::Todo);
    assert_eq!(snapshot.history.len(), 1);

    let initial = &snapshot.history[0];
    assert!(initial.is_creation());
    assert_eq!(initial.old_status, None);
    assert_eq!(initial.new_status, Status::Todo);
    assert_eq!(initial.timestamp, t0());
}

#[test]
fn test_status_change_appends_entry_with_previous_value() {
    let (mut store, clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    clock.advance(Duration::minutes(5));
    let item = store.set_item_status(item_id, "IN_PROGRESS").unwrap();
    assert_eq!(item.status, Status::InProgress);

    let history = store.get_item(item_id).unwrap().history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].old_status, Some(Status::Todo));
    assert_eq!(history[1].new_status, Status::InProgress);
    assert_eq!(history[1].timestamp, t0() + Duration::minutes(5));
}

#[test]
fn test_same_status_twice_appends_nothing() {
    let (mut store, _clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    store.set_item_status(item_id, "TODO").unwrap();
    store.set_item_status(item_id, "TODO").unwrap();

    assert_eq!(store.status_changes_for(item_id).len(), 1);
}

#[test]
fn test_unknown_status_text_is_ignored() {
    let (mut store, _clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    for junk in ["", "done", "IN PROGRESS", "ARCHIVED"] {
        let item = store.set_item_status(item_id, junk).unwrap();
        assert_eq!(item.status, Status::Todo);
    }

    assert_eq!(store.status_changes_for(item_id).len(), 1);
}

#[test]
fn test_update_item_writes_title_even_without_status_change() {
    let (mut store, _clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    let item = store
        .update_item(item_id, "Oat milk", Status::Todo)
        .unwrap();

    assert_eq!(item.title, "Oat milk");
    assert_eq!(store.status_changes_for(item_id).len(), 1);
}

#[test]
fn test_update_item_logs_status_change() {
    let (mut store, _clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    store
        .update_item(item_id, "Milk", Status::Done)
        .unwrap();

    let history = store.get_item(item_id).unwrap().history;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].old_status, Some(Status::Todo));
    assert_eq!(history[1].new_status, Status::Done);
}

#[test]
fn test_history_timestamps_do_not_go_backwards() {
    let (mut store, clock) = pinned_store();
    let (_, item_id) = groceries_with_milk(&mut store);

    clock.advance(Duration::seconds(-30));
    store.set_item_status(item_id, "DONE").unwrap();

    let history = store.get_item(item_id).unwrap().history;
    assert_eq!(history[1].timestamp, history[0].timestamp);
}
