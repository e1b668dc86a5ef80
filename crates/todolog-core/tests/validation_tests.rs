mod common;

use common::pinned_store;
use todolog_core::rules::validation::{
    validate_item_title, validate_list_name, MAX_ITEM_TITLE_LEN, MAX_LIST_NAME_LEN,
};
use todolog_core::{ListId, Status, TodoError, TodoRepository};

#[test]
fn test_list_name_limits() {
    assert!(validate_list_name("Groceries").is_ok());
    assert!(validate_list_name(&"a".repeat(MAX_LIST_NAME_LEN)).is_ok());
    assert!(matches!(
        validate_list_name(&"a".repeat(MAX_LIST_NAME_LEN + 1)),
        Err(TodoError::InvalidName { .. })
    ));
    assert!(matches!(
        validate_list_name(""),
        Err(TodoError::InvalidName { .. })
    ));
    assert!(matches!(
        validate_list_name(" \t\n"),
        Err(TodoError::InvalidName { .. })
    ));
}

#[test]
fn test_control_characters_are_rejected() {
    for name in ["\0Groceries", "Groc\0eries", "Chores\u{7}", "line\nbreak"] {
        assert!(
            matches!(validate_list_name(name), Err(TodoError::InvalidName { .. })),
            "{:?}",
            name
        );
    }
    assert!(matches!(
        validate_item_title("milk\0"),
        Err(TodoError::InvalidTitle { .. })
    ));
    assert!(validate_item_title("crème brûlée").is_ok());
}

#[test]
fn test_title_length_counts_characters_not_bytes() {
    let title = "é".repeat(MAX_ITEM_TITLE_LEN);
    assert!(title.len() > MAX_ITEM_TITLE_LEN);
    assert!(validate_item_title(&title).is_ok());
}

#[test]
fn test_store_rejects_invalid_name_without_creating_list() {
    let (mut store, _clock) = pinned_store();

    let result = store.create_list("");

    assert!(matches!(result, Err(TodoError::InvalidName { .. })));
    assert_eq!(store.list_count(), 0);
}

#[test]
fn test_add_item_checks_list_before_title() {
    let (mut store, _clock) = pinned_store();

    let result = store.add_item(ListId::new(1), "");

    assert!(matches!(result, Err(TodoError::ListNotFound { .. })));
}

#[test]
fn test_add_item_with_long_title_writes_nothing() {
    let (mut store, _clock) = pinned_store();
    let list_id = store.create_list("Groceries").unwrap();

    let result = store.add_item(list_id, &"x".repeat(MAX_ITEM_TITLE_LEN + 1));

    assert!(matches!(result, Err(TodoError::InvalidTitle { .. })));
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.status_change_count(), 0);
}

#[test]
fn test_update_with_invalid_title_keeps_old_state() {
    let (mut store, _clock) = pinned_store();
    let list_id = store.create_list("Groceries").unwrap();
    let item_id = store.add_item(list_id, "Milk").unwrap();

    let result = store.update_item(item_id, "   ", Status::Done);

    assert!(matches!(result, Err(TodoError::InvalidTitle { .. })));
    let snapshot = store.get_item(item_id).unwrap();
    assert_eq!(snapshot.item.title, "Milk");
    assert_eq!(snapshot.item.status, Status::Todo);
    assert_eq!(snapshot.history.len(), 1);
}
