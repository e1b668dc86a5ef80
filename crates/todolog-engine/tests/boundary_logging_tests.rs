// Boundary events emitted by the handlers
//
// Kept to a single test: the capture buffer is process-wide.

use todolog_core::logging_facility::test_capture::init_test_capture;
use todolog_core::TodoRepository;
use todolog_engine::commands::{items, lists};
use todolog_store::SqliteStore;

#[test]
fn test_handlers_log_start_and_end_with_outcome() {
    let capture = init_test_capture();
    let mut repo = SqliteStore::open_in_memory().unwrap();
    let list = repo.create_list("Groceries").unwrap();
    repo.add_item(list, "Milk").unwrap();

    lists::delete_list(&mut repo, list).unwrap();
    items::change_status(&mut repo, todolog_core::ItemId::new(1), "DONE").unwrap();
    lists::delete_list(&mut repo, list).unwrap();

    capture.assert_event_exists("delete_list", "start");
    capture.assert_event_exists("delete_list", "end");

    let ends: Vec<_> = capture
        .events_for_op("delete_list")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some("end"))
        .collect();
    assert_eq!(ends.len(), 2);
    assert_eq!(ends[0].field("outcome"), Some("conflict"));
    assert_eq!(ends[1].field("outcome"), Some("ok"));
    assert!(ends.iter().all(|e| e.field("request_id").is_some()));
    assert!(ends.iter().all(|e| e.field("duration_ms").is_some()));

    let status_events = capture.events_for_op("change_status");
    assert_eq!(status_events.len(), 2);
    assert_eq!(
        status_events[0].field("request_id"),
        status_events[1].field("request_id")
    );
}
