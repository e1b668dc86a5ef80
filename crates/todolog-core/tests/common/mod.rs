use chrono::{DateTime, TimeZone, Utc};
use todolog_core::{FixedClock, ItemId, ListId, Store, TodoRepository};

/// A fixed, millisecond-aligned starting instant
#[allow(dead_code)]
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
}

/// Create an empty Store on a pinned clock, returning the clock handle too
#[allow(dead_code)]
pub fn pinned_store() -> (Store, FixedClock) {
    let clock = FixedClock::new(t0());
    (Store::with_clock(clock.clone()), clock)
}

/// The "Groceries" list with a single "Milk" item
#[allow(dead_code)]
pub fn groceries_with_milk(store: &mut Store) -> (ListId, ItemId) {
    let list_id = store.create_list("Groceries").unwrap();
    let item_id = store.add_item(list_id, "Milk").unwrap();
    (list_id, item_id)
}
