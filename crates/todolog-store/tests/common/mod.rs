#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use todolog_core::FixedClock;
use todolog_store::SqliteStore;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
}

/// In-memory store on a clock the test controls
pub fn pinned_store() -> (SqliteStore, FixedClock) {
    let clock = FixedClock::new(t0());
    let store = SqliteStore::open_in_memory()
        .unwrap()
        .with_clock(clock.clone());
    (store, clock)
}

pub fn row_count(store: &SqliteStore, table: &str) -> i64 {
    store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .unwrap()
}
