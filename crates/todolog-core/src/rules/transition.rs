use chrono::{DateTime, Utc};

use crate::model::{ItemId, Status, StatusChangeRecord};

/// Decide whether a status assignment produces an audit entry
///
/// Returns a record when `old` differs from `new`, including item creation
/// (`old = None`). Returns `None` for a no-op assignment. `now` comes from
/// the caller's clock; nothing is persisted here.
pub fn record_transition(
    item_id: ItemId,
    old: Option<Status>,
    new: Status,
    now: DateTime<Utc>,
) -> Option<StatusChangeRecord> {
    if old == Some(new) {
        return None;
    }

    Some(StatusChangeRecord {
        item_id,
        old_status: old,
        new_status: new,
        timestamp: now,
    })
}

/// Timestamp for the next entry in an item's history
///
/// History timestamps never go backwards in append order, even if the
/// wall clock does.
pub fn next_timestamp(latest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match latest {
        Some(latest) if latest > now => latest,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_creation_is_recorded() {
        let record = record_transition(ItemId::new(1), None, Status::Todo, t0()).unwrap();
        assert_eq!(record.old_status, None);
        assert_eq!(record.new_status, Status::Todo);
        assert_eq!(record.timestamp, t0());
    }

    #[test]
    fn test_change_is_recorded() {
        let record =
            record_transition(ItemId::new(1), Some(Status::Todo), Status::Done, t0()).unwrap();
        assert_eq!(record.old_status, Some(Status::Todo));
        assert_eq!(record.new_status, Status::Done);
    }

    #[test]
    fn test_same_status_is_not_recorded() {
        for status in Status::ALL {
            assert!(record_transition(ItemId::new(1), Some(status), status, t0()).is_none());
        }
    }

    #[test]
    fn test_next_timestamp_never_goes_backwards() {
        let later = t0() + Duration::seconds(5);
        assert_eq!(next_timestamp(Some(later), t0()), later);
        assert_eq!(next_timestamp(Some(t0()), later), later);
        assert_eq!(next_timestamp(None, t0()), t0());
    }
}
