use crate::model::Status;

/// Whether a list holding items with these statuses may be deleted
///
/// True iff every status is `DONE`; vacuously true for no items.
pub fn can_delete<I>(statuses: I) -> bool
where
    I: IntoIterator<Item = Status>,
{
    statuses.into_iter().all(|status| status == Status::Done)
}

/// Number of statuses that still block deletion
pub fn open_count<I>(statuses: I) -> usize
where
    I: IntoIterator<Item = Status>,
{
    statuses.into_iter().filter(Status::is_open).count()
}
