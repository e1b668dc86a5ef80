pub mod ids;
pub mod item;
pub mod list;
pub mod snapshot;
pub mod status;
pub mod status_change;

pub use ids::{ItemId, ListId, StatusChangeId};
pub use item::TodoItem;
pub use list::TodoList;
pub use snapshot::{ItemSnapshot, ListSnapshot, ListSummary};
pub use status::{ParseStatusError, Status};
pub use status_change::{StatusChange, StatusChangeRecord};
