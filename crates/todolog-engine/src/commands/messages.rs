//! User-facing result messages

pub const LIST_CREATED: &str = "List created successfully!";
pub const ITEM_ADDED: &str = "Item added successfully!";
pub const ITEM_UPDATED: &str = "Item updated successfully!";
pub const STATUS_UPDATED: &str = "Status updated successfully!";
pub const ITEM_DELETED: &str = "Item deleted successfully!";
pub const LIST_DELETED: &str = "List deleted successfully!";
pub const LIST_HAS_OPEN_ITEMS: &str = "Cannot delete list with TODO or IN PROGRESS items!";
