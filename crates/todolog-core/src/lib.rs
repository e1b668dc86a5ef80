//! todolog core - domain model and rules for multi-list todo tracking
//!
//! This crate provides:
//! - List, item and status-change models
//! - The status transition recorder and the list lifecycle guard
//! - Field validation shared by every store
//! - The `TodoRepository` persistence contract and an in-memory store
//! - The error facility and the structured logging facility

pub mod clock;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::Command;
pub use errors::{ErrorClass, ExError, ExErrorKind, Result, TodoError};
pub use model::{
    ItemId, ItemSnapshot, ListId, ListSnapshot, ListSummary, Status, StatusChange, TodoItem,
    TodoList,
};
pub use ops::{Store, TodoRepository};
