//! Core types shared across todolog crates
//!
//! Foundational pieces used by both the error facility and the logging
//! facility:
//!
//! - **Correlation**: `RequestId`, one per handled command
//! - **Schema constants**: canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
