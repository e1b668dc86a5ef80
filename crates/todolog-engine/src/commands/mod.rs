//! Command handlers.
//!
//! One handler per action, each generic over `TodoRepository` so the same
//! code drives the SQLite store and the in-memory store.
//!
//! ## Logging Ownership
//!
//! Handlers own lifecycle logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` with an `outcome` field for every typed outcome
//! - `log_op_error!` for infrastructure failures

mod boundary;
pub mod dispatch;
pub mod items;
pub mod lists;
pub mod messages;
pub mod outcome;
pub mod views;
