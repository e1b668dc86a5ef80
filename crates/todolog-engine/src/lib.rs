//! todolog Engine - command handlers
//!
//! Turns user-facing commands into repository calls and maps the results
//! to typed outcomes. The engine owns boundary logging; the layers below
//! it emit only debug events.

pub mod commands;

pub use commands::dispatch::{dispatch, CommandResult};
pub use commands::outcome::{Outcome, Result};
