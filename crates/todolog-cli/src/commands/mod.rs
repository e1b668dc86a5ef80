//! Subcommand implementations
//!
//! Every subcommand returns the process exit code.

pub mod item;
pub mod list;
pub mod lists;

use todolog_core::commands::Command;
use todolog_core::model::ListId;
use todolog_engine::commands::views;
use todolog_engine::{dispatch, CommandResult, Outcome};
use todolog_store::SqliteStore;

use crate::render;

pub type CliResult = Result<i32, Box<dyn std::error::Error>>;

pub const EXIT_OK: i32 = 0;
pub const EXIT_NOT_FOUND: i32 = 2;
pub const EXIT_INVALID: i32 = 3;
pub const EXIT_CONFLICT: i32 = 4;

/// What every subcommand needs: the store and the output mode
pub struct Context {
    pub store: SqliteStore,
    pub json: bool,
}

impl Context {
    pub fn new(store: SqliteStore, json: bool) -> Self {
        Self { store, json }
    }
}

/// Print the reason for a non-success outcome and pick its exit code
fn fail<T>(outcome: &Outcome<T>) -> i32 {
    match outcome {
        Outcome::Ok(_) => EXIT_OK,
        Outcome::NotFound(reason) => {
            eprintln!("Not found: {}", reason);
            EXIT_NOT_FOUND
        }
        Outcome::Invalid(reason) => {
            eprintln!("Invalid: {}", reason);
            EXIT_INVALID
        }
        Outcome::Conflict(reason) => {
            eprintln!("{}", reason);
            EXIT_CONFLICT
        }
    }
}

/// Print a read-only view
fn show<T, F>(ctx: &Context, outcome: Outcome<T>, render: F) -> CliResult
where
    T: serde::Serialize,
    F: FnOnce(&T) -> String,
{
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    match outcome {
        Outcome::Ok(value) => {
            if !ctx.json {
                print!("{}", render(&value));
            }
            Ok(EXIT_OK)
        }
        other => Ok(fail(&other)),
    }
}

/// Run a command, report it, then show the list it touched (or the index
/// when the list itself is gone)
fn run(ctx: &mut Context, command: Command) -> CliResult {
    let outcome = dispatch(&mut ctx.store, command)?;

    if ctx.json {
        let mut value = serde_json::to_value(&outcome)?;
        if let (Some(message), Some(map)) = (
            outcome.clone().ok().and_then(|r| r.message()),
            value.as_object_mut(),
        ) {
            map.insert("message".to_string(), message.into());
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(fail(&outcome));
    }

    let result = match outcome {
        Outcome::Ok(result) => result,
        other => return Ok(fail(&other)),
    };

    if let Some(message) = result.message() {
        println!("{}", message);
    }
    match result {
        CommandResult::ListDeleted { .. } => redirect_index(ctx),
        other => redirect_list(ctx, other.list_id()),
    }
}

fn redirect_index(ctx: &Context) -> CliResult {
    if let Outcome::Ok(summaries) = views::list_lists(&ctx.store)? {
        print!("{}", render::lists(&summaries));
    }
    Ok(EXIT_OK)
}

fn redirect_list(ctx: &Context, list_id: ListId) -> CliResult {
    if let Outcome::Ok(snapshot) = views::show_list(&ctx.store, list_id)? {
        print!("{}", render::list(&snapshot));
    }
    Ok(EXIT_OK)
}
