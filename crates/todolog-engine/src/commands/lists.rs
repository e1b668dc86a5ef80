//! List handlers

use todolog_core::model::ListId;
use todolog_core::ops::TodoRepository;

use super::boundary::Boundary;
use super::outcome::{settle, Outcome, Result};

/// Create a list
///
/// `Invalid` when the name is blank or longer than 100 characters.
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn create_list<R>(repo: &mut R, name: &str) -> Result<Outcome<ListId>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("create_list");
    boundary.close(settle(repo.create_list(name)))
}

/// Delete a list together with its items and their history
///
/// `Conflict` while any item is TODO or IN PROGRESS; `NotFound` for an
/// unknown id. Neither writes anything.
///
/// # Errors
///
/// Returns `ExError` only for storage failures.
pub fn delete_list<R>(repo: &mut R, list_id: ListId) -> Result<Outcome<()>>
where
    R: TodoRepository + ?Sized,
{
    let boundary = Boundary::open("delete_list");
    boundary.close(settle(repo.delete_list(list_id)))
}
