//! List subcommands

use clap::{Args, Subcommand};
use todolog_core::commands::Command;
use todolog_core::model::ListId;
use todolog_engine::commands::views;

use super::{run, show, CliResult, Context};
use crate::render;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommand,
}

#[derive(Debug, Subcommand)]
pub enum ListCommand {
    /// Create a new list
    Create {
        /// List name (1-100 characters)
        name: String,
    },
    /// Show a list and its items
    Show { list_id: ListId },
    /// Delete a list; every item must be DONE
    Delete { list_id: ListId },
}

pub fn execute(args: ListArgs, ctx: &mut Context) -> CliResult {
    match args.command {
        ListCommand::Create { name } => run(ctx, Command::CreateList { name }),
        ListCommand::Show { list_id } => {
            let outcome = views::show_list(&ctx.store, list_id)?;
            show(ctx, outcome, render::list)
        }
        ListCommand::Delete { list_id } => run(ctx, Command::DeleteList { list_id }),
    }
}
