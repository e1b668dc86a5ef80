//! Item subcommands

use clap::{Args, Subcommand};
use todolog_core::commands::Command;
use todolog_core::model::{ItemId, ListId};
use todolog_engine::commands::views;

use super::{run, show, CliResult, Context};
use crate::render;

#[derive(Debug, Args)]
pub struct ItemArgs {
    #[command(subcommand)]
    pub command: ItemCommand,
}

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Add an item to a list (starts as TODO)
    Add {
        list_id: ListId,
        /// Item title (1-200 characters)
        title: String,
    },
    /// Show an item and its status history
    Show { item_id: ItemId },
    /// Replace an item's title and status
    Edit {
        item_id: ItemId,
        #[arg(long)]
        title: String,
        /// TODO, IN_PROGRESS or DONE
        #[arg(long)]
        status: String,
    },
    /// Change an item's status; unknown values are ignored
    Status {
        item_id: ItemId,
        /// TODO, IN_PROGRESS or DONE
        status: String,
    },
    /// Delete an item and its history
    Delete { item_id: ItemId },
}

pub fn execute(args: ItemArgs, ctx: &mut Context) -> CliResult {
    match args.command {
        ItemCommand::Add { list_id, title } => run(ctx, Command::AddItem { list_id, title }),
        ItemCommand::Show { item_id } => {
            let outcome = views::show_item(&ctx.store, item_id)?;
            show(ctx, outcome, render::item)
        }
        ItemCommand::Edit {
            item_id,
            title,
            status,
        } => run(
            ctx,
            Command::EditItem {
                item_id,
                title,
                status,
            },
        ),
        ItemCommand::Status { item_id, status } => {
            run(ctx, Command::ChangeStatus { item_id, status })
        }
        ItemCommand::Delete { item_id } => run(ctx, Command::DeleteItem { item_id }),
    }
}
