//! The index view

use todolog_engine::commands::views;

use super::{show, CliResult, Context};
use crate::render;

pub fn execute(ctx: &mut Context) -> CliResult {
    let outcome = views::list_lists(&ctx.store)?;
    show(ctx, outcome, |summaries| render::lists(summaries))
}
