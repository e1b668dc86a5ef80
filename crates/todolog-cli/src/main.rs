//! todolog CLI
//!
//! Command-line interface for todo lists with per-item status history

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use todolog_core::logging_facility;
use todolog_store::SqliteStore;

mod commands;
mod config;
mod render;

use commands::Context;
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "todolog")]
#[command(about = "todolog - todo lists with status history", long_about = None)]
struct Cli {
    /// SQLite database file (overrides TODOLOG_DATABASE and todolog.toml)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log output on stderr: pretty, json or off
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show all lists
    Lists,
    /// List operations
    List(commands::list::ListArgs),
    /// Item operations
    Item(commands::item::ItemArgs),
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = Config::load(cli.db, cli.log_format)?;
    logging_facility::init(config.log_profile()?);

    let store = SqliteStore::open(&config.store_config())?;
    let mut ctx = Context::new(store, cli.json);

    match cli.command {
        Commands::Lists => commands::lists::execute(&mut ctx),
        Commands::List(args) => commands::list::execute(args, &mut ctx),
        Commands::Item(args) => commands::item::execute(args, &mut ctx),
    }
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
