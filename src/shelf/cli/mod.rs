//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! Running `shelf` with no subcommand (or `shelf menu`) starts the interactive
//! menu. The subcommands do the same operations in one shot, which suits scripts.
//!
//! - `setup.rs`: clap argument definitions
//! - `commands.rs`: one handler per subcommand, plus paged display
//! - `menu.rs`: the interactive loop
//! - `input.rs`: prompts over stdin
//! - `print.rs`: coloured output
//!
//! Startup failures (config, catalog files) end the process; see `main.rs`.

mod commands;
mod input;
mod menu;
mod print;
mod setup;

use clap::Parser;
use env_logger::Env;
use input::Input;
use setup::{Cli, Commands};
use shelf::api::ShelfApi;
use shelf::config::{ShelfConfig, CONFIG_FILENAME};
use shelf::error::Result;
use shelf::store::FileStore;
use std::io;
use std::path::PathBuf;

pub struct AppContext {
    pub api: ShelfApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let stdin = io::stdin();
    let mut input = Input::new(stdin.lock());

    match cli.command {
        Some(Commands::Add { title, author }) => commands::handle_add(&mut ctx, &title, &author),
        Some(Commands::Update { id, title, author }) => {
            commands::handle_update(&mut ctx, id, &title, &author)
        }
        Some(Commands::Delete { id }) => commands::handle_delete(&mut ctx, id),
        Some(Commands::Show { id }) => commands::handle_show(&ctx, id),
        Some(Commands::List { json: true, .. }) => commands::handle_json(&ctx),
        Some(Commands::List { page_size, all, .. }) => {
            commands::handle_list(&ctx, &mut input, page_size, all)
        }
        Some(Commands::Status) => commands::handle_status(&ctx),
        Some(Commands::Config) => commands::handle_config(&ctx),
        Some(Commands::Menu) | None => menu::run(&mut ctx, &mut input),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = ShelfConfig::load(&config_path)?;
    log::debug!("Loaded config from {}", config_path.display());

    let store = FileStore::open(&config)?;
    Ok(AppContext {
        api: ShelfApi::new(store, config),
    })
}
