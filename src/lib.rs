//! rpassbook library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod pagination;
pub mod session;
pub mod transport;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Printers => cli::commands::printers::handle(cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg),
        Commands::Print { .. } => cli::commands::print::handle(&cli.command, cfg),
        Commands::NextPage { .. } => cli::commands::nextpage::handle(&cli.command, cfg),
        Commands::Ruler { .. } => cli::commands::ruler::handle(&cli.command, cfg),
        Commands::Align { .. } => cli::commands::align::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once, honoring a --config override.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
