//! saleswindow library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! resolver core used by the subcommands.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::ClockTime;
use utils::time::parse_clock;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Resolve the evaluation time once: the --at override wins, otherwise
    // the local wall clock. Every handler gets the same instant.
    let now = match &cli.at {
        Some(s) => parse_clock(s)?,
        None => ClockTime::now_local(),
    };

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Next { .. } => cli::commands::next::handle(&cli.command, cfg, now),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, now),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load();

    dispatch(&cli, &cfg)
}
