//! Joinpath CLI - compile relationship paths into joins and denormalization updates

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::{aggregate, join, resolve, update};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.global.verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();

    match &cli.command {
        cli::Commands::Resolve(args) => resolve::execute(args, &cli.global),
        cli::Commands::Join(args) => join::execute(args, &cli.global),
        cli::Commands::Aggregate(args) => aggregate::execute(args, &cli.global),
        cli::Commands::Update(args) => update::execute(args, &cli.global),
    }
}
