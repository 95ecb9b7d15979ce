//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Joinpath - compile relationship paths into SQL joins and aggregates
#[derive(Parser, Debug)]
#[command(name = "jp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override SQL dialect (duckdb, snowflake, postgres)
    #[arg(short, long, global = true)]
    pub dialect: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a relationship path and list its hops
    Resolve(ResolveArgs),

    /// Render the chained join for a path as a SELECT
    Join(JoinArgs),

    /// Render a correlated aggregate subquery over a path
    Aggregate(AggregateArgs),

    /// Render UPDATE statements for the configured denormalized columns
    Update(UpdateArgs),
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Entity the path starts from
    #[arg(short, long)]
    pub root: String,

    /// Dotted relationship path, e.g. orders.items
    pub path: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: ResolveOutput,
}

/// Resolve output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutput {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for the join command
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Entity the path starts from
    #[arg(short, long)]
    pub root: String,

    /// Dotted relationship path
    pub path: String,

    /// Projection expressions (default: *)
    #[arg(short, long)]
    pub select: Vec<String>,
}

/// Arguments for the aggregate command
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Entity the path starts from
    #[arg(short, long)]
    pub root: String,

    /// Dotted relationship path
    pub path: String,

    /// Aggregate expression, e.g. "count(orders.id)"
    #[arg(short, long)]
    pub expr: String,

    /// Traverse the resolved path from its leaf, correlating on the root relationship
    #[arg(long)]
    pub leaf_first: bool,
}

/// Arguments for the update command
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Only render this column (Entity.column)
    #[arg(long)]
    pub only: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
