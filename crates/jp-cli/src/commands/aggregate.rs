//! Aggregate command implementation

use anyhow::{Context, Result};

use super::common::Project;
use crate::cli::{AggregateArgs, GlobalArgs};

/// Execute the aggregate command
pub fn execute(args: &AggregateArgs, global: &GlobalArgs) -> Result<()> {
    let project = Project::load(global)?;
    println!("{}", render(args, &project)?);
    Ok(())
}

/// Render the correlated aggregate subquery for the requested path
pub(crate) fn render(args: &AggregateArgs, project: &Project) -> Result<String> {
    let path = project.resolve(&args.root, &args.path)?;
    let path = if args.leaf_first { path.reversed() } else { path };
    let expr = project
        .parser()
        .parse_expr(&args.expr)
        .with_context(|| format!("Invalid aggregate expression '{}'", args.expr))?;

    let query =
        jp_sql::build_aggregate(expr, path.hops()).context("Failed to build aggregate")?;
    project.validated(project.renderer.aggregate(&query))
}
