//! Join command implementation

use anyhow::{Context, Result};

use super::common::Project;
use crate::cli::{GlobalArgs, JoinArgs};

/// Execute the join command
pub fn execute(args: &JoinArgs, global: &GlobalArgs) -> Result<()> {
    let project = Project::load(global)?;
    println!("{}", render(args, &project)?);
    Ok(())
}

/// Render the chained SELECT for the requested path
pub(crate) fn render(args: &JoinArgs, project: &Project) -> Result<String> {
    let path = project.resolve(&args.root, &args.path)?;
    let projection = args
        .select
        .iter()
        .map(|expr| {
            project
                .parser()
                .parse_expr(expr)
                .with_context(|| format!("Invalid projection '{}'", expr))
        })
        .collect::<Result<Vec<_>>>()?;

    let select = jp_sql::build_select(projection, path.hops())
        .context("Failed to compile join chain")?;
    project.validated(project.renderer.select(&select))
}
