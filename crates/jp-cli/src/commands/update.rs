//! Update command implementation

use anyhow::{bail, Context, Result};
use jp_core::AggregateConfig;
use jp_sql::{denormalize, DenormalizedColumn};

use super::common::Project;
use crate::cli::{GlobalArgs, UpdateArgs};

/// Execute the update command
pub fn execute(args: &UpdateArgs, global: &GlobalArgs) -> Result<()> {
    let project = Project::load(global)?;
    for sql in render(args, &project)? {
        println!("{};", sql);
    }
    Ok(())
}

/// Render one UPDATE per selected aggregate, in declaration order
pub(crate) fn render(args: &UpdateArgs, project: &Project) -> Result<Vec<String>> {
    let selected: Vec<&AggregateConfig> = match &args.only {
        Some(name) => match project.config.get_aggregate(name) {
            Some(aggregate) => vec![aggregate],
            None => bail!("No aggregate named '{}' in {}", name, project.config.name),
        },
        None => project.config.aggregates.iter().collect(),
    };

    if selected.is_empty() {
        log::warn!("Project '{}' declares no aggregates", project.config.name);
    }

    selected
        .into_iter()
        .map(|aggregate| {
            let name = aggregate.qualified_name();
            let column = DenormalizedColumn::from_config(aggregate, project.parser())
                .with_context(|| format!("Invalid aggregate '{}'", name))?;
            let update = denormalize(&project.mapping, &column)
                .with_context(|| format!("Failed to build update for '{}'", name))?;
            log::debug!("Rendered update for {}", name);
            project.validated(project.renderer.update(&update))
        })
        .collect()
}

#[cfg(test)]
#[path = "update_test.rs"]
mod tests;
