//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use jp_core::{Config, EntityName, Path as RelPath};
use jp_sql::{resolve, Mapping, Renderer, SqlParser};
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Configuration, mapping and renderer for one project directory
pub(crate) struct Project {
    pub(crate) config: Config,
    pub(crate) mapping: Mapping,
    pub(crate) renderer: Renderer,
}

impl Project {
    /// Load the project selected by the global arguments
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let root = Path::new(&global.project_dir);
        let config = match &global.config {
            Some(path) => Config::load(Path::new(path)),
            None => Config::load_from_dir(root),
        }
        .context("Failed to load project config")?;

        let parser = match &global.dialect {
            Some(name) => SqlParser::from_dialect_name(name).context("Invalid SQL dialect")?,
            None => SqlParser::for_dialect(config.dialect),
        };

        let mapping_paths: Vec<PathBuf> = config.mapping_paths_absolute(root);
        let mapping = Mapping::load(&mapping_paths, &parser).context("Failed to load mapping")?;
        log::debug!(
            "Loaded project '{}' ({} dialect, {} mapping file(s))",
            config.name,
            parser.dialect_name(),
            mapping_paths.len()
        );

        Ok(Self {
            config,
            mapping,
            renderer: Renderer::new(parser),
        })
    }

    pub(crate) fn parser(&self) -> &SqlParser {
        self.renderer.parser()
    }

    /// Resolve `path` starting at the entity named `root`
    pub(crate) fn resolve(&self, root: &str, path: &str) -> Result<RelPath> {
        let root = parse_entity(root)?;
        resolve(&self.mapping, &root, path)
            .with_context(|| format!("Failed to resolve '{}.{}'", root, path))
    }

    /// Re-parse rendered SQL so invalid output never reaches stdout
    pub(crate) fn validated(&self, sql: String) -> Result<String> {
        self.renderer
            .to_statement(&sql)
            .with_context(|| format!("Rendered SQL does not parse: {}", sql))?;
        Ok(sql)
    }
}

pub(crate) fn parse_entity(name: &str) -> Result<EntityName> {
    EntityName::try_new(name)
        .with_context(|| format!("Invalid entity name '{}'", name))
}

#[cfg(test)]
#[path = "common_test.rs"]
pub(crate) mod tests;
