//! Configuration types and parsing for joinpath.yml

use crate::column_name::ColumnName;
use crate::entity_name::EntityName;
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main project configuration from joinpath.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// SQL dialect used to parse predicates and render output
    #[serde(default)]
    pub dialect: Dialect,

    /// Mapping documents, merged in order
    #[serde(default = "default_mapping_paths")]
    pub mapping_paths: Vec<String>,

    /// Denormalized columns maintained as aggregates over a relationship path
    #[serde(default)]
    pub aggregates: Vec<AggregateConfig>,
}

/// SQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// DuckDB SQL dialect
    #[default]
    DuckDb,
    /// Snowflake SQL dialect
    Snowflake,
    /// PostgreSQL dialect
    Postgres,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::DuckDb => write!(f, "duckdb"),
            Dialect::Snowflake => write!(f, "snowflake"),
            Dialect::Postgres => write!(f, "postgres"),
        }
    }
}

/// A denormalized column refreshed from an aggregate subquery
///
/// ```yaml
/// aggregates:
///   - entity: Customer
///     column: order_count
///     path: orders
///     expression: count(orders.id)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateConfig {
    /// Entity owning the denormalized column, and root of `path`
    pub entity: EntityName,

    /// Column to assign
    pub column: ColumnName,

    /// Dotted relationship path starting at `entity`
    pub path: String,

    /// Aggregate SQL expression (e.g. `sum(items.price)`)
    pub expression: String,

    /// Optional filter restricting which rows of `entity` are updated
    #[serde(default)]
    pub filter: Option<String>,
}

impl AggregateConfig {
    /// `Entity.column`, used to select aggregates from the CLI
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.entity, self.column)
    }
}

fn default_mapping_paths() -> Vec<String> {
    vec!["mapping.yml".to_string()]
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for joinpath.yml or joinpath.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("joinpath.yml");
        let yaml_path = dir.join("joinpath.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.mapping_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one mapping_paths entry must be specified".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for aggregate in &self.aggregates {
            let qualified = aggregate.qualified_name();
            if aggregate.path.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Aggregate '{}' has an empty path", qualified),
                });
            }
            if aggregate.expression.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Aggregate '{}' has an empty expression", qualified),
                });
            }
            if !seen.insert(qualified.clone()) {
                return Err(CoreError::ConfigInvalid {
                    message: format!("Aggregate '{}' is declared more than once", qualified),
                });
            }
        }

        Ok(())
    }

    /// Mapping document paths resolved against the project root
    pub fn mapping_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        self.mapping_paths.iter().map(|p| root.join(p)).collect()
    }

    /// Find a declared aggregate by its `Entity.column` name
    pub fn get_aggregate(&self, qualified_name: &str) -> Option<&AggregateConfig> {
        self.aggregates
            .iter()
            .find(|a| a.qualified_name() == qualified_name)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
