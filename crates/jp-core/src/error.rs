//! Error types for jp-core

use thiserror::Error;

/// Core error type for Joinpath
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Failed to parse configuration or mapping file
    #[error("[E002] Failed to parse {path}: {message}")]
    ConfigParseError { path: String, message: String },

    /// E003: Invalid configuration value
    #[error("[E003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E004: IO error with file path context
    #[error("[E004] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E005: YAML parse error
    #[error("[E005] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// R001: Entity type is not mapped
    #[error("[R001] Unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    /// R002: Path segment does not name a relationship on the current entity
    #[error("[R002] Entity '{entity}' has no relationship named '{relationship}'")]
    UnknownRelationship {
        entity: String,
        relationship: String,
    },

    /// R003: A path, join chain, or aggregate was requested with zero hops
    #[error("[R003] Relationship path is empty")]
    EmptyPath,

    /// R004: Adjacent hops do not share an entity
    #[error("[R004] Hop {index} does not connect to the previous hop: expected '{expected}', found '{found}'")]
    InvalidHopInvariant {
        index: usize,
        expected: String,
        found: String,
    },

    /// R005: Entity mapped twice
    #[error("[R005] Duplicate entity '{entity}'")]
    DuplicateEntity { entity: String },

    /// R006: Relationship declared twice on the same entity
    #[error("[R006] Duplicate relationship '{relationship}' on entity '{entity}'")]
    DuplicateRelationship {
        entity: String,
        relationship: String,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
