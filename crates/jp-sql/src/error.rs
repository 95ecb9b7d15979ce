//! Error types for jp-sql

use jp_core::CoreError;
use thiserror::Error;

/// SQL parsing, resolution, and compilation errors
#[derive(Error, Debug)]
pub enum SqlError {
    /// SQL parse error (S001)
    #[error("[S001] SQL parse error at line {line}, column {column}: {message}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    /// Empty SQL (S002)
    #[error("[S002] SQL is empty")]
    EmptySql,

    /// Unsupported SQL statement (S003)
    #[error("[S003] Unsupported SQL statement type: {0}")]
    UnsupportedStatement(String),

    /// Join predicate is not a conjunction of qualified column equalities (S004)
    #[error("[S004] Invalid join predicate '{predicate}': {reason}")]
    InvalidPredicate { predicate: String, reason: String },

    /// Malformed dotted relationship path (S005)
    #[error("[S005] Invalid relationship path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Unknown dialect name (S006)
    #[error("[S006] Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    /// Core error propagation (S007)
    #[error("[S007] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for SqlError
pub type SqlResult<T> = Result<T, SqlError>;
