//! SQL dialect abstraction

use sqlparser::ast::{Expr, Statement};
use sqlparser::dialect::{
    Dialect, DuckDbDialect as SqlParserDuckDb, PostgreSqlDialect as SqlParserPostgres,
    SnowflakeDialect as SqlParserSnowflake,
};
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::Token;

use crate::error::{SqlError, SqlResult};

/// Trait for SQL dialect implementations
pub trait SqlDialect: Send + Sync {
    /// Get the underlying sqlparser dialect
    fn parser_dialect(&self) -> &dyn Dialect;

    /// Parse SQL into AST statements
    fn parse(&self, sql: &str) -> SqlResult<Vec<Statement>> {
        Parser::parse_sql(self.parser_dialect(), sql).map_err(to_sql_error)
    }

    /// Parse a single standalone expression, rejecting trailing tokens
    fn parse_expr(&self, sql: &str) -> SqlResult<Expr> {
        let mut parser = Parser::new(self.parser_dialect())
            .try_with_sql(sql)
            .map_err(to_sql_error)?;
        let expr = parser.parse_expr().map_err(to_sql_error)?;

        let next = parser.peek_token();
        if next.token != Token::EOF {
            return Err(SqlError::ParseError {
                message: format!("Unexpected trailing input after expression: {}", next.token),
                line: next.span.start.line as usize,
                column: next.span.start.column as usize,
            });
        }
        Ok(expr)
    }

    /// Quote an identifier for this dialect
    fn quote_ident(&self, ident: &str) -> String;

    /// Whether `ident` only keeps its meaning when quoted
    fn requires_quoting(&self, ident: &str) -> bool {
        !is_bare_identifier(ident)
    }

    /// Get the dialect name
    fn name(&self) -> &'static str;
}

fn to_sql_error(e: ParserError) -> SqlError {
    let msg = e.to_string();
    // Extract line/column from error message (format: "... at Line: X, Column: Y")
    let (line, column) = parse_location_from_error(&msg);
    SqlError::ParseError {
        message: msg,
        line,
        column,
    }
}

/// Parse line and column from sqlparser error message.
///
/// `ParserError` is a string wrapper with no structured location data, so
/// "Line: N, Column: M" is extracted from the message text.
fn parse_location_from_error(msg: &str) -> (usize, usize) {
    let Some(line_idx) = msg.find("Line: ") else {
        return (0, 0);
    };
    let line_start = line_idx + 6;
    let Some(comma_idx) = msg[line_start..].find(',') else {
        return (0, 0);
    };
    let Ok(line) = msg[line_start..line_start + comma_idx]
        .trim()
        .parse::<usize>()
    else {
        return (0, 0);
    };
    let Some(col_idx) = msg.find("Column: ") else {
        return (0, 0);
    };
    let col_start = col_idx + 8;
    let col_end = msg[col_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| col_start + i)
        .unwrap_or(msg.len());
    let Ok(column) = msg[col_start..col_end].trim().parse::<usize>() else {
        return (0, 0);
    };
    (line, column)
}

/// Keywords no supported dialect accepts as a bare table or column name
const RESERVED: &[&str] = &[
    "all", "and", "as", "by", "case", "distinct", "else", "end", "from", "group", "having",
    "in", "is", "join", "limit", "not", "null", "on", "or", "order", "select", "table", "then",
    "union", "user", "when", "where",
];

/// `[A-Za-z_][A-Za-z0-9_]*` and not a reserved word
fn is_bare_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    starts_ok
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&ident.to_ascii_lowercase().as_str())
}

fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// DuckDB SQL dialect
pub struct DuckDbDialect {
    dialect: SqlParserDuckDb,
}

impl DuckDbDialect {
    /// Create a new DuckDB dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserDuckDb {},
        }
    }
}

impl Default for DuckDbDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for DuckDbDialect {
    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn quote_ident(&self, ident: &str) -> String {
        quote_double(ident)
    }

    fn name(&self) -> &'static str {
        "duckdb"
    }
}

/// Snowflake SQL dialect
pub struct SnowflakeDialect {
    dialect: SqlParserSnowflake,
}

impl SnowflakeDialect {
    /// Create a new Snowflake dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserSnowflake {},
        }
    }
}

impl Default for SnowflakeDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for SnowflakeDialect {
    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn quote_ident(&self, ident: &str) -> String {
        quote_double(ident)
    }

    fn name(&self) -> &'static str {
        "snowflake"
    }
}

/// PostgreSQL dialect
pub struct PostgresDialect {
    dialect: SqlParserPostgres,
}

impl PostgresDialect {
    /// Create a new PostgreSQL dialect
    pub fn new() -> Self {
        Self {
            dialect: SqlParserPostgres {},
        }
    }
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for PostgresDialect {
    fn parser_dialect(&self) -> &dyn Dialect {
        &self.dialect
    }

    fn quote_ident(&self, ident: &str) -> String {
        quote_double(ident)
    }

    /// Unquoted names fold to lowercase, so any uppercase letter needs quotes
    fn requires_quoting(&self, ident: &str) -> bool {
        !is_bare_identifier(ident) || ident.chars().any(|c| c.is_ascii_uppercase())
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
