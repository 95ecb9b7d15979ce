//! SQL text rendering for compiled chains and queries
//!
//! Rendering is the only place structural values become text. Output can be
//! re-parsed with the same dialect via [`Renderer::to_statement`], which is
//! how callers get a validated `sqlparser` AST.
//!
//! Mapped table and column names and the identifiers inside user-supplied
//! expressions go through the same [`Quoting`] policy, so a table named in
//! `FROM` and referenced from an aggregate always resolves to one object.

use crate::aggregate::AggregateQuery;
use crate::error::SqlResult;
use crate::join_chain::JoinChain;
use crate::parser::SqlParser;
use crate::select::SelectQuery;
use crate::update::UpdateStatement;
use jp_core::{ColumnRef, Dialect, JoinPredicate, TableName};
use sqlparser::ast::{visit_expressions_mut, Expr, Ident, Statement};
use std::fmt::Write;
use std::ops::ControlFlow;

/// When identifiers are wrapped in quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quoting {
    /// Only names the dialect would otherwise misread
    #[default]
    WhenRequired,
    /// Every table and column name
    Always,
    /// Mapped names as written; expressions untouched
    Never,
}

/// Renders compiled values as SQL for one dialect
pub struct Renderer {
    parser: SqlParser,
    quoting: Quoting,
}

impl Renderer {
    /// Renderer that quotes only where the dialect requires it
    pub fn new(parser: SqlParser) -> Self {
        Self::with_quoting(parser, Quoting::WhenRequired)
    }

    /// Renderer that quotes every table and column identifier
    pub fn quoted(parser: SqlParser) -> Self {
        Self::with_quoting(parser, Quoting::Always)
    }

    /// Renderer that emits identifiers as written in the mapping
    pub fn unquoted(parser: SqlParser) -> Self {
        Self::with_quoting(parser, Quoting::Never)
    }

    pub fn with_quoting(parser: SqlParser, quoting: Quoting) -> Self {
        Self { parser, quoting }
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(SqlParser::for_dialect(dialect))
    }

    pub fn parser(&self) -> &SqlParser {
        &self.parser
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    fn should_quote(&self, ident: &str) -> bool {
        match self.quoting {
            Quoting::Always => true,
            Quoting::WhenRequired => self.parser.requires_quoting(ident),
            Quoting::Never => false,
        }
    }

    fn ident(&self, ident: &str) -> String {
        if self.should_quote(ident) {
            self.parser.quote_ident(ident)
        } else {
            ident.to_string()
        }
    }

    /// Schema-qualified names are quoted part by part
    fn table(&self, table: &TableName) -> String {
        table
            .parts()
            .map(|part| self.ident(part))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn requote(&self, ident: &mut Ident) {
        ident.quote_style = self.should_quote(&ident.value).then_some('"');
    }

    /// Render a user expression with its identifiers quoted like mapped names
    pub fn expr(&self, expr: &Expr) -> String {
        if self.quoting == Quoting::Never {
            return expr.to_string();
        }
        let mut expr = expr.clone();
        let _ = visit_expressions_mut(&mut expr, |e| {
            match e {
                Expr::Identifier(ident) => self.requote(ident),
                Expr::CompoundIdentifier(parts) => {
                    parts.iter_mut().for_each(|ident| self.requote(ident))
                }
                _ => {}
            }
            ControlFlow::<()>::Continue(())
        });
        expr.to_string()
    }

    pub fn column(&self, column: &ColumnRef) -> String {
        format!(
            "{}.{}",
            self.table(&column.table),
            self.ident(&column.column)
        )
    }

    /// `a.x = b.y AND a.z = b.w`
    pub fn predicate(&self, predicate: &JoinPredicate) -> String {
        predicate
            .terms()
            .iter()
            .map(|term| format!("{} = {}", self.column(&term.left), self.column(&term.right)))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// The FROM clause body: anchor table followed by `JOIN ... ON ...` steps
    pub fn from_clause(&self, chain: &JoinChain) -> String {
        let mut out = self.table(&chain.anchor().table);
        for step in chain.joins() {
            let _ = write!(
                out,
                " JOIN {} ON {}",
                self.table(step.target.table()),
                self.predicate(&step.on)
            );
        }
        out
    }

    /// `SELECT <aggregate> FROM <chain> WHERE <correlation>`
    pub fn aggregate(&self, query: &AggregateQuery) -> String {
        format!(
            "SELECT {} FROM {} WHERE {}",
            self.expr(&query.aggregate),
            self.from_clause(&query.from),
            self.predicate(&query.correlation)
        )
    }

    /// `SELECT <projection> FROM <chain>`
    pub fn select(&self, query: &SelectQuery) -> String {
        let projection = if query.projection.is_empty() {
            "*".to_string()
        } else {
            query
                .projection
                .iter()
                .map(|e| self.expr(e))
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("SELECT {} FROM {}", projection, self.from_clause(&query.from))
    }

    /// `UPDATE <table> SET <column> = (<aggregate>) [WHERE <filter>]`
    pub fn update(&self, update: &UpdateStatement) -> String {
        let mut out = format!(
            "UPDATE {} SET {} = ({})",
            self.table(&update.target.table),
            self.ident(&update.column),
            self.aggregate(&update.value)
        );
        if let Some(filter) = &update.filter {
            let _ = write!(out, " WHERE {}", self.expr(filter));
        }
        out
    }

    /// Parse rendered SQL back into a statement, validating it for the dialect
    pub fn to_statement(&self, sql: &str) -> SqlResult<Statement> {
        self.parser.parse_single(sql)
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
