// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement synthesis.
//!
//! # Generated SQL
//!
//! ```sql
//! -- INSERT
//! INSERT INTO hotel (id, name) VALUES (:id, :name)
//!
//! -- GET BY ID
//! SELECT * FROM hotel WHERE id = ?
//!
//! -- UPDATE (id never appears in SET)
//! UPDATE hotel SET name = :name WHERE id = :id
//!
//! -- DELETE
//! DELETE FROM hotel WHERE id = ?
//!
//! -- FILTER
//! SELECT * FROM hotel WHERE id LIKE :id ORDER BY id DESC LIMIT 10 OFFSET 20
//!
//! -- COUNT
//! SELECT COUNT(*) FROM hotel WHERE id LIKE :id
//! ```

use super::{Dialect, Statement, predicate::WhereClause};
use crate::{ID_COLUMN, change_set::ChangeSet, error::ConfigError, filter::Filtering};

/// Builds statements for one table.
#[derive(Debug, Clone, Copy)]
pub struct SqlBuilder<'a> {
    table:   &'a str,
    dialect: Dialect
}

impl<'a> SqlBuilder<'a> {
    /// Builder for `table` with the default dialect.
    pub fn new(table: &'a str) -> Self {
        Self {
            table,
            dialect: Dialect::default()
        }
    }

    /// Render pagination for `dialect`.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Target table.
    pub const fn table(&self) -> &'a str {
        self.table
    }

    /// Dialect used for pagination.
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyInsert`] if `changes` is empty.
    pub fn insert(&self, changes: ChangeSet) -> Result<Statement, ConfigError> {
        if changes.is_empty() {
            return Err(ConfigError::EmptyInsert {
                table: self.table.to_owned()
            });
        }

        let columns = changes.columns().collect::<Vec<_>>();
        let placeholders = columns
            .iter()
            .map(|column| format!(":{column}"))
            .collect::<Vec<_>>();

        let mut statement = Statement::new(format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        ));
        for (column, value) in changes {
            statement = statement.bind(column, value);
        }
        Ok(statement)
    }

    /// `UPDATE <table> SET ... WHERE id = :id`.
    ///
    /// The `id` column is dropped from `changes`; returns `None` when nothing
    /// is left to set.
    pub fn update(&self, id: &str, mut changes: ChangeSet) -> Option<Statement> {
        changes.remove(ID_COLUMN);
        if changes.is_empty() {
            return None;
        }

        let assignments = changes
            .columns()
            .map(|column| format!("{column} = :{column}"))
            .collect::<Vec<_>>();

        let mut statement = Statement::new(format!(
            "UPDATE {} SET {} WHERE {ID_COLUMN} = :{ID_COLUMN}",
            self.table,
            assignments.join(", ")
        ));
        for (column, value) in changes {
            statement = statement.bind(column, value);
        }
        Some(statement.bind(ID_COLUMN, id))
    }

    /// `SELECT * FROM <table> WHERE id = ?`.
    pub fn select_by_id(&self, id: &str) -> Statement {
        Statement::new(format!("SELECT * FROM {} WHERE {ID_COLUMN} = ?", self.table))
            .bind_positional(id)
    }

    /// `DELETE FROM <table> WHERE id = ?`.
    pub fn delete_by_id(&self, id: &str) -> Statement {
        Statement::new(format!("DELETE FROM {} WHERE {ID_COLUMN} = ?", self.table))
            .bind_positional(id)
    }

    /// `SELECT * FROM <table> [WHERE ...] [ORDER BY ...] [LIMIT n] [OFFSET n]`.
    ///
    /// The three trailing clauses always appear in this order.
    ///
    /// # Errors
    ///
    /// Propagates predicate compilation errors.
    pub fn select(&self, filtering: &Filtering) -> Result<Statement, ConfigError> {
        let clause = WhereClause::compile(filtering)?;
        let mut sql = format!("SELECT * FROM {}{}", self.table, clause.to_sql());

        if let Some(sort) = filtering.sort() {
            sql.push_str(&format!(" ORDER BY {} {}", sort.field, sort.direction.as_sql()));
        }
        sql.push_str(&self.dialect.limit_offset(filtering.limit(), filtering.offset()));

        Ok(Statement {
            sql,
            params: clause.params,
            positional: Vec::new()
        })
    }

    /// `SELECT COUNT(*) FROM <table> [WHERE ...]`.
    ///
    /// Uses the same WHERE derivation as [`select`](Self::select); pagination
    /// and sorting are ignored.
    ///
    /// # Errors
    ///
    /// Propagates predicate compilation errors.
    pub fn count(&self, filtering: &Filtering) -> Result<Statement, ConfigError> {
        let clause = WhereClause::compile(filtering)?;
        Ok(Statement {
            sql:        format!("SELECT COUNT(*) FROM {}{}", self.table, clause.to_sql()),
            params:     clause.params,
            positional: Vec::new()
        })
    }
}
