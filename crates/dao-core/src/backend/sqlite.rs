// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQLite executor.

use async_trait::async_trait;
use sqlx::{Row as _, Sqlite, SqlitePool, sqlite::SqliteRow};

use super::{BackendError, query};
use crate::{
    error::BoxError,
    executor::Executor,
    field::FieldKind,
    row::Row,
    sql::{Dialect, Statement, placeholder::bind},
    value::Value
};

/// [`Executor`] over a `sqlx::SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteExecutor {
    pool: SqlitePool
}

impl SqliteExecutor {
    /// Wrap a pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool
        }
    }

    /// Underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl From<SqlitePool> for SqliteExecutor {
    fn from(pool: SqlitePool) -> Self {
        Self::new(pool)
    }
}

#[async_trait]
impl Executor for SqliteExecutor {
    type Row = SqliteRow;
    type Error = BackendError;

    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, BackendError> {
        let bound = bind(statement, self.dialect())?;
        let result = query::<Sqlite>(&bound.sql, bound.values)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<SqliteRow>, BackendError> {
        let bound = bind(statement, self.dialect())?;
        Ok(query::<Sqlite>(&bound.sql, bound.values)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn fetch_optional(
        &self,
        statement: &Statement
    ) -> Result<Option<SqliteRow>, BackendError> {
        let bound = bind(statement, self.dialect())?;
        Ok(query::<Sqlite>(&bound.sql, bound.values)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn fetch_count(&self, statement: &Statement) -> Result<i64, BackendError> {
        let bound = bind(statement, self.dialect())?;
        let row = query::<Sqlite>(&bound.sql, bound.values)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>(0)?)
    }
}

impl Row for SqliteRow {
    fn read(&self, column: &str, kind: FieldKind) -> Result<Value, BoxError> {
        let value: Value = match kind {
            FieldKind::Text | FieldKind::Json => self.try_get::<Option<String>, _>(column)?.into(),
            FieldKind::Integer => self.try_get::<Option<i64>, _>(column)?.into(),
            FieldKind::Float => self.try_get::<Option<f64>, _>(column)?.into(),
            FieldKind::Boolean => self.try_get::<Option<bool>, _>(column)?.into()
        };
        Ok(value)
    }
}
