// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! PostgreSQL executor.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row as _, postgres::PgRow};

use super::{BackendError, query};
use crate::{
    error::BoxError,
    executor::Executor,
    field::FieldKind,
    row::Row,
    sql::{Dialect, Statement, placeholder::bind},
    value::Value
};

/// [`Executor`] over a `sqlx::PgPool`.
///
/// # Example
///
/// ```rust,ignore
/// let pool = PgPool::connect(&database_url).await?;
/// let hotels = GenericDao::<Hotel, _>::new(PgExecutor::new(pool));
/// ```
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool
}

impl PgExecutor {
    /// Wrap a pool.
    pub const fn new(pool: PgPool) -> Self {
        Self {
            pool
        }
    }

    /// Underlying pool.
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl From<PgPool> for PgExecutor {
    fn from(pool: PgPool) -> Self {
        Self::new(pool)
    }
}

#[async_trait]
impl Executor for PgExecutor {
    type Row = PgRow;
    type Error = BackendError;

    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, BackendError> {
        let bound = bind(statement, self.dialect())?;
        let result = query::<Postgres>(&bound.sql, bound.values)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<PgRow>, BackendError> {
        let bound = bind(statement, self.dialect())?;
        Ok(query::<Postgres>(&bound.sql, bound.values)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<PgRow>, BackendError> {
        let bound = bind(statement, self.dialect())?;
        Ok(query::<Postgres>(&bound.sql, bound.values)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn fetch_count(&self, statement: &Statement) -> Result<i64, BackendError> {
        let bound = bind(statement, self.dialect())?;
        let row = query::<Postgres>(&bound.sql, bound.values)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get::<i64, _>(0)?)
    }
}

impl Row for PgRow {
    fn read(&self, column: &str, kind: FieldKind) -> Result<Value, BoxError> {
        let value: Value = match kind {
            FieldKind::Text | FieldKind::Json => self.try_get::<Option<String>, _>(column)?.into(),
            FieldKind::Integer => self
                .try_get::<Option<i64>, _>(column)
                .or_else(|_| self.try_get::<Option<i32>, _>(column).map(|n| n.map(i64::from)))
                .or_else(|_| self.try_get::<Option<i16>, _>(column).map(|n| n.map(i64::from)))?
                .into(),
            FieldKind::Float => self
                .try_get::<Option<f64>, _>(column)
                .or_else(|_| self.try_get::<Option<f32>, _>(column).map(|f| f.map(f64::from)))?
                .into(),
            FieldKind::Boolean => self.try_get::<Option<bool>, _>(column)?.into()
        };
        Ok(value)
    }
}
